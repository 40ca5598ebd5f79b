use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/tasks/add", post(handlers::add_task))
        .route("/api/tasks/delete", post(handlers::delete_task))
        .route("/api/week/anchor", post(handlers::set_anchor))
        .route("/api/habits/toggle", post(handlers::toggle_habit))
        .route("/api/habits/add", post(handlers::add_habit))
        .route("/api/habits/delete", post(handlers::delete_habit))
        .route("/api/owner", post(handlers::set_owner))
        .route("/api/sync", post(handlers::sync))
        .with_state(state)
}
