use crate::errors::AppError;
use crate::models::{
    AddHabitRequest, AddTaskRequest, AnchorRequest, DashboardResponse, HabitCellRequest, HabitRef,
    OwnerRequest, PlannerData, SyncResponse, TaskRef,
};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::NaiveDate;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.owner))
}

/// Full model snapshot. Mutating handlers return the same shape so the page
/// always re-renders from a fresh copy instead of patching local state.
pub async fn get_state(State(state): State<AppState>) -> Json<PlannerData> {
    let data = state.data.lock().await;
    Json(data.clone())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let data = state.data.lock().await;
    Json(build_dashboard(&data))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(req): Json<TaskRef>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    data.toggle_task(&req.day_id, &req.task_id);
    Json(data.clone())
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(req): Json<AddTaskRequest>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    let _ = data.add_task(&req.day_id, &req.text);
    Json(data.clone())
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<TaskRef>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    data.delete_task(&req.day_id, &req.task_id);
    Json(data.clone())
}

pub async fn set_anchor(
    State(state): State<AppState>,
    Json(req): Json<AnchorRequest>,
) -> Result<Json<PlannerData>, AppError> {
    let date = req
        .date
        .parse::<NaiveDate>()
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;

    let mut data = state.data.lock().await;
    data.set_week_anchor(date);
    Ok(Json(data.clone()))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Json(req): Json<HabitCellRequest>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    data.toggle_habit(&req.habit_id, req.day);
    Json(data.clone())
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(req): Json<AddHabitRequest>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    let _ = data.add_habit(&req.name);
    Json(data.clone())
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Json(req): Json<HabitRef>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    data.delete_habit(&req.habit_id);
    Json(data.clone())
}

pub async fn set_owner(
    State(state): State<AppState>,
    Json(req): Json<OwnerRequest>,
) -> Json<PlannerData> {
    let mut data = state.data.lock().await;
    data.set_owner(&req.name);
    Json(data.clone())
}

/// Calendar sync is a stub: an acknowledgment and nothing else. A real
/// integration would live in a separate service behind this endpoint.
pub async fn sync(State(_state): State<AppState>) -> Json<SyncResponse> {
    info!("calendar sync requested (stub)");
    Json(SyncResponse {
        message: "Инициирована синхронизация с Google Calendar (демо-режим)".to_string(),
    })
}
