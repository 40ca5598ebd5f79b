use crate::models::PlannerData;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to the single in-memory model. The mutex serializes user
/// actions: each one is applied in full before the next is observed.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<PlannerData>>,
}

impl AppState {
    pub fn new(data: PlannerData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }
}
