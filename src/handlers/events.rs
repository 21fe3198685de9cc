use axum::extract::{Path, State};
use axum::Json;

use crate::models::Event;
use crate::state::AppState;
use crate::utils::error::AppError;

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.store.get_events().await)
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Event>, AppError> {
    state
        .store
        .get_event(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}
