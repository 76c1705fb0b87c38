use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

/// Answers 204 whether or not the event existed.
pub async fn handle(State(state): State<AppState>, Path(event_id): Path<String>) -> impl IntoResponse {
    match state.remove_event.handle(&event_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
