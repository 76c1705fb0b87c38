use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<String>) -> impl IntoResponse {
    match state.view_participants.handle(&event_id).await {
        Ok(participants) => Json(participants).into_response(),
        Err(e) => e.into_response(),
    }
}
