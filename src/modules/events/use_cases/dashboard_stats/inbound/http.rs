use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.dashboard_stats.handle(Utc::now()).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => e.into_response(),
    }
}
