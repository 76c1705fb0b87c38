use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::events::use_cases::errors::error_response;
use crate::modules::events::use_cases::export_roster::handler::ExportError;
use crate::shell::state::AppState;

pub const NOTHING_TO_DOWNLOAD: &str = "No participants to download.";

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<String>) -> impl IntoResponse {
    match state.export_roster.handle(&event_id).await {
        Ok(roster) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, roster.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", roster.file_name.replace('"', "")),
                ),
            ],
            roster.bytes,
        )
            .into_response(),
        Err(ExportError::NoParticipants(_)) => {
            error_response(StatusCode::NOT_FOUND, NOTHING_TO_DOWNLOAD)
        }
        Err(e @ ExportError::UnknownEvent(_)) => error_response(StatusCode::NOT_FOUND, e.to_string()),
        Err(ExportError::Storage(e)) => e.into_response(),
    }
}
