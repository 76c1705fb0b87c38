use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::add_event::command::AddEvent;
use crate::modules::events::use_cases::errors::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddEventBody {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub time: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };

    let command = AddEvent {
        id: body.id,
        name: body.name,
        category: body.category,
        date: body.date,
        venue: body.venue,
        time: body.time,
    };

    match state.add_event.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
