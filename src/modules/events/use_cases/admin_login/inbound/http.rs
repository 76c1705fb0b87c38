use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::errors::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AdminLoginBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<AdminLoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };
    match state.admin_login.handle(&body.username, &body.password).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn current(State(state): State<AppState>) -> impl IntoResponse {
    Json(*state.session.read().await)
}
