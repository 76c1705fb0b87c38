use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub const PUBLIC_ACTIONS: &[&str] = &["register"];
pub const ADMIN_ACTIONS: &[&str] = &["remove", "view_participants", "export"];

#[derive(Debug, Serialize)]
pub struct EventCard {
    #[serde(flatten)]
    pub event: Event,
    pub actions: &'static [&'static str],
}

async fn cards(state: &AppState, actions: &'static [&'static str]) -> axum::response::Response {
    match state.list_events.handle().await {
        Ok(events) => Json(
            events
                .into_iter()
                .map(|event| EventCard { event, actions })
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn public(State(state): State<AppState>) -> impl IntoResponse {
    cards(&state, PUBLIC_ACTIONS).await
}

pub async fn admin(State(state): State<AppState>) -> impl IntoResponse {
    cards(&state, ADMIN_ACTIONS).await
}
