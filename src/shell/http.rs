use axum::{
    Extension, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::add_event::inbound::http as add_http;
use crate::modules::events::use_cases::admin_login::inbound::http as login_http;
use crate::modules::events::use_cases::dashboard_stats::inbound::http as stats_http;
use crate::modules::events::use_cases::errors::error_response;
use crate::modules::events::use_cases::export_roster::inbound::http as export_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::register_student::inbound::http as register_http;
use crate::modules::events::use_cases::remove_event::inbound::http as remove_http;
use crate::modules::events::use_cases::view_participants::inbound::http as participants_http;
use crate::shell::graphql::{ADMIN_REQUIRED, GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

/// Admin routes stay closed until the session flag is set, like the admin panel they back.
async fn require_admin_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.is_admin().await {
        return error_response(StatusCode::UNAUTHORIZED, ADMIN_REQUIRED);
    }
    next.run(request).await
}

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route(
            "/admin/events",
            get(list_http::admin).post(add_http::handle),
        )
        .route("/admin/events/{event_id}", delete(remove_http::handle))
        .route(
            "/admin/events/{event_id}/participants",
            get(participants_http::handle),
        )
        .route("/admin/events/{event_id}/roster", get(export_http::handle))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_session,
        ));

    Router::new()
        .route("/events", get(list_http::public))
        .route(
            "/events/{event_id}/registrations",
            post(register_http::handle),
        )
        .route("/stats", get(stats_http::handle))
        .route("/session", get(login_http::current))
        .route("/admin/login", post(login_http::login))
        .merge(admin)
        .with_state(state)
}

/// REST routes, the GraphQL endpoint and the shared layers.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
