use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Result as GqlResult, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::events::use_cases::add_event::inbound::graphql::AddEventMutation;
use crate::modules::events::use_cases::admin_login::inbound::graphql::AdminLoginMutation;
use crate::modules::events::use_cases::dashboard_stats::inbound::graphql::StatsQuery;
use crate::modules::events::use_cases::list_events::inbound::graphql::EventsQuery;
use crate::modules::events::use_cases::register_student::inbound::graphql::RegisterStudentMutation;
use crate::modules::events::use_cases::remove_event::inbound::graphql::RemoveEventMutation;
use crate::modules::events::use_cases::view_participants::inbound::graphql::ParticipantsQuery;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";
pub const ADMIN_REQUIRED: &str = "admin login required";

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventsQuery, StatsQuery, ParticipantsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddEventMutation,
    RemoveEventMutation,
    RegisterStudentMutation,
    AdminLoginMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn require_admin(state: &AppState) -> GqlResult<()> {
    if state.is_admin().await {
        Ok(())
    } else {
        Err(async_graphql::Error::new(ADMIN_REQUIRED))
    }
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
