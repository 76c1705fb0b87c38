use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone, Copy)]
pub struct GqlDashboard {
    pub total_events: u64,
    pub total_registrations: u64,
    pub upcoming_events: u64,
}

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    async fn stats(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let dashboard = state.dashboard_stats.handle(Utc::now()).await?;
        Ok(GqlDashboard {
            total_events: dashboard.total_events as u64,
            total_registrations: dashboard.total_registrations as u64,
            upcoming_events: dashboard.upcoming_events as u64,
        })
    }
}
