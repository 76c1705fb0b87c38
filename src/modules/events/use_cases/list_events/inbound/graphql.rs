use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub name: String,
    pub category: String,
    pub date: String,
    pub venue: String,
    pub time: String,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            category: e.category,
            date: e.date,
            venue: e.venue,
            time: e.time,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone, Copy)]
pub struct GqlSession {
    pub admin_logged_in: bool,
}

#[derive(Default)]
pub struct EventsQuery;

#[Object]
impl EventsQuery {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.list_events.handle().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn session(&self, context: &Context<'_>) -> GqlSession {
        let state = context.data_unchecked::<AppState>();
        GqlSession {
            admin_logged_in: state.is_admin().await,
        }
    }
}
