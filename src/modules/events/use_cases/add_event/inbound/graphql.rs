use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::use_cases::add_event::command::AddEvent;
use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::graphql::require_admin;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddEventMutation;

#[Object]
impl AddEventMutation {
    #[allow(clippy::too_many_arguments)]
    async fn add_event(
        &self,
        context: &Context<'_>,
        id: String,
        name: String,
        category: String,
        date: String,
        venue: String,
        time: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        require_admin(state).await?;
        let command = AddEvent {
            id,
            name,
            category,
            date,
            venue,
            time,
        };
        let event = state
            .add_event
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(event.into())
    }
}
