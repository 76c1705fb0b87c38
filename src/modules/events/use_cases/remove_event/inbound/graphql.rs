use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::require_admin;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveEventMutation;

#[Object]
impl RemoveEventMutation {
    /// True when an event was removed.
    async fn remove_event(&self, context: &Context<'_>, event_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        require_admin(state).await?;
        state
            .remove_event
            .handle(&event_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
