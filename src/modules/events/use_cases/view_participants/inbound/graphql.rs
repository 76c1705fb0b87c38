use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::require_admin;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlParticipants {
    pub event_id: String,
    pub lines: Vec<String>,
    pub notice: Option<String>,
}

#[derive(Default)]
pub struct ParticipantsQuery;

#[Object]
impl ParticipantsQuery {
    async fn participants(
        &self,
        context: &Context<'_>,
        event_id: String,
    ) -> GqlResult<GqlParticipants> {
        let state = context.data_unchecked::<AppState>();
        require_admin(state).await?;
        let participants = state.view_participants.handle(&event_id).await?;
        Ok(GqlParticipants {
            event_id: participants.event_id,
            lines: participants.lines,
            notice: participants.notice.map(str::to_string),
        })
    }
}
