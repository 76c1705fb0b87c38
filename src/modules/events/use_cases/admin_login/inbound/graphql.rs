use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::use_cases::list_events::inbound::graphql::GqlSession;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AdminLoginMutation;

#[Object]
impl AdminLoginMutation {
    async fn login_admin(
        &self,
        context: &Context<'_>,
        username: String,
        password: String,
    ) -> GqlResult<GqlSession> {
        let state = context.data_unchecked::<AppState>();
        let session = state
            .admin_login
            .handle(&username, &password)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlSession {
            admin_logged_in: session.admin_logged_in,
        })
    }
}
