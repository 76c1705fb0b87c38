// Placeholder admin login.
//
// - Compares trimmed input against the hardcoded pair in core::session.
// - On success persists the session flag and flips the shared Session value.
// - There is no logout and no expiry.

use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::errors::DecideError;
use crate::modules::events::core::session::{Session, credentials_match};
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct AdminLoginHandler {
    store: Arc<RecordStore>,
    session: Arc<RwLock<Session>>,
}

impl AdminLoginHandler {
    pub fn new(store: Arc<RecordStore>, session: Arc<RwLock<Session>>) -> Self {
        Self { store, session }
    }

    pub async fn handle(&self, username: &str, password: &str) -> Result<Session, ApplicationError> {
        if !credentials_match(username.trim(), password.trim()) {
            warn!("admin login rejected");
            return Err(DecideError::InvalidCredentials.into());
        }
        self.store.mark_admin_logged_in().await?;
        let mut session = self.session.write().await;
        session.admin_logged_in = true;
        info!("admin logged in");
        Ok(*session)
    }
}

#[cfg(test)]
mod admin_login_handler_tests {
    use super::*;
    use crate::modules::events::adapters::outbound::record_store::SESSION_KEY;
    use crate::shared::infrastructure::key_value_store::KeyValueStore;
    use crate::tests::fixtures::state::{StoreFixture, make_store};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (StoreFixture, Arc<RwLock<Session>>, AdminLoginHandler) {
        let fixture = make_store();
        let session = Arc::new(RwLock::new(Session::default()));
        let handler = AdminLoginHandler::new(fixture.store.clone(), session.clone());
        (fixture, session, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_log_in_with_the_literal_pair(
        before_each: (StoreFixture, Arc<RwLock<Session>>, AdminLoginHandler),
    ) {
        let (fixture, session, handler) = before_each;
        let result = handler.handle(" admin ", "1234").await;
        assert_eq!(
            result,
            Ok(Session {
                admin_logged_in: true
            })
        );
        assert!(session.read().await.admin_logged_in);
        assert_eq!(
            fixture.kv.get(SESSION_KEY).await.unwrap(),
            Some("true".to_string())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_anything_else(
        before_each: (StoreFixture, Arc<RwLock<Session>>, AdminLoginHandler),
    ) {
        let (fixture, session, handler) = before_each;
        let result = handler.handle("admin", "admin").await;
        assert_eq!(
            result,
            Err(ApplicationError::Domain(DecideError::InvalidCredentials))
        );
        assert!(!session.read().await.admin_logged_in);
        assert_eq!(fixture.kv.get(SESSION_KEY).await.unwrap(), None);
    }
}
