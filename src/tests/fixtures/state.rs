use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::adapters::outbound::text_renderer::TextRosterRenderer;
use crate::modules::events::core::session::Session;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct StoreFixture {
    pub kv: Arc<InMemoryKeyValueStore>,
    pub store: Arc<RecordStore>,
}

pub fn make_store() -> StoreFixture {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let store = Arc::new(RecordStore::new(kv.clone()));
    StoreFixture { kv, store }
}

pub fn make_offline_store() -> Arc<RecordStore> {
    let mut kv = InMemoryKeyValueStore::new();
    kv.toggle_offline();
    Arc::new(RecordStore::new(Arc::new(kv)))
}

pub fn make_test_state(session: Session) -> (StoreFixture, AppState) {
    let fixture = make_store();
    let state = AppState::new(
        fixture.store.clone(),
        Arc::new(TextRosterRenderer),
        session,
    );
    (fixture, state)
}

pub fn make_admin_state() -> (StoreFixture, AppState) {
    make_test_state(Session {
        admin_logged_in: true,
    })
}

pub fn make_offline_state() -> AppState {
    AppState::new(
        make_offline_store(),
        Arc::new(TextRosterRenderer),
        Session {
            admin_logged_in: true,
        },
    )
}
