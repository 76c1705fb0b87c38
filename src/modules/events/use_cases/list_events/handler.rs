use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::key_value_store::StorageError;
use std::sync::Arc;

pub struct ListEventsHandler {
    store: Arc<RecordStore>,
}

impl ListEventsHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Event>, StorageError> {
        self.store.load_events().await
    }
}
