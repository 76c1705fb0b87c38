// Removes one event by id. Registrations that point at it are left in place.

use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{debug, info};

pub struct RemoveEventHandler {
    store: Arc<RecordStore>,
}

impl RemoveEventHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Returns whether an event was removed. Nothing is written when the id is unknown.
    pub async fn handle(&self, event_id: &str) -> Result<bool, ApplicationError> {
        let guard = self.store.lock().await;
        let mut events = self.store.load_events_locked(&guard).await?;
        let before = events.len();
        events.retain(|e| e.id != event_id);
        if events.len() == before {
            debug!(event_id, "remove requested for unknown event");
            return Ok(false);
        }
        self.store.save_events(&events).await?;
        info!(event_id, "event removed");
        Ok(true)
    }
}
