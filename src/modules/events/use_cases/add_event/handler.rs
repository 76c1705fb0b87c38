use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::add_event::command::AddEvent;
use crate::modules::events::use_cases::add_event::decide::decide_add_event;
use crate::modules::events::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct AddEventHandler {
    store: Arc<RecordStore>,
}

impl AddEventHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddEvent) -> Result<Event, ApplicationError> {
        let guard = self.store.lock().await;
        let mut events = self.store.load_events_locked(&guard).await?;
        let event = decide_add_event(&events, command)?;
        events.push(event.clone());
        self.store.save_events(&events).await?;
        info!(event_id = %event.id, "event added");
        Ok(event)
    }
}
