use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::queries::{find_event, registrations_for};
use crate::modules::events::core::roster::RosterDocument;
use crate::modules::events::use_cases::export_roster::renderer_port::{
    RenderedRoster, RosterRenderer,
};
use crate::shared::infrastructure::key_value_store::StorageError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no participants to download for event {0}")]
    NoParticipants(String),

    #[error("event {0} no longer exists")]
    UnknownEvent(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct ExportRosterHandler {
    store: Arc<RecordStore>,
    renderer: Arc<dyn RosterRenderer>,
}

impl ExportRosterHandler {
    pub fn new(store: Arc<RecordStore>, renderer: Arc<dyn RosterRenderer>) -> Self {
        Self { store, renderer }
    }

    pub async fn handle(&self, event_id: &str) -> Result<RenderedRoster, ExportError> {
        let registrations = self.store.load_registrations().await?;
        let participants = registrations_for(&registrations, event_id);
        if participants.is_empty() {
            return Err(ExportError::NoParticipants(event_id.to_string()));
        }
        let events = self.store.load_events().await?;
        let event = find_event(&events, event_id)
            .ok_or_else(|| ExportError::UnknownEvent(event_id.to_string()))?;

        let document = RosterDocument::layout(event, &participants);
        let bytes = self.renderer.render(&document);
        info!(
            event_id,
            participants = participants.len(),
            pages = document.pages.len(),
            "roster exported"
        );
        Ok(RenderedRoster {
            file_name: format!("{}.{}", document.file_stem, self.renderer.extension()),
            content_type: self.renderer.content_type(),
            bytes,
        })
    }
}
