use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::queries::registrations_for;
use crate::shared::infrastructure::key_value_store::StorageError;
use serde::Serialize;
use std::sync::Arc;

pub const NO_PARTICIPANTS_NOTICE: &str = "No participants yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participants {
    pub event_id: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

pub struct ViewParticipantsHandler {
    store: Arc<RecordStore>,
}

impl ViewParticipantsHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, event_id: &str) -> Result<Participants, StorageError> {
        let registrations = self.store.load_registrations().await?;
        let lines: Vec<String> = registrations_for(&registrations, event_id)
            .into_iter()
            .map(|r| r.participant_line())
            .collect();
        let notice = lines.is_empty().then_some(NO_PARTICIPANTS_NOTICE);
        Ok(Participants {
            event_id: event_id.to_string(),
            lines,
            notice,
        })
    }
}
