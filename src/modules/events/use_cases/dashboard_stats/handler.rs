use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::queries::Dashboard;
use crate::shared::infrastructure::key_value_store::StorageError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct DashboardStatsHandler {
    store: Arc<RecordStore>,
}

impl DashboardStatsHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, now: DateTime<Utc>) -> Result<Dashboard, StorageError> {
        let events = self.store.load_events().await?;
        let registrations = self.store.load_registrations().await?;
        Ok(Dashboard::compute(&events, &registrations, now))
    }
}
