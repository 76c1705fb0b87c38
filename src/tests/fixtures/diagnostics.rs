use crate::modules::events::adapters::outbound::diagnostics::{RecoveryNotice, StoreDiagnostics};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub notices: Mutex<Vec<RecoveryNotice>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RecoveryNotice> {
        self.notices.lock().unwrap().clone()
    }
}

impl StoreDiagnostics for RecordingDiagnostics {
    fn storage_recovered(&self, notice: &RecoveryNotice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
