use tracing::warn;

/// Emitted when a persisted collection could not be decoded and a default was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryNotice {
    pub key: &'static str,
    pub reason: String,
    pub reseeded: bool,
}

pub trait StoreDiagnostics: Send + Sync {
    fn storage_recovered(&self, notice: &RecoveryNotice);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl StoreDiagnostics for TracingDiagnostics {
    fn storage_recovered(&self, notice: &RecoveryNotice) {
        warn!(
            key = notice.key,
            reason = %notice.reason,
            reseeded = notice.reseeded,
            "persisted collection unreadable, using default"
        );
    }
}
