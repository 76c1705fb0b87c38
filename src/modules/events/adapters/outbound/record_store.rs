// Record store over the key/value port.
//
// Purpose
// - Own the storage key names and the JSON encoding of both collections.
//
// Responsibilities
// - Events: absent or undecodable values fall back to the seed set, which is written back.
// - Registrations: absent or undecodable values fall back to an empty list, nothing is written.
// - Decode failures never reach the caller; they go to the diagnostics hook instead.
// - Backend failures are returned as StorageError.
// - Mutating handlers take `lock()` around their read-modify-write and load through
//   `load_events_locked`; seed write-back happens under the same lock.

use crate::modules::events::adapters::outbound::diagnostics::{
    RecoveryNotice, StoreDiagnostics, TracingDiagnostics,
};
use crate::modules::events::core::event::{Event, seed_events};
use crate::modules::events::core::registration::Registration;
use crate::modules::events::core::session::{LOGGED_IN_FLAG, Session};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub const EVENTS_KEY: &str = "events";
pub const REGISTRATIONS_KEY: &str = "registrations";
pub const SESSION_KEY: &str = "adminLoggedIn";

pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
    diagnostics: Arc<dyn StoreDiagnostics>,
    write_lock: Mutex<()>,
}

enum Decoded<T> {
    Missing,
    Corrupt(String),
    Value(T),
}

impl RecordStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_diagnostics(kv, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(
        kv: Arc<dyn KeyValueStore>,
        diagnostics: Arc<dyn StoreDiagnostics>,
    ) -> Self {
        Self {
            kv,
            diagnostics,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read path for callers that do not hold `lock()`. A reseed is only ever written under the
    /// lock, after re-reading, so a concurrent locked mutation is never overwritten.
    pub async fn load_events(&self) -> Result<Vec<Event>, StorageError> {
        if let Decoded::Value(events) = self.read_collection::<Event>(EVENTS_KEY).await? {
            return Ok(events);
        }
        let guard = self.lock().await;
        self.load_events_locked(&guard).await
    }

    /// Same as `load_events` for callers already holding the guard from `lock()`.
    pub async fn load_events_locked(
        &self,
        _guard: &MutexGuard<'_, ()>,
    ) -> Result<Vec<Event>, StorageError> {
        match self.read_collection::<Event>(EVENTS_KEY).await? {
            Decoded::Value(events) => Ok(events),
            Decoded::Missing => self.reseed().await,
            Decoded::Corrupt(reason) => {
                self.diagnostics.storage_recovered(&RecoveryNotice {
                    key: EVENTS_KEY,
                    reason,
                    reseeded: true,
                });
                self.reseed().await
            }
        }
    }

    pub async fn save_events(&self, events: &[Event]) -> Result<(), StorageError> {
        self.write_collection(EVENTS_KEY, events).await
    }

    pub async fn load_registrations(&self) -> Result<Vec<Registration>, StorageError> {
        match self.read_collection::<Registration>(REGISTRATIONS_KEY).await? {
            Decoded::Value(registrations) => Ok(registrations),
            Decoded::Missing => Ok(Vec::new()),
            Decoded::Corrupt(reason) => {
                self.diagnostics.storage_recovered(&RecoveryNotice {
                    key: REGISTRATIONS_KEY,
                    reason,
                    reseeded: false,
                });
                Ok(Vec::new())
            }
        }
    }

    pub async fn save_registrations(
        &self,
        registrations: &[Registration],
    ) -> Result<(), StorageError> {
        self.write_collection(REGISTRATIONS_KEY, registrations).await
    }

    pub async fn load_session(&self) -> Result<Session, StorageError> {
        let flag = self.kv.get(SESSION_KEY).await?;
        Ok(Session::from_flag(flag.as_deref()))
    }

    pub async fn mark_admin_logged_in(&self) -> Result<(), StorageError> {
        self.kv.set(SESSION_KEY, LOGGED_IN_FLAG).await
    }

    async fn reseed(&self) -> Result<Vec<Event>, StorageError> {
        let seed = seed_events();
        self.save_events(&seed).await?;
        Ok(seed)
    }

    async fn read_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Decoded<Vec<T>>, StorageError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Decoded::Missing);
        };
        if raw.is_empty() {
            return Ok(Decoded::Missing);
        }
        Ok(match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Decoded::Value(items),
            Err(e) => Decoded::Corrupt(e.to_string()),
        })
    }

    async fn write_collection<T: Serialize>(
        &self,
        key: &'static str,
        items: &[T],
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| StorageError::Backend(format!("encode {key}: {e}")))?;
        self.kv.set(key, &raw).await
    }
}
