// Key/value storage port.
//
// Purpose
// - Describe the durable slot the record store writes its collections into, one string per key.
//
// Responsibilities
// - Reads return None when a key was never written.
// - Writes replace the whole value for a key. There is no merge.
//
// Boundaries
// - Values are opaque strings here; decoding is the record store's job.

pub mod file;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
