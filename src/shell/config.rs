// Runtime configuration, read from the environment once at startup.
//
// - EVENT_DESK_ADDR      listen address, default 0.0.0.0:8080
// - EVENT_DESK_DATA_DIR  directory for the file store, default ./data
// - EVENT_DESK_STORE     `file` or `memory`, default file

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "EVENT_DESK_ADDR";
pub const DATA_DIR_VAR: &str = "EVENT_DESK_DATA_DIR";
pub const STORE_VAR: &str = "EVENT_DESK_STORE";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("EVENT_DESK_ADDR={value:?} is not a socket address: {source}")]
    InvalidAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("EVENT_DESK_STORE={0:?} must be `file` or `memory`")]
    UnknownStore(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub store: StoreKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let store = match lookup(STORE_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreKind::File,
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self {
            addr,
            data_dir,
            store,
        })
    }
}
