// --- File: crates/noor_store/src/error.rs ---
use noor_common::{storage_error, NoorError};
use thiserror::Error;

/// Errors raised while loading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for NoorError {
    fn from(err: StoreError) -> Self {
        storage_error(err)
    }
}
