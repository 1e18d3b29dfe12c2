// Test doubles shared by the store tests.

use crate::error::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Storage whose writes always fail; reads find nothing.
#[derive(Default)]
pub struct FailingStorage {
    pub writes: AtomicUsize,
}

#[async_trait]
impl KeyValueStorage for FailingStorage {
    async fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn set_item(&self, _key: &str, _value: String) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("disk full".to_string()))
    }

    async fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }
}

/// A fresh directory path under the system temp dir. Not created.
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("noor-store-test-{}", Uuid::new_v4()))
}
