// --- File: crates/noor_store/src/reading.rs ---
use crate::error::StoreResult;
use crate::storage::KeyValueStorage;
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const READING_STORAGE_KEY: &str = "quran-reading-storage";

/// Where the reader stopped last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPosition {
    pub surah_number: u16,
    pub verse_number: u16,
    pub surah_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingState {
    pub last_read: Option<ReadingPosition>,
}

pub struct ReadingStore {
    store: Store<ReadingState>,
}

impl ReadingStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            store: Store::persisted(
                "reading",
                ReadingState::default(),
                storage,
                READING_STORAGE_KEY,
            ),
        }
    }

    pub fn store(&self) -> &Store<ReadingState> {
        &self.store
    }

    /// Overwrites the single stored position.
    pub async fn set_last_read(
        &self,
        surah_number: u16,
        verse_number: u16,
        surah_name: impl Into<String>,
    ) -> StoreResult<()> {
        let position = ReadingPosition {
            surah_number,
            verse_number,
            surah_name: surah_name.into(),
            timestamp: Utc::now(),
        };
        debug!(surah_number, verse_number, "Updated reading position");
        self.store.replace(ReadingState {
            last_read: Some(position),
        });
        self.store.persist().await
    }

    pub fn last_read(&self) -> Option<ReadingPosition> {
        self.store.with(|s| s.last_read.clone())
    }

    pub async fn clear_last_read(&self) -> StoreResult<()> {
        self.store.replace(ReadingState::default());
        self.store.persist().await
    }
}
