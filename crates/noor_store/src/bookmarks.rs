// --- File: crates/noor_store/src/bookmarks.rs ---
use crate::error::StoreResult;
use crate::storage::KeyValueStorage;
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Used only when bookmark persistence is switched on.
pub const BOOKMARK_STORAGE_KEY: &str = "bookmark-storage";

fn first_verse() -> u16 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub surah_number: u16,
    #[serde(default = "first_verse")]
    pub verse_number: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkState {
    pub bookmarks: Vec<Bookmark>,
}

/// At most one bookmark per surah; the first one added wins.
pub struct BookmarkStore {
    store: Store<BookmarkState>,
}

impl BookmarkStore {
    pub fn in_memory() -> Self {
        Self {
            store: Store::in_memory("bookmarks", BookmarkState::default()),
        }
    }

    pub fn persisted(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            store: Store::persisted(
                "bookmarks",
                BookmarkState::default(),
                storage,
                BOOKMARK_STORAGE_KEY,
            ),
        }
    }

    pub fn store(&self) -> &Store<BookmarkState> {
        &self.store
    }

    /// Adds a bookmark unless the surah already has one. `verse_number`
    /// defaults to 1. Returns whether anything was added.
    pub async fn add_bookmark(
        &self,
        surah_number: u16,
        verse_number: Option<u16>,
    ) -> StoreResult<bool> {
        let added = self.store.mutate(|s| {
            if s.bookmarks.iter().any(|b| b.surah_number == surah_number) {
                return false;
            }
            s.bookmarks.push(Bookmark {
                surah_number,
                verse_number: verse_number.unwrap_or_else(first_verse),
            });
            true
        });
        if added {
            debug!(surah_number, "Bookmark added");
            self.store.persist().await?;
        }
        Ok(added)
    }

    /// Returns whether a bookmark was removed.
    pub async fn remove_bookmark(&self, surah_number: u16) -> StoreResult<bool> {
        let removed = self.store.mutate(|s| {
            let before = s.bookmarks.len();
            s.bookmarks.retain(|b| b.surah_number != surah_number);
            s.bookmarks.len() != before
        });
        if removed {
            self.store.persist().await?;
        }
        Ok(removed)
    }

    pub fn is_bookmarked(&self, surah_number: u16) -> bool {
        self.store
            .with(|s| s.bookmarks.iter().any(|b| b.surah_number == surah_number))
    }

    /// In insertion order.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.store.with(|s| s.bookmarks.clone())
    }
}
