//! Application state for Noor.
//!
//! Each store wraps a [`Store`] and exposes the operations of its domain.
//! Auth and reading position are persisted through a [`KeyValueStorage`];
//! bookmarks optionally so; chat, language and the prayer query live in
//! memory only.

pub mod adhkar;
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod bookmarks;
#[cfg(test)]
mod bookmarks_proptest;
pub mod chat;
pub mod error;
pub mod language;
pub mod prayer_query;
pub mod reading;
pub mod storage;
pub mod store;
#[cfg(test)]
mod test_support;

pub use adhkar::{AdhkarCatalog, AdhkarItem, AdhkarPeriod, AdhkarType};
pub use auth::{AuthState, AuthStore, User, AUTH_STORAGE_KEY};
pub use bookmarks::{Bookmark, BookmarkState, BookmarkStore, BOOKMARK_STORAGE_KEY};
pub use chat::{ChatState, ChatStore, Message, Role};
pub use error::{StoreError, StoreResult};
pub use language::LanguageStore;
pub use prayer_query::{PrayerQueryState, PrayerQueryStore};
pub use reading::{ReadingPosition, ReadingState, ReadingStore, READING_STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Store, STATE_VERSION};
