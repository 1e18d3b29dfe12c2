// --- File: crates/noor_store/src/store.rs ---
//! Generic observable state container.
//!
//! A [`Store`] owns one value of state inside a `tokio::sync::watch`
//! channel. Reads are synchronous snapshots, mutations are applied in call
//! order and published to every subscriber. A store built with
//! [`Store::persisted`] can additionally write its state to a
//! [`KeyValueStorage`] and load it back.
//!
//! Persisted values are wrapped in an envelope:
//!
//! ```json
//! {"state": { ... }, "version": 0}
//! ```

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Schema version written next to persisted state.
pub const STATE_VERSION: u32 = 0;

#[derive(Serialize, Deserialize)]
struct Envelope<S> {
    state: S,
    version: u32,
}

struct Persistence {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

pub struct Store<T> {
    name: &'static str,
    tx: watch::Sender<T>,
    persistence: Option<Persistence>,
    hydrated: AtomicBool,
}

impl<T> Store<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A store that lives only as long as the process. It counts as
    /// hydrated from the start.
    pub fn in_memory(name: &'static str, initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            name,
            tx,
            persistence: None,
            hydrated: AtomicBool::new(true),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn snapshot(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Reads the current state without cloning it. `f` must not block.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// A receiver that sees the current state and every later change.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Applies `f` to the state. `f` returns whether it changed anything;
    /// subscribers are only notified when it did.
    pub fn mutate(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Replaces the state and notifies subscribers.
    pub fn replace(&self, state: T) {
        self.tx.send_replace(state);
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    pub fn has_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::Acquire)
    }
}

impl<T> Store<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// A store written through to `storage` under `key`.
    ///
    /// Starts from `initial`; call [`Store::hydrate`] to load what was
    /// stored by a previous run.
    pub fn persisted(
        name: &'static str,
        initial: T,
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
    ) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            name,
            tx,
            persistence: Some(Persistence {
                storage,
                key: key.into(),
            }),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Writes the current state. A no-op for in-memory stores.
    ///
    /// # Errors
    ///
    /// Returns the storage or serialization error; the in-memory state is
    /// kept either way.
    pub async fn persist(&self) -> StoreResult<()> {
        let Some(persistence) = &self.persistence else {
            return Ok(());
        };
        // Serialize before awaiting; the watch borrow must not cross an await.
        let payload = {
            let state = self.tx.borrow();
            serde_json::to_string(&Envelope {
                state: &*state,
                version: STATE_VERSION,
            })?
        };
        persistence
            .storage
            .set_item(&persistence.key, payload)
            .await
            .inspect_err(|e| warn!(store = self.name, error = %e, "Failed to persist state"))
    }

    /// Loads the stored state, replacing the current one.
    ///
    /// Missing state and state written under another [`STATE_VERSION`] leave
    /// the current state untouched. The store is marked hydrated even when
    /// loading fails, since it then holds usable defaults.
    pub async fn hydrate(&self) -> StoreResult<()> {
        let result = self.load().await;
        self.hydrated.store(true, Ordering::Release);
        result
    }

    async fn load(&self) -> StoreResult<()> {
        let Some(persistence) = &self.persistence else {
            return Ok(());
        };
        let Some(raw) = persistence.storage.get_item(&persistence.key).await? else {
            debug!(store = self.name, "Nothing stored yet");
            return Ok(());
        };

        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&raw)?;
        if envelope.version != STATE_VERSION {
            warn!(
                store = self.name,
                found = envelope.version,
                expected = STATE_VERSION,
                "Ignoring stored state of another version"
            );
            return Ok(());
        }

        let state: T = serde_json::from_value(envelope.state)?;
        self.tx.send_replace(state);
        debug!(store = self.name, "Hydrated from storage");
        Ok(())
    }

    /// Deletes the stored state. The in-memory state is not changed.
    pub async fn purge(&self) -> StoreResult<()> {
        match &self.persistence {
            Some(persistence) => persistence.storage.remove_item(&persistence.key).await,
            None => Ok(()),
        }
    }
}
