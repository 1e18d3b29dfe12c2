// --- File: crates/noor_store/src/auth.rs ---
use crate::error::StoreResult;
use crate::storage::KeyValueStorage;
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Account profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Session state. `is_authenticated` and `is_guest` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    #[serde(skip)]
    pub is_loading: bool,
    pub is_guest: bool,
}

pub struct AuthStore {
    store: Store<AuthState>,
}

impl AuthStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            store: Store::persisted("auth", AuthState::default(), storage, AUTH_STORAGE_KEY),
        }
    }

    pub fn store(&self) -> &Store<AuthState> {
        &self.store
    }

    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    pub fn token(&self) -> Option<String> {
        self.store.with(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.is_authenticated)
    }

    pub fn is_guest(&self) -> bool {
        self.store.with(|s| s.is_guest)
    }

    pub async fn login(
        &self,
        user: User,
        token: String,
        refresh_token: Option<String>,
    ) -> StoreResult<()> {
        info!(user_id = %user.id, "Logged in");
        self.store.replace(AuthState {
            user: Some(user),
            token: Some(token),
            refresh_token,
            is_authenticated: true,
            is_loading: false,
            is_guest: false,
        });
        self.store.persist().await
    }

    /// Back to the initial, signed-out state.
    pub async fn logout(&self) -> StoreResult<()> {
        info!("Logged out");
        self.store.replace(AuthState::default());
        self.store.persist().await
    }

    pub async fn continue_as_guest(&self) -> StoreResult<()> {
        self.store.replace(AuthState {
            is_guest: true,
            ..AuthState::default()
        });
        self.store.persist().await
    }

    /// Loading is transient and never written to storage.
    pub fn set_loading(&self, is_loading: bool) {
        self.store.mutate(|s| {
            let changed = s.is_loading != is_loading;
            s.is_loading = is_loading;
            changed
        });
    }

    pub async fn update_user(&self, user: User) -> StoreResult<()> {
        self.store.mutate(|s| {
            s.user = Some(user);
            true
        });
        self.store.persist().await
    }

    pub async fn set_tokens(
        &self,
        token: String,
        refresh_token: Option<String>,
    ) -> StoreResult<()> {
        self.store.mutate(|s| {
            s.token = Some(token);
            s.refresh_token = refresh_token;
            true
        });
        self.store.persist().await
    }
}
