#[cfg(test)]
mod tests {
    use crate::auth::{AuthState, AuthStore, User, AUTH_STORAGE_KEY};
    use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
    use crate::test_support::{temp_dir, FailingStorage};
    use std::sync::Arc;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            email: "amina@example.com".to_string(),
            name: Some("Amina".to_string()),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_login_then_logout_restores_initial_state() {
        let auth = AuthStore::new(Arc::new(MemoryStorage::new()));
        let initial = auth.state();

        auth.login(user(), "tok".to_string(), Some("ref".to_string()))
            .await
            .unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some("tok"));

        auth.logout().await.unwrap();
        assert_eq!(auth.state(), initial);
        assert!(!auth.is_guest());
    }

    #[tokio::test]
    async fn test_guest_and_authenticated_are_exclusive() {
        let auth = AuthStore::new(Arc::new(MemoryStorage::new()));

        auth.continue_as_guest().await.unwrap();
        assert!(auth.is_guest());
        assert!(!auth.is_authenticated());

        auth.login(user(), "tok".to_string(), None).await.unwrap();
        assert!(!auth.is_guest());
        assert!(auth.is_authenticated());

        auth.continue_as_guest().await.unwrap();
        assert!(auth.is_guest());
        assert!(!auth.is_authenticated());
        assert_eq!(auth.token(), None);
        assert_eq!(auth.user(), None);
    }

    #[tokio::test]
    async fn test_session_survives_restart_without_loading_flag() {
        let dir = temp_dir();

        let auth = AuthStore::new(Arc::new(FileStorage::new(&dir)));
        auth.login(user(), "tok".to_string(), Some("ref".to_string()))
            .await
            .unwrap();
        auth.set_loading(true);
        auth.set_tokens("tok-2".to_string(), Some("ref-2".to_string()))
            .await
            .unwrap();

        let restarted = AuthStore::new(Arc::new(FileStorage::new(&dir)));
        restarted.store().hydrate().await.unwrap();

        let state = restarted.state();
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("tok-2"));
        assert_eq!(state.refresh_token.as_deref(), Some("ref-2"));
        assert!(state.is_authenticated);
        assert!(!state.is_loading);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_persisted_json_uses_camel_case() {
        let storage = Arc::new(MemoryStorage::new());
        let auth = AuthStore::new(storage.clone());
        auth.login(user(), "tok".to_string(), None).await.unwrap();

        let raw = storage.get_item(AUTH_STORAGE_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["state"]["isAuthenticated"], true);
        assert_eq!(json["state"]["user"]["email"], "amina@example.com");
        assert!(json["state"].get("isLoading").is_none());
    }

    #[tokio::test]
    async fn test_update_user_keeps_tokens() {
        let auth = AuthStore::new(Arc::new(MemoryStorage::new()));
        auth.login(user(), "tok".to_string(), None).await.unwrap();

        let renamed = User {
            name: Some("Amina K.".to_string()),
            ..user()
        };
        auth.update_user(renamed.clone()).await.unwrap();

        assert_eq!(auth.user(), Some(renamed));
        assert_eq!(auth.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_failed_write_still_updates_session() {
        let auth = AuthStore::new(Arc::new(FailingStorage::default()));

        assert!(auth.login(user(), "tok".to_string(), None).await.is_err());
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_set_loading_is_transient() {
        let auth = AuthStore::new(Arc::new(MemoryStorage::new()));

        auth.set_loading(true);
        assert!(auth.state().is_loading);
        auth.set_loading(false);
        assert_eq!(auth.state(), AuthState::default());
    }
}
