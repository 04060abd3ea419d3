//! Session store tests against the SQLite and in-memory backends.

use async_trait::async_trait;
use resumecheck_core::{Role, User, UserId};
use resumecheck_storage::{
    KeyValueStore, MemoryKeyValueStore, Result, SessionStore, StorageError, TOKEN_KEY, USER_KEY,
};
use std::sync::Arc;

fn test_user(role: Role) -> User {
    User {
        id: UserId::new("u1"),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        role,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

async fn sqlite_store(dir: &tempfile::TempDir) -> SessionStore {
    let url = format!("sqlite://{}", dir.path().join("session.db").display());
    SessionStore::open(&url).await.unwrap()
}

/// Backend whose every operation fails
struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }

    async fn remove_item(&self, _key: &str) -> Result<()> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }

    async fn clear(&self) -> Result<()> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }
}

// =============================================================================
// Generic accessors
// =============================================================================

mod accessors {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get_round_trip() {
        let store = SessionStore::in_memory();

        store.set("prefs", &serde_json::json!({"compact": true})).await;
        let value: Option<serde_json::Value> = store.get("prefs").await;

        assert_eq!(value, Some(serde_json::json!({"compact": true})));
    }

    #[tokio::test]
    async fn test_missing_key_returns_default() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get_or("missing", 7u32).await, 7);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_default() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        backend.set_item("user", "{not json").await.unwrap();
        backend.set_item("count", "undefined").await.unwrap();

        let store = SessionStore::new(backend);
        assert_eq!(store.get_or("user", String::from("fallback")).await, "fallback");
        assert_eq!(store.get_or("count", 3i32).await, 3);
    }

    #[tokio::test]
    async fn test_wrong_shape_returns_default() {
        let store = SessionStore::in_memory();
        store.set("count", &"not a number").await;

        assert_eq!(store.get_or("count", 0u32).await, 0);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = SessionStore::in_memory();
        store.set("a", &1).await;
        store.set("b", &2).await;

        store.remove("a").await;
        assert_eq!(store.get::<i32>("a").await, None);
        assert_eq!(store.get::<i32>("b").await, Some(2));

        store.clear().await;
        assert_eq!(store.get::<i32>("b").await, None);
    }

    #[tokio::test]
    async fn test_backend_failures_never_escape() {
        let store = SessionStore::new(Arc::new(BrokenStore));

        store.set("a", &1).await;
        store.remove("a").await;
        store.clear().await;
        store.set_auth_data("tok", &test_user(Role::User)).await;
        store.clear_auth_data().await;

        assert_eq!(store.get_or("a", 5).await, 5);
        assert_eq!(store.get_auth_token().await, None);
        assert!(!store.is_authenticated().await);
        assert!(!store.is_admin().await);
        assert!(!store.snapshot().await.is_signed_in());
    }
}

// =============================================================================
// Auth helpers
// =============================================================================

mod auth_helpers {
    use super::*;

    #[tokio::test]
    async fn test_token_is_stored_raw() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let store = SessionStore::new(backend.clone());

        store.set_auth_data("abc.def", &test_user(Role::User)).await;

        assert_eq!(
            backend.get_item(TOKEN_KEY).await.unwrap().as_deref(),
            Some("abc.def")
        );
        let user_json = backend.get_item(USER_KEY).await.unwrap().unwrap();
        assert!(user_json.starts_with('{'));
        assert_eq!(store.get_auth_token().await.as_deref(), Some("abc.def"));
    }

    #[tokio::test]
    async fn test_admin_detection() {
        let store = SessionStore::in_memory();
        store.set_auth_data("t", &test_user(Role::Admin)).await;

        assert!(store.is_authenticated().await);
        assert!(store.is_admin().await);
        assert!(store.snapshot().await.is_admin());
    }

    #[tokio::test]
    async fn test_corrupted_user_is_not_admin() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        backend.set_item(TOKEN_KEY, "t").await.unwrap();
        backend.set_item(USER_KEY, "<html>").await.unwrap();
        let store = SessionStore::new(backend);

        assert!(store.is_authenticated().await);
        assert!(!store.is_admin().await);

        let snapshot = store.snapshot().await;
        assert!(snapshot.has_token());
        assert!(snapshot.user.is_none());
        assert!(!snapshot.is_signed_in());
    }

    #[tokio::test]
    async fn test_empty_token_is_not_authenticated() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        backend.set_item(TOKEN_KEY, "").await.unwrap();
        let store = SessionStore::new(backend);

        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_clear_auth_data_keeps_other_keys() {
        let store = SessionStore::in_memory();
        store.set_auth_data("t", &test_user(Role::User)).await;
        store.set("prefs", &"kept").await;

        store.clear_auth_data().await;

        assert_eq!(store.get_auth_token().await, None);
        assert_eq!(store.get_current_user().await, None);
        assert_eq!(store.get::<String>("prefs").await.as_deref(), Some("kept"));
    }
}

// =============================================================================
// SQLite backend
// =============================================================================

mod sqlite_backend {
    use super::*;

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = sqlite_store(&dir).await;
            store.set_auth_data("persisted", &test_user(Role::Admin)).await;
        }

        let store = sqlite_store(&dir).await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.token.as_deref(), Some("persisted"));
        assert_eq!(snapshot.user, Some(test_user(Role::Admin)));
    }

    #[tokio::test]
    async fn test_overwrite_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = sqlite_store(&dir).await;

        store.set("k", &1).await;
        store.set("k", &2).await;
        assert_eq!(store.get::<i32>("k").await, Some(2));

        store.clear().await;
        assert_eq!(store.get::<i32>("k").await, None);
    }
}
