//! Persisted session store
//!
//! Wraps a [`KeyValueStore`] with JSON helpers that never fail outward.
//! Backend and serialization errors are logged and the caller gets its
//! default back, so a corrupted entry degrades to "signed out" rather than
//! breaking the app.
//!
//! # Example
//!
//! ```rust
//! use resumecheck_storage::SessionStore;
//!
//! # async fn example() {
//! let store = SessionStore::in_memory();
//!
//! store.set("theme", &"dark").await;
//! let theme: String = store.get_or("theme", String::from("light")).await;
//! assert_eq!(theme, "dark");
//!
//! assert!(!store.is_authenticated().await);
//! # }
//! ```

use std::sync::Arc;

use resumecheck_core::{SessionContext, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::error::Result;
use crate::kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};

/// Key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-encoded user record
pub const USER_KEY: &str = "user";

/// Session store shared by the API client, guards and pages.
///
/// Cloning is cheap; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by a process-local map
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    /// Open (creating if needed) an `SQLite` database and apply migrations
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(Arc::new(SqliteKeyValueStore::new(pool))))
    }

    // =========================================================================
    // Generic JSON accessors
    // =========================================================================

    /// Decode the JSON stored under `key`.
    ///
    /// Absent keys, the literal `undefined`, unparseable JSON and backend
    /// failures all yield `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!(key = %key, error = %e, "Error reading from session store");
                return None;
            }
        };

        if raw == "undefined" {
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(key = %key, error = %e, "Error reading from session store");
                None
            }
        }
    }

    /// Like [`get`](Self::get), falling back to `default`
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).await.unwrap_or(default)
    }

    /// JSON-encode `value` under `key`; failures are logged and dropped
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(s) => s,
            Err(e) => {
                error!(key = %key, error = %e, "Error setting value in session store");
                return;
            }
        };

        if let Err(e) = self.backend.set_item(key, &serialized).await {
            error!(key = %key, error = %e, "Error setting value in session store");
        }
    }

    pub async fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key).await {
            error!(key = %key, error = %e, "Error removing value from session store");
        }
    }

    pub async fn clear(&self) {
        if let Err(e) = self.backend.clear().await {
            error!(error = %e, "Error clearing session store");
        }
    }

    // =========================================================================
    // Auth helpers
    // =========================================================================

    /// Raw token string (stored without JSON encoding)
    pub async fn get_auth_token(&self) -> Option<String> {
        match self.backend.get_item(TOKEN_KEY).await {
            Ok(token) => token,
            Err(e) => {
                error!(error = %e, "Error reading token from session store");
                None
            }
        }
    }

    pub async fn get_current_user(&self) -> Option<User> {
        self.get(USER_KEY).await
    }

    /// Persist a freshly issued session
    pub async fn set_auth_data(&self, token: &str, user: &User) {
        if let Err(e) = self.backend.set_item(TOKEN_KEY, token).await {
            error!(error = %e, "Error storing token in session store");
        }
        self.set(USER_KEY, user).await;

        info!(user_id = %user.id, role = %user.role, "Session stored");
    }

    /// Drop both session keys; other keys are left alone
    pub async fn clear_auth_data(&self) {
        self.remove(TOKEN_KEY).await;
        self.remove(USER_KEY).await;

        info!("Session cleared");
    }

    /// A non-empty token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.get_auth_token().await.is_some_and(|t| !t.is_empty())
    }

    pub async fn is_admin(&self) -> bool {
        self.get_current_user()
            .await
            .is_some_and(|user| user.is_admin())
    }

    /// Current contents as a plain value for guards and views
    pub async fn snapshot(&self) -> SessionContext {
        SessionContext {
            token: self.get_auth_token().await,
            user: self.get_current_user().await,
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
