//! Key-value backends
//!
//! The session is persisted in a flat string-to-string map, the same model
//! a browser's local storage offers. Two backends are provided: SQLite for
//! real runs and an in-memory map for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tokio::sync::RwLock;

use crate::error::Result;

/// String key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw stored value, `None` if the key is absent
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Remove every key
    async fn clear(&self) -> Result<()>;
}

/// `SQLite`-backed store using the `kv_store` table
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Wrap a pool that already has migrations applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM kv_store")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// In-process store; contents vanish with the value
#[derive(Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.items.write().await.clear();
        Ok(())
    }
}
