//! ResumeCheck Storage
//!
//! Persisted session storage for the ResumeCheck client.
//!
//! The session is two entries in a key-value store: the raw bearer token
//! under `token` and the JSON-encoded user under `user`. The store is read
//! before every API request and written only by login, register, logout and
//! the expired-session path.
//!
//! # Example
//!
//! ```rust,no_run
//! use resumecheck_storage::SessionStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionStore::open("sqlite://resumecheck.db").await?;
//!
//! let session = store.snapshot().await;
//! println!("signed in: {}", session.is_signed_in());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod kv;
pub mod session;

pub use error::{Result, StorageError};
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use session::{SessionStore, TOKEN_KEY, USER_KEY};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://resumecheck.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating session database pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
