//! # Local Storage Module
//!
//! This module provides the device key-value store the rest of the app
//! persists into. It is a thin accessor: `get`, `set` and `remove` on string
//! keys, backed by a single SQLite table.
//!
//! ## Records
//!
//! Two logical records live on top of it:
//! - [`USER_DATA_KEY`]: the JSON-serialized [`UserProfile`](crate::shared::UserProfile)
//! - [`AUTH_TOKEN_KEY`]: the session token
//!
//! There is no locking and no merge: concurrent writes to the same key resolve
//! to whichever lands last.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cosmos_explorer::egui_app::local_db::LocalStore;
//!
//! # async fn example() -> Result<(), cosmos_explorer::shared::StorageError> {
//! let store = LocalStore::open_default().await?;
//! store.set("authToken", "local-session-token").await?;
//! assert_eq!(store.get("authToken").await?.as_deref(), Some("local-session-token"));
//! store.remove("authToken").await?;
//! # Ok(())
//! # }
//! ```

pub mod schema;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::shared::config::APP_DIR_NAME;
use crate::shared::error::StorageError;

/// Key of the serialized user profile
pub const USER_DATA_KEY: &str = "userData";

/// Key of the session token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Result type for local storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Device key-value store
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    /// Open the store in the platform data directory
    pub async fn open_default() -> Result<Self> {
        Self::open(&Self::default_path(None)).await
    }

    /// Open or create the store at `path`
    ///
    /// Creates the parent directory if needed. Uses WAL mode.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        info!(path = %path.display(), "Local store opened");
        Ok(store)
    }

    /// Open a private in-memory store
    ///
    /// The pool is pinned to one connection that never expires, since every
    /// SQLite in-memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Location of the store file: `data_dir/storage.db`, or the platform
    /// data directory when no override is given
    pub fn default_path(data_dir: Option<&Path>) -> PathBuf {
        let mut path = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let mut base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
                base.push(APP_DIR_NAME);
                base
            }
        };
        path.push("storage.db");
        path
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(schema::CREATE_KV_STORE)
            .execute(&self.pool)
            .await?;
        sqlx::query(schema::CREATE_SCHEMA_MIGRATIONS)
            .execute(&self.pool)
            .await?;

        let current_version: (i32,) = sqlx::query_as(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        )
        .fetch_one(&self.pool)
        .await?;

        if schema::needs_migration(current_version.0) {
            sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?, ?)")
                .bind(schema::CURRENT_SCHEMA_VERSION)
                .bind(chrono::Utc::now().to_rfc3339())
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    /// Read the value stored under `key`
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        debug!(key, "Stored value");
        Ok(())
    }

    /// Delete `key`; deleting a missing key is not an error
    pub async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        debug!(key, "Removed value");
        Ok(())
    }

    /// Read and decode a JSON record
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::corrupt(key, e.to_string())),
            None => Ok(None),
        }
    }

    /// Encode and store a JSON record
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::corrupt(key, e.to_string()))?;
        self.set(key, &raw).await
    }

    /// Close the pool; outstanding clones stop working
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
