//! Database Schema Definitions
//!
//! The local store is a single key-value table plus a migrations ledger.

/// Current database schema version
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value table holding every persisted record
pub const CREATE_KV_STORE: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

pub const CREATE_SCHEMA_MIGRATIONS: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
)";

/// Check if database needs migration
pub fn needs_migration(current_version: i32) -> bool {
    current_version < CURRENT_SCHEMA_VERSION
}
