//! Shared Error Types
//!
//! This module defines the error types raised by the storage and network
//! layers. Field validation never produces one of these: validators return
//! plain messages, and login outcomes such as "user not found" are values of
//! [`LoginOutcome`](crate::egui_app::auth::LoginOutcome).
//!
//! # Error Categories
//!
//! - [`StorageError`] - local key-value store failures
//! - [`ApiError`] - remote API failures (status, transport, decoding)
//!
//! # Usage
//!
//! ```rust
//! use cosmos_explorer::shared::error::ApiError;
//!
//! let error = ApiError::Status(503);
//! assert_eq!(error.to_string(), "HTTP error! Status: 503");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be moved out of spawned tasks.
use thiserror::Error;

/// Local storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite operation failed
    #[error("Storage error: {0}")]
    Database(#[from] sqlx::Error),

    /// The storage directory could not be created
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded
    #[error("Corrupt record under '{key}': {message}")]
    Corrupt {
        /// The key holding the record
        key: String,
        /// Human-readable error message
        message: String,
    },

    /// Password hashing or verification failed
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A blocking helper task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

impl StorageError {
    /// Create a new corrupt-record error
    pub fn corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Remote API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("JSON error: {}", err))
    }
}
