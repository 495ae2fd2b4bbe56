//! Shared Module
//!
//! This module contains the types and pure logic that do not depend on the
//! UI toolkit: configuration, error types, form validation, the stored
//! profile record and the NASA API wire types.
//!
//! # Overview
//!
//! Everything here can be used and tested without an egui context or a
//! running tokio runtime.

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

/// Login and register form validators
pub mod validation;

/// Stored user profile
pub mod profile;

/// NASA API response types
pub mod nasa;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ApiError, StorageError};
pub use nasa::{Apod, GalaxyCard};
pub use profile::{NewProfile, UserProfile};
