//! Cosmos Explorer - Main Library
//!
//! A desktop astronomy browser: local account registration and login, then
//! NASA's Astronomy Picture of the Day and a galaxy image feed, with a small
//! "reads" counter for every description the user expands.
//!
//! # Module Structure
//!
//! - **`shared`** - Types and logic with no UI dependency
//!   - Configuration (`AppConfig`, builder, file and environment layering)
//!   - Error types (`StorageError`, `ApiError`)
//!   - Form validation rules
//!   - The stored user profile and the NASA response shapes
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Local SQLite key-value store and the session store on top of it
//!   - NASA HTTP client
//!   - Login / register form state, home screen state, navigation
//!   - Views and theme
//!
//! # Threading
//!
//! egui renders on the main thread. Storage and HTTP calls run on a tokio
//! runtime owned by `AppState` and report back through channels polled once
//! per frame.
//!
//! # Usage
//!
//! ```rust,no_run
//! use cosmos_explorer::egui_app::{AppState, Config};
//!
//! let config = Config::load().expect("invalid configuration");
//! let state = AppState::bootstrap(config).expect("failed to start");
//! ```

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
