//! egui Native Desktop App Module
//!
//! # Architecture
//!
//! - **`config`** - Client configuration wrapping `shared::config::AppConfig`
//! - **`local_db`** - SQLite key-value store (`userData`, `authToken`)
//! - **`auth`** - Registration, login, logout and session restore
//! - **`api`** - NASA picture-of-the-day and image-search client
//! - **`forms`** - Login and register form state machines
//! - **`home`** - Home screen load and expand/collapse state
//! - **`counter`** - The "reads" counter
//! - **`task`** - Background tasks cancelled on drop
//! - **`types`** - Routes, navigation stack, alerts
//! - **`state`** - `AppState`, polled once per frame
//! - **`views`** / **`theme`** - Rendering
//! - **`main`** - Binary entry point
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Main application entry point
//! ├── config.rs     - Configuration
//! ├── local_db/     - SQLite key-value store
//! ├── auth.rs       - Session store
//! ├── api.rs        - NASA client
//! ├── forms/        - Login / register forms
//! ├── home.rs       - Home screen state
//! ├── counter.rs    - Read counter
//! ├── task.rs       - Scoped background tasks
//! ├── types.rs      - Routes and alerts
//! ├── state/        - AppState
//! ├── views/        - Screens
//! └── theme/        - Colors and styles
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod counter;
pub mod forms;
pub mod home;
pub mod local_db;
pub mod state;
pub mod task;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{HomeFeed, NasaClient};
pub use auth::{AuthState, LoginOutcome, SessionStore};
pub use config::Config;
pub use counter::ReadCounter;
pub use local_db::LocalStore;
pub use state::{AppState, StartupError};
pub use types::{Alert, Navigator, Route};
