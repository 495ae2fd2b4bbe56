//! Store fixtures
//!
//! Every test gets its own in-memory SQLite store, and bcrypt runs at its
//! minimum cost so registration stays fast.

use cosmos_explorer::egui_app::{LocalStore, SessionStore};
use cosmos_explorer::shared::config::MIN_BCRYPT_COST;
use cosmos_explorer::shared::NewProfile;

/// Session store over a fresh in-memory database
pub async fn memory_sessions() -> SessionStore {
    let store = LocalStore::in_memory()
        .await
        .expect("Failed to open in-memory store");
    SessionStore::new(store, MIN_BCRYPT_COST)
}

/// A registration that passes every register-form rule
pub fn sample_registration() -> NewProfile {
    NewProfile {
        first_name: "Carl".to_string(),
        last_name: "Sagan".to_string(),
        email: "carl@cosmos.org".to_string(),
        password: "PaleBlue1".to_string(),
    }
}
