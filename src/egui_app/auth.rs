//! Authentication Module
//!
//! Local registration and login on top of the [`LocalStore`]. The device
//! keeps exactly one [`UserProfile`]; registering again replaces it. The
//! presence of the session token is the only "logged in" signal.
//!
//! Every operation is a short read-compare-write sequence with no locking.

use tracing::{error, info, warn};

use crate::egui_app::local_db::{LocalStore, Result, AUTH_TOKEN_KEY, USER_DATA_KEY};
use crate::shared::error::StorageError;
use crate::shared::profile::{NewProfile, UserProfile};

/// Opaque value written under [`AUTH_TOKEN_KEY`] on login and registration
pub const SESSION_TOKEN: &str = "local-session-token";

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; the token has been written
    Success(UserProfile),
    /// No profile is stored on this device
    NotFound,
    /// A profile exists but the email or password differs
    CredentialMismatch,
}

/// Who is signed in, as shown by the views
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    /// Greeting name, if someone is signed in
    pub fn first_name(&self) -> Option<&str> {
        self.user.as_ref().map(UserProfile::display_name)
    }
}

/// Profile and session operations
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: LocalStore,
    bcrypt_cost: u32,
}

impl SessionStore {
    pub fn new(store: LocalStore, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Underlying key-value store
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Read the stored profile, if any
    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        self.store.get_json(USER_DATA_KEY).await
    }

    /// Whether a session token is present
    pub async fn has_session(&self) -> Result<bool> {
        Ok(self.store.get(AUTH_TOKEN_KEY).await?.is_some())
    }

    /// Whether the stored profile has exactly this email
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self
            .profile()
            .await?
            .map(|profile| profile.email == email)
            .unwrap_or(false))
    }

    /// Hash and store a new profile, then write the token
    ///
    /// Any existing profile is overwritten.
    pub async fn register(&self, new: NewProfile) -> Result<UserProfile> {
        let existing = match self.profile().await {
            Ok(existing) => existing,
            Err(e) => {
                warn!(error = %e, "Stored profile unreadable; replacing it");
                None
            }
        };
        if let Some(existing) = existing {
            if existing.email != new.email {
                warn!(
                    previous = %existing.email,
                    email = %new.email,
                    "Registration replaces the stored profile"
                );
            }
        }

        let cost = self.bcrypt_cost;
        let profile = tokio::task::spawn_blocking(move || UserProfile::from_registration(new, cost))
            .await
            .map_err(|e| {
                error!(error = %e, "Password hashing task failed");
                StorageError::Task(e.to_string())
            })??;

        self.store.set_json(USER_DATA_KEY, &profile).await?;
        self.store.set(AUTH_TOKEN_KEY, SESSION_TOKEN).await?;
        info!(email = %profile.email, id = %profile.id, "User registered");
        Ok(profile)
    }

    /// Compare credentials against the stored profile
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let Some(profile) = self.profile().await? else {
            info!(email, "Login attempted with no stored profile");
            return Ok(LoginOutcome::NotFound);
        };

        if profile.email != email {
            info!(email, "Login email does not match stored profile");
            return Ok(LoginOutcome::CredentialMismatch);
        }

        let hash_holder = profile.clone();
        let candidate = password.to_string();
        let matches = tokio::task::spawn_blocking(move || hash_holder.verify_password(&candidate))
            .await
            .map_err(|e| {
                error!(error = %e, "Password verification task failed");
                StorageError::Task(e.to_string())
            })??;

        if !matches {
            info!(email, "Login password mismatch");
            return Ok(LoginOutcome::CredentialMismatch);
        }

        self.store.set(AUTH_TOKEN_KEY, SESSION_TOKEN).await?;
        info!(email, "User logged in");
        Ok(LoginOutcome::Success(profile))
    }

    /// Remove the session token; the profile stays
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(AUTH_TOKEN_KEY).await?;
        info!("User logged out");
        Ok(())
    }

    /// The stored profile when a session token is also present
    pub async fn restore(&self) -> Result<Option<UserProfile>> {
        if !self.has_session().await? {
            return Ok(None);
        }
        self.profile().await
    }
}
