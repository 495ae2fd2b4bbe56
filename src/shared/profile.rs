//! User Profile Record
//!
//! The single registration record kept on the device. It is serialized as
//! camelCase JSON under the `userData` key. The password is never stored:
//! registration keeps a salted bcrypt hash and login verifies against it.

use bcrypt::{hash, verify};
use serde::{Deserialize, Serialize};

use crate::shared::error::StorageError;

/// Stored registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash (`$2b$...`) of the registration password
    pub password_hash: String,
    /// Creation time in milliseconds since the Unix epoch
    pub id: String,
}

impl UserProfile {
    /// Hash the password of a validated registration and stamp the record
    pub fn from_registration(new: NewProfile, cost: u32) -> Result<Self, StorageError> {
        let password_hash = hash(&new.password, cost)?;
        Ok(Self {
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            password_hash,
            id: chrono::Utc::now().timestamp_millis().to_string(),
        })
    }

    /// Check a login password against the stored hash
    pub fn verify_password(&self, password: &str) -> Result<bool, StorageError> {
        Ok(verify(password, &self.password_hash)?)
    }

    /// First name for greetings, `"User"` when blank
    pub fn display_name(&self) -> &str {
        let trimmed = self.first_name.trim();
        if trimmed.is_empty() {
            "User"
        } else {
            trimmed
        }
    }
}

/// Registration input, already validated by the register form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}
