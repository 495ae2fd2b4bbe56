//! Login Form
//!
//! Field values, touched flags, errors and the submission phase of the
//! sign-in form. The storage round-trips (existence check on email blur,
//! credential check on submit) are performed by the caller; the form only
//! says when one is needed and absorbs the result:
//!
//! ```text
//! blur(Email) -> Some(email) --SessionStore::email_exists--> apply_existence
//! begin_submit -> Some(credentials) --SessionStore::login--> finish_submit
//! ```

use tracing::error;

use crate::egui_app::auth::{LoginOutcome, SessionStore};
use crate::shared::error::StorageError;
use crate::shared::profile::UserProfile;
use crate::shared::validation::{validate_email, validate_login_form, validate_password, LoginErrors};

/// Inline hint when the blurred email has no stored profile
pub const USER_NOT_FOUND_HINT: &str = "User not found. Please register first.";

/// Alert text when submitting with no stored profile
pub const USER_NOT_FOUND: &str = "User not found";

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Where the form is in its validate / check / submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    /// Field validation failed
    Invalid,
    /// Waiting on the email existence check
    CheckingExistence,
    /// The existence check found no profile for the email
    NotFound,
    /// Fields are valid and the email is known
    Valid,
    /// Credentials are being checked
    Submitting,
    Success,
    CredentialMismatch,
    /// Storage failed during submit
    Failure,
}

/// What the screen should do after a submit completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    /// Token written; go to the home screen
    LoggedIn(UserProfile),
    /// Show this message in an alert and stay on the form
    Alert(&'static str),
}

/// Credentials handed to [`SessionStore::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Touched {
    email: bool,
    password: bool,
}

/// Sign-in form state
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    touched: Touched,
    errors: LoginErrors,
    phase: LoginPhase,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            touched: Touched::default(),
            errors: LoginErrors::default(),
            phase: LoginPhase::Idle,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn errors(&self) -> &LoginErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: LoginField) -> bool {
        match field {
            LoginField::Email => self.touched.email,
            LoginField::Password => self.touched.password,
        }
    }

    /// Error to display under `field`; only once the field is touched
    pub fn visible_error(&self, field: LoginField) -> Option<&str> {
        let message = match field {
            LoginField::Email => &self.errors.email,
            LoginField::Password => &self.errors.password,
        };
        if self.is_touched(field) && !message.is_empty() {
            Some(message)
        } else {
            None
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Replace a field's value and revalidate it if touched
    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Email => self.email = value.into(),
            LoginField::Password => self.password = value.into(),
        }
        self.changed(field);
    }

    /// Revalidate a touched field after its text was edited in place
    pub fn changed(&mut self, field: LoginField) {
        match field {
            LoginField::Email if self.touched.email => {
                self.errors.email = validate_email(&self.email);
            }
            LoginField::Password if self.touched.password => {
                self.errors.password = validate_password(&self.password);
            }
            _ => {}
        }
    }

    /// Mark `field` touched and validate it
    ///
    /// Returns the email to look up when a syntactically valid email loses
    /// focus. While a submit is in flight the field is only revalidated.
    pub fn blur(&mut self, field: LoginField) -> Option<String> {
        match field {
            LoginField::Email if self.is_submitting() => {
                self.touched.email = true;
                self.errors.email = validate_email(&self.email);
                None
            }
            LoginField::Email => {
                self.touched.email = true;
                let message = validate_email(&self.email);
                if message.is_empty() {
                    self.phase = LoginPhase::CheckingExistence;
                    return Some(self.email.clone());
                }
                self.errors.email = message;
                self.phase = LoginPhase::Invalid;
                None
            }
            LoginField::Password => {
                self.touched.password = true;
                self.errors.password = validate_password(&self.password);
                None
            }
        }
    }

    /// Absorb an existence check for `email`
    ///
    /// Results for an email the user has since changed are dropped.
    pub fn apply_existence(&mut self, email: &str, exists: bool) {
        if email != self.email || self.phase != LoginPhase::CheckingExistence {
            return;
        }
        if exists {
            self.errors.email.clear();
            self.phase = LoginPhase::Valid;
        } else {
            self.errors.email = USER_NOT_FOUND_HINT.to_string();
            self.phase = LoginPhase::NotFound;
        }
    }

    /// Validate everything and, if valid, enter `Submitting`
    ///
    /// Returns `None` when invalid or when a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }

        self.errors = validate_login_form(&self.email, &self.password);
        self.touched = Touched {
            email: true,
            password: true,
        };

        if !self.errors.is_valid() {
            self.phase = LoginPhase::Invalid;
            return None;
        }

        self.phase = LoginPhase::Submitting;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Absorb the result of [`SessionStore::login`]
    pub fn finish_submit(&mut self, result: Result<LoginOutcome, StorageError>) -> LoginEffect {
        match result {
            Ok(LoginOutcome::Success(profile)) => {
                self.phase = LoginPhase::Success;
                LoginEffect::LoggedIn(profile)
            }
            Ok(LoginOutcome::NotFound) => {
                self.phase = LoginPhase::NotFound;
                LoginEffect::Alert(USER_NOT_FOUND)
            }
            Ok(LoginOutcome::CredentialMismatch) => {
                self.phase = LoginPhase::CredentialMismatch;
                LoginEffect::Alert(INVALID_CREDENTIALS)
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.phase = LoginPhase::Failure;
                LoginEffect::Alert(LOGIN_FAILED)
            }
        }
    }

    /// Blur `field` and run the existence check inline
    pub async fn blur_with(&mut self, field: LoginField, sessions: &SessionStore) {
        if let Some(email) = self.blur(field) {
            let exists = match sessions.email_exists(&email).await {
                Ok(exists) => exists,
                Err(e) => {
                    error!(error = %e, "Error checking user existence");
                    false
                }
            };
            self.apply_existence(&email, exists);
        }
    }

    /// Validate, check credentials and absorb the outcome in one step
    pub async fn submit(&mut self, sessions: &SessionStore) -> Option<LoginEffect> {
        let credentials = self.begin_submit()?;
        let result = sessions.login(&credentials.email, &credentials.password).await;
        Some(self.finish_submit(result))
    }
}
