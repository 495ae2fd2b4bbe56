//! Register Form
//!
//! Five fields validated on blur and, once touched, on every change.
//! Submitting validates all of them and marks them all touched, so every
//! error shows at once.

use tracing::error;

use crate::egui_app::auth::SessionStore;
use crate::egui_app::types::{Alert, Route};
use crate::shared::error::StorageError;
use crate::shared::profile::{NewProfile, UserProfile};
use crate::shared::validation::{
    validate_confirm_password, validate_name, validate_register_email, validate_register_form,
    validate_register_password, RegisterErrors, RegisterFields,
};

pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";

pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 5] = [
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    /// Input placeholder
    pub fn placeholder(&self) -> &'static str {
        match self {
            RegisterField::FirstName => "First Name",
            RegisterField::LastName => "Last Name",
            RegisterField::Email => "Email",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::ConfirmPassword)
    }

    fn index(&self) -> usize {
        match self {
            RegisterField::FirstName => 0,
            RegisterField::LastName => 1,
            RegisterField::Email => 2,
            RegisterField::Password => 3,
            RegisterField::ConfirmPassword => 4,
        }
    }
}

/// Account creation form state
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    fields: RegisterFields,
    touched: [bool; 5],
    errors: RegisterErrors,
    submitting: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &RegisterFields {
        &self.fields
    }

    pub fn errors(&self) -> &RegisterErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_touched(&self, field: RegisterField) -> bool {
        self.touched[field.index()]
    }

    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.fields.first_name,
            RegisterField::LastName => &self.fields.last_name,
            RegisterField::Email => &self.fields.email,
            RegisterField::Password => &self.fields.password,
            RegisterField::ConfirmPassword => &self.fields.confirm_password,
        }
    }

    /// Mutable text for in-place editing; call [`changed`](Self::changed) after
    pub fn value_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::FirstName => &mut self.fields.first_name,
            RegisterField::LastName => &mut self.fields.last_name,
            RegisterField::Email => &mut self.fields.email,
            RegisterField::Password => &mut self.fields.password,
            RegisterField::ConfirmPassword => &mut self.fields.confirm_password,
        }
    }

    fn error_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::FirstName => &mut self.errors.first_name,
            RegisterField::LastName => &mut self.errors.last_name,
            RegisterField::Email => &mut self.errors.email,
            RegisterField::Password => &mut self.errors.password,
            RegisterField::ConfirmPassword => &mut self.errors.confirm_password,
        }
    }

    pub fn error(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.errors.first_name,
            RegisterField::LastName => &self.errors.last_name,
            RegisterField::Email => &self.errors.email,
            RegisterField::Password => &self.errors.password,
            RegisterField::ConfirmPassword => &self.errors.confirm_password,
        }
    }

    /// Error to display under `field`; only once the field is touched
    pub fn visible_error(&self, field: RegisterField) -> Option<&str> {
        let message = self.error(field);
        if self.is_touched(field) && !message.is_empty() {
            Some(message)
        } else {
            None
        }
    }

    fn validate_field(&self, field: RegisterField) -> String {
        let value = self.value(field);
        match field {
            RegisterField::FirstName => validate_name(value, "First name"),
            RegisterField::LastName => validate_name(value, "Last name"),
            RegisterField::Email => validate_register_email(value),
            RegisterField::Password => validate_register_password(value),
            RegisterField::ConfirmPassword => validate_confirm_password(value, &self.fields.password),
        }
    }

    fn revalidate(&mut self, field: RegisterField) {
        let message = self.validate_field(field);
        *self.error_mut(field) = message;
    }

    /// Replace a field's value and revalidate as [`changed`](Self::changed) does
    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.changed(field);
    }

    /// Revalidate a touched field after an edit
    ///
    /// A password edit also rechecks a touched confirmation against the new
    /// password.
    pub fn changed(&mut self, field: RegisterField) {
        if !self.is_touched(field) {
            return;
        }
        self.revalidate(field);
        if field == RegisterField::Password && self.is_touched(RegisterField::ConfirmPassword) {
            self.revalidate(RegisterField::ConfirmPassword);
        }
    }

    pub fn blur(&mut self, field: RegisterField) {
        self.touched[field.index()] = true;
        self.revalidate(field);
    }

    /// Validate all five fields; on success enter submitting and hand back
    /// the registration
    pub fn begin_submit(&mut self) -> Option<NewProfile> {
        if self.submitting {
            return None;
        }

        self.errors = validate_register_form(&self.fields);
        self.touched = [true; 5];

        if !self.errors.is_valid() {
            return None;
        }

        self.submitting = true;
        Some(NewProfile {
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            email: self.fields.email.clone(),
            password: self.fields.password.clone(),
        })
    }

    /// Absorb the result of [`SessionStore::register`]
    pub fn finish_submit(&mut self, result: Result<UserProfile, StorageError>) -> Alert {
        self.submitting = false;
        match result {
            Ok(_) => Alert::success(REGISTRATION_SUCCEEDED, Route::Login),
            Err(e) => {
                error!(error = %e, "Registration failed");
                Alert::error(REGISTRATION_FAILED)
            }
        }
    }

    /// Validate, store and absorb the outcome in one step
    pub async fn submit(&mut self, sessions: &SessionStore) -> Option<Alert> {
        let profile = self.begin_submit()?;
        let result = sessions.register(profile).await;
        Some(self.finish_submit(result))
    }
}
