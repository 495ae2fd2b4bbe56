//! Form Validation
//!
//! Pure validators for the login and register forms. Every validator returns
//! a human-readable message, or an empty string when the value is valid.
//!
//! Two email patterns exist: the login form accepts anything shaped like
//! `x@y.z` with no whitespace in each part, the register form additionally
//! rejects a second `@`.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref LOGIN_EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
    static ref REGISTER_EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validate an email on the login form
pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        return "Email is required".to_string();
    }
    if !LOGIN_EMAIL_RE.is_match(email) {
        return "Invalid email format".to_string();
    }
    String::new()
}

/// Validate an email on the register form
pub fn validate_register_email(email: &str) -> String {
    if email.is_empty() {
        return "Email is required".to_string();
    }
    if !REGISTER_EMAIL_RE.is_match(email) {
        return "Invalid email format".to_string();
    }
    String::new()
}

/// Validate a password on the login form
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return "Password is required".to_string();
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return format!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    String::new()
}

/// Validate a password on the register form: login rules, then one
/// uppercase ASCII letter and one ASCII digit.
pub fn validate_register_password(password: &str) -> String {
    let basic = validate_password(password);
    if !basic.is_empty() {
        return basic;
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return "Password must contain at least one uppercase letter".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return "Password must contain at least one number".to_string();
    }
    String::new()
}

/// Validate a first or last name; `label` is e.g. "First name"
pub fn validate_name(value: &str, label: &str) -> String {
    if value.trim().is_empty() {
        return format!("{} is required", label);
    }
    String::new()
}

pub fn validate_confirm_password(confirm: &str, password: &str) -> String {
    if confirm.is_empty() {
        return "Please confirm your password".to_string();
    }
    if confirm != password {
        return "Passwords do not match".to_string();
    }
    String::new()
}

/// Errors shown by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
}

impl LoginErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Validate the whole login form
pub fn validate_login_form(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email),
        password: validate_password(password),
    }
}

/// Raw values of the register form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Errors shown by the register form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterErrors {
    pub fn is_valid(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

/// Validate all five register fields at once
pub fn validate_register_form(fields: &RegisterFields) -> RegisterErrors {
    RegisterErrors {
        first_name: validate_name(&fields.first_name, "First name"),
        last_name: validate_name(&fields.last_name, "Last name"),
        email: validate_register_email(&fields.email),
        password: validate_register_password(&fields.password),
        confirm_password: validate_confirm_password(&fields.confirm_password, &fields.password),
    }
}
