//! Form state for the login and register screens.

pub mod login_form;
pub mod register_form;

pub use login_form::{Credentials, LoginEffect, LoginField, LoginForm, LoginPhase};
pub use register_form::{RegisterField, RegisterForm};
