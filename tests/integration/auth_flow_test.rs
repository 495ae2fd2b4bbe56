//! Registration, login and session integration tests

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::common::*;
use cosmos_explorer::egui_app::auth::SESSION_TOKEN;
use cosmos_explorer::egui_app::forms::login_form::{INVALID_CREDENTIALS, USER_NOT_FOUND};
use cosmos_explorer::egui_app::forms::register_form::REGISTRATION_SUCCEEDED;
use cosmos_explorer::egui_app::forms::{LoginEffect, LoginField, LoginForm, LoginPhase, RegisterField, RegisterForm};
use cosmos_explorer::egui_app::local_db::{AUTH_TOKEN_KEY, USER_DATA_KEY};
use cosmos_explorer::egui_app::types::Route;
use cosmos_explorer::egui_app::{LocalStore, LoginOutcome, SessionStore};
use cosmos_explorer::shared::config::MIN_BCRYPT_COST;
use cosmos_explorer::shared::UserProfile;

#[tokio::test]
async fn test_register_then_login_succeeds_and_stores_token() {
    let sessions = memory_sessions().await;
    let registered = sessions.register(sample_registration()).await.unwrap();
    sessions.logout().await.unwrap();

    let outcome = sessions.login("carl@cosmos.org", "PaleBlue1").await.unwrap();
    assert_eq!(outcome, LoginOutcome::Success(registered));

    let token = sessions.store().get(AUTH_TOKEN_KEY).await.unwrap();
    assert_eq!(token.as_deref(), Some(SESSION_TOKEN));
}

#[tokio::test]
async fn test_wrong_password_is_mismatch_not_missing() {
    let sessions = memory_sessions().await;
    sessions.register(sample_registration()).await.unwrap();

    let outcome = sessions.login("carl@cosmos.org", "PaleBlue2").await.unwrap();
    assert_eq!(outcome, LoginOutcome::CredentialMismatch);
}

#[tokio::test]
async fn test_login_without_registration_is_not_found() {
    let sessions = memory_sessions().await;
    let outcome = sessions.login("carl@cosmos.org", "PaleBlue1").await.unwrap();
    assert_eq!(outcome, LoginOutcome::NotFound);
}

#[tokio::test]
async fn test_profile_round_trip() {
    let sessions = memory_sessions().await;
    let registered = sessions.register(sample_registration()).await.unwrap();

    let stored: UserProfile = sessions
        .store()
        .get_json(USER_DATA_KEY)
        .await
        .unwrap()
        .expect("profile should be stored");
    assert_eq!(stored, registered);
    assert_eq!(stored.first_name, "Carl");
    assert_eq!(stored.last_name, "Sagan");
    assert_eq!(stored.email, "carl@cosmos.org");
    assert_ne!(stored.password_hash, "PaleBlue1");
}

#[tokio::test]
async fn test_profile_is_stored_as_camel_case_json() {
    let sessions = memory_sessions().await;
    sessions.register(sample_registration()).await.unwrap();

    let raw = sessions.store().get(USER_DATA_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["firstName"], "Carl");
    assert_eq!(value["lastName"], "Sagan");
    assert!(value.get("password").is_none());
}

#[tokio::test]
async fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");

    {
        let store = LocalStore::open(&path).await.unwrap();
        let sessions = SessionStore::new(store.clone(), MIN_BCRYPT_COST);
        sessions.register(sample_registration()).await.unwrap();
        store.close().await;
    }

    let store = LocalStore::open(&path).await.unwrap();
    let sessions = SessionStore::new(store, MIN_BCRYPT_COST);
    let restored = sessions.restore().await.unwrap().expect("session should be restored");
    assert_eq!(restored.email, "carl@cosmos.org");
}

#[tokio::test]
async fn test_register_form_to_login_form() {
    let sessions = memory_sessions().await;

    let mut register = RegisterForm::new();
    register.set(RegisterField::FirstName, "Carl");
    register.set(RegisterField::LastName, "Sagan");
    register.set(RegisterField::Email, "carl@cosmos.org");
    register.set(RegisterField::Password, "PaleBlue1");
    register.set(RegisterField::ConfirmPassword, "PaleBlue1");

    let alert = register.submit(&sessions).await.expect("form should submit");
    assert_eq!(alert.message, REGISTRATION_SUCCEEDED);
    assert_eq!(alert.then, Some(Route::Login));

    let mut login = LoginForm::new();
    login.set(LoginField::Email, "carl@cosmos.org");
    login.blur_with(LoginField::Email, &sessions).await;
    assert_eq!(login.phase(), LoginPhase::Valid);

    login.set(LoginField::Password, "PaleBlue1");
    let effect = login.submit(&sessions).await.expect("form should submit");
    assert!(matches!(effect, LoginEffect::LoggedIn(ref p) if p.first_name == "Carl"));
    assert_eq!(login.phase(), LoginPhase::Success);
}

#[tokio::test]
async fn test_login_form_alerts() {
    let sessions = memory_sessions().await;

    let mut login = LoginForm::new();
    login.set(LoginField::Email, "carl@cosmos.org");
    login.set(LoginField::Password, "PaleBlue1");
    assert_eq!(login.submit(&sessions).await, Some(LoginEffect::Alert(USER_NOT_FOUND)));

    sessions.register(sample_registration()).await.unwrap();
    login.set(LoginField::Password, "WrongPass1");
    assert_eq!(login.submit(&sessions).await, Some(LoginEffect::Alert(INVALID_CREDENTIALS)));
}

#[tokio::test]
async fn test_invalid_register_form_does_not_write() {
    let sessions = memory_sessions().await;

    let mut register = RegisterForm::new();
    register.set(RegisterField::Email, "carl@cosmos.org");
    register.set(RegisterField::Password, "lowercase1");
    assert_eq!(register.submit(&sessions).await, None);

    assert_eq!(
        register.visible_error(RegisterField::Password),
        Some("Password must contain at least one uppercase letter")
    );
    assert!(sessions.profile().await.unwrap().is_none());
}
