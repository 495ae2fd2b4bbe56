use thiserror::Error;
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, error, info};

use crate::egui_app::api::NasaClient;
use crate::egui_app::auth::{AuthState, LoginOutcome, SessionStore};
use crate::egui_app::config::Config;
use crate::egui_app::counter::ReadCounter;
use crate::egui_app::forms::{LoginEffect, LoginField, LoginForm, RegisterField, RegisterForm};
use crate::egui_app::home::{HomeScreen, LOGOUT_FAILED};
use crate::egui_app::local_db::LocalStore;
use crate::egui_app::task::{Poll, ScopedTask};
use crate::egui_app::types::{Alert, Navigator, Route};
use crate::shared::error::{ApiError, StorageError};
use crate::shared::profile::UserProfile;

/// Failures that stop the app from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to open local storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] ApiError),
}

/// An existence check together with the email it was issued for
struct ExistenceCheck {
    email: String,
    task: ScopedTask<Result<bool, StorageError>>,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub nasa: NasaClient,
    pub navigator: Navigator,
    pub auth_state: AuthState,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    /// Present only while the home route is showing
    pub home: Option<HomeScreen>,
    pub read_counter: ReadCounter,
    pub alert: Option<Alert>,

    existence_check: Option<ExistenceCheck>,
    login_task: Option<ScopedTask<Result<LoginOutcome, StorageError>>>,
    register_task: Option<ScopedTask<Result<UserProfile, StorageError>>>,
    logout_task: Option<ScopedTask<Result<(), StorageError>>>,

    /// Declared last so pending tasks and the pool drop before the runtime
    runtime: Runtime,
}

impl AppState {
    /// Open storage, build the HTTP client and restore any saved session
    pub fn bootstrap(config: Config) -> Result<Self, StartupError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let path = config.storage_path();
        let store = runtime.block_on(LocalStore::open(&path))?;
        info!(path = %path.display(), "Local storage opened");

        let sessions = SessionStore::new(store, config.bcrypt_cost());
        let nasa = NasaClient::new(&config)?;
        Ok(Self::new(config, runtime, sessions, nasa))
    }

    /// Assemble the state and pick the first screen
    ///
    /// A stored token with a stored profile opens Home; anything else,
    /// including a failed read, opens Landing.
    pub fn new(config: Config, runtime: Runtime, sessions: SessionStore, nasa: NasaClient) -> Self {
        let restored = match runtime.block_on(sessions.restore()) {
            Ok(restored) => restored,
            Err(e) => {
                error!(error = %e, "Failed to restore session");
                None
            }
        };

        let (initial, auth_state) = match restored {
            Some(profile) => {
                info!(email = %profile.email, "Session restored");
                (Route::Home, AuthState::signed_in(profile))
            }
            None => (Route::Landing, AuthState::new()),
        };

        let mut state = Self {
            config,
            sessions,
            nasa,
            navigator: Navigator::new(initial),
            auth_state,
            login_form: LoginForm::new(),
            register_form: RegisterForm::new(),
            home: None,
            read_counter: ReadCounter::new(),
            alert: None,
            existence_check: None,
            login_task: None,
            register_task: None,
            logout_task: None,
            runtime,
        };
        state.sync_screens();
        state
    }

    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Whether any background work is still outstanding
    pub fn is_busy(&self) -> bool {
        self.existence_check.is_some()
            || self.login_task.is_some()
            || self.register_task.is_some()
            || self.logout_task.is_some()
            || self.home.as_ref().is_some_and(HomeScreen::is_loading)
    }

    /// Mount or drop per-screen state to match the current route
    fn sync_screens(&mut self) {
        match (self.navigator.current(), self.home.is_some()) {
            (Route::Home, false) => {
                debug!("Mounting home screen");
                self.home = Some(HomeScreen::start(
                    self.runtime.handle(),
                    self.sessions.clone(),
                    self.nasa.clone(),
                ));
            }
            (route, true) if route != Route::Home => {
                debug!("Unmounting home screen");
                self.home = None;
            }
            _ => {}
        }
    }

    /// Open `route`, returning to it if it is already on the stack
    pub fn navigate(&mut self, route: Route) {
        info!(from = self.navigator.current().as_str(), to = route.as_str(), "Navigate");
        self.navigator.navigate(route);
        self.sync_screens();
    }

    /// Swap the current screen for `route`
    pub fn replace_route(&mut self, route: Route) {
        info!(from = self.navigator.current().as_str(), to = route.as_str(), "Replace route");
        self.navigator.replace(route);
        self.sync_screens();
    }

    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.sync_screens();
        }
    }

    /// Close the alert and follow its navigation, if any
    pub fn dismiss_alert(&mut self) {
        if let Some(alert) = self.alert.take() {
            if let Some(route) = alert.then {
                self.navigate(route);
            }
        }
    }

    pub fn reset_reads(&mut self) {
        self.read_counter.reset();
    }

    /// Email field lost focus; start the existence check when it is valid
    pub fn handle_login_email_blur(&mut self) {
        let Some(email) = self.login_form.blur(LoginField::Email) else {
            return;
        };
        let sessions = self.sessions.clone();
        let lookup = email.clone();
        let task = ScopedTask::spawn(self.runtime.handle(), "email_exists", async move {
            sessions.email_exists(&lookup).await
        });
        // A newer check replaces (and aborts) the older one
        self.existence_check = Some(ExistenceCheck { email, task });
    }

    pub fn handle_login(&mut self) {
        if self.login_task.is_some() {
            return;
        }
        let Some(credentials) = self.login_form.begin_submit() else {
            return;
        };
        info!(email = %credentials.email, "Attempting login");

        let sessions = self.sessions.clone();
        self.login_task = Some(ScopedTask::spawn(self.runtime.handle(), "login", async move {
            sessions.login(&credentials.email, &credentials.password).await
        }));
    }

    pub fn handle_register_blur(&mut self, field: RegisterField) {
        self.register_form.blur(field);
    }

    pub fn handle_register(&mut self) {
        if self.register_task.is_some() {
            return;
        }
        let Some(profile) = self.register_form.begin_submit() else {
            return;
        };
        info!(email = %profile.email, "Attempting registration");

        let sessions = self.sessions.clone();
        self.register_task = Some(ScopedTask::spawn(self.runtime.handle(), "register", async move {
            sessions.register(profile).await
        }));
    }

    pub fn logout(&mut self) {
        if self.logout_task.is_some() {
            return;
        }
        let sessions = self.sessions.clone();
        self.logout_task = Some(ScopedTask::spawn(self.runtime.handle(), "logout", async move {
            sessions.logout().await
        }));
    }

    /// Poll background work; called once per frame
    pub fn check_pending(&mut self) {
        self.check_existence();
        self.check_login();
        self.check_register();
        self.check_logout();

        if let Some(home) = self.home.as_mut() {
            if let Some(alert) = home.poll() {
                self.alert = Some(alert);
            }
        }
    }

    fn check_existence(&mut self) {
        let Some(check) = self.existence_check.as_ref() else {
            return;
        };
        let exists = match check.task.poll() {
            Poll::Pending => return,
            Poll::Ready(Ok(exists)) => exists,
            Poll::Ready(Err(e)) => {
                error!(error = %e, "Error checking user existence");
                false
            }
            Poll::Lost => {
                error!(task = check.task.name(), "Existence check ended without a result");
                false
            }
        };
        if let Some(check) = self.existence_check.take() {
            self.login_form.apply_existence(&check.email, exists);
        }
    }

    fn check_login(&mut self) {
        let Some(task) = self.login_task.as_ref() else {
            return;
        };
        let result = match task.poll() {
            Poll::Pending => return,
            Poll::Ready(result) => result,
            Poll::Lost => Err(StorageError::Task("login task ended without a result".to_string())),
        };
        self.login_task = None;

        match self.login_form.finish_submit(result) {
            LoginEffect::LoggedIn(profile) => {
                info!(email = %profile.email, "Login successful");
                self.auth_state = AuthState::signed_in(profile);
                self.login_form = LoginForm::new();
                self.replace_route(Route::Home);
            }
            LoginEffect::Alert(message) => {
                self.alert = Some(Alert::error(message));
            }
        }
    }

    fn check_register(&mut self) {
        let Some(task) = self.register_task.as_ref() else {
            return;
        };
        let result = match task.poll() {
            Poll::Pending => return,
            Poll::Ready(result) => result,
            Poll::Lost => Err(StorageError::Task("register task ended without a result".to_string())),
        };
        self.register_task = None;

        let succeeded = result.is_ok();
        self.alert = Some(self.register_form.finish_submit(result));
        if succeeded {
            self.register_form = RegisterForm::new();
        }
    }

    fn check_logout(&mut self) {
        let Some(task) = self.logout_task.as_ref() else {
            return;
        };
        let result = match task.poll() {
            Poll::Pending => return,
            Poll::Ready(result) => result,
            Poll::Lost => Err(StorageError::Task("logout task ended without a result".to_string())),
        };
        self.logout_task = None;

        match result {
            Ok(()) => {
                self.auth_state = AuthState::new();
                self.login_form = LoginForm::new();
                self.replace_route(Route::Login);
            }
            Err(e) => {
                error!(error = %e, "Error during logout");
                self.alert = Some(Alert::error(LOGOUT_FAILED));
            }
        }
    }
}
