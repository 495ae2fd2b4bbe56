//! Home Screen State
//!
//! On mount the home screen reads the stored profile for the greeting and
//! then loads the picture of the day and the galaxy list together. Either
//! failure fails the whole load; the screen then shows one generic alert.
//!
//! The load runs as a [`ScopedTask`], so leaving the screen cancels it.

use std::collections::BTreeSet;

use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{error, info};

use crate::egui_app::api::{HomeFeed, NasaClient};
use crate::egui_app::auth::SessionStore;
use crate::egui_app::counter::ReadCounter;
use crate::egui_app::task::{Poll, ScopedTask};
use crate::egui_app::types::Alert;
use crate::shared::error::{ApiError, StorageError};
use crate::shared::nasa::{excerpt, GalaxyCard};

/// Collapsed length of the picture-of-the-day explanation
pub const APOD_EXCERPT_CHARS: usize = 150;

/// Collapsed length of a galaxy description
pub const GALAXY_EXCERPT_CHARS: usize = 100;

pub const LOAD_FAILED: &str = "Failed to load data. Please check your connection and try again.";

pub const LOGOUT_FAILED: &str = "Failed to logout. Please try again.";

/// Why the home screen could not load
#[derive(Debug, Error)]
pub enum HomeLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Everything the home screen needs after mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeData {
    pub first_name: String,
    pub feed: HomeFeed,
}

/// Read the greeting name, then fetch both feeds concurrently
pub async fn load_home(sessions: &SessionStore, client: &NasaClient) -> Result<HomeData, HomeLoadError> {
    let first_name = sessions
        .profile()
        .await?
        .map(|profile| profile.display_name().to_string())
        .unwrap_or_default();

    let feed = client.fetch_home_feed().await?;
    Ok(HomeData { first_name, feed })
}

/// Per-screen state of the home view
#[derive(Debug, Default)]
pub struct HomeScreen {
    first_name: String,
    feed: Option<HomeFeed>,
    loading: bool,
    show_full_description: bool,
    expanded_galaxies: BTreeSet<usize>,
    load: Option<ScopedTask<Result<HomeData, HomeLoadError>>>,
}

impl HomeScreen {
    /// Mount the screen and start loading
    pub fn start(runtime: &Handle, sessions: SessionStore, client: NasaClient) -> Self {
        let task = ScopedTask::spawn(runtime, "home_load", async move {
            load_home(&sessions, &client).await
        });
        Self {
            loading: true,
            load: Some(task),
            ..Self::default()
        }
    }

    /// Pick up the load result if it has arrived
    ///
    /// Returns an alert when the load failed.
    pub fn poll(&mut self) -> Option<Alert> {
        let polled = match self.load.as_ref()?.poll() {
            Poll::Pending => return None,
            Poll::Ready(result) => Some(result),
            Poll::Lost => None,
        };
        self.load = None;

        match polled {
            Some(result) => self.apply_load(result),
            None => {
                error!("Home load task ended without a result");
                self.loading = false;
                Some(Alert::error(LOAD_FAILED))
            }
        }
    }

    /// Absorb a finished load
    pub fn apply_load(&mut self, result: Result<HomeData, HomeLoadError>) -> Option<Alert> {
        self.loading = false;
        match result {
            Ok(data) => {
                info!(galaxies = data.feed.galaxies.len(), "Home feed loaded");
                self.first_name = data.first_name;
                self.feed = Some(data.feed);
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to load home feed");
                Some(Alert::error(LOAD_FAILED))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn feed(&self) -> Option<&HomeFeed> {
        self.feed.as_ref()
    }

    pub fn galaxies(&self) -> &[GalaxyCard] {
        self.feed.as_ref().map(|feed| feed.galaxies.as_slice()).unwrap_or(&[])
    }

    pub fn is_description_expanded(&self) -> bool {
        self.show_full_description
    }

    pub fn is_galaxy_expanded(&self, index: usize) -> bool {
        self.expanded_galaxies.contains(&index)
    }

    /// Flip the picture-of-the-day text; expanding counts as a read
    pub fn toggle_description(&mut self, counter: &mut ReadCounter) {
        if !self.show_full_description {
            counter.increment();
        }
        self.show_full_description = !self.show_full_description;
    }

    /// Flip one galaxy card; expanding counts as a read
    pub fn toggle_galaxy(&mut self, index: usize, counter: &mut ReadCounter) {
        if self.expanded_galaxies.remove(&index) {
            return;
        }
        self.expanded_galaxies.insert(index);
        counter.increment();
    }

    /// Explanation as currently shown
    pub fn description_text(&self) -> Option<String> {
        let apod = &self.feed.as_ref()?.apod;
        Some(if self.show_full_description {
            apod.explanation.clone()
        } else {
            excerpt(&apod.explanation, APOD_EXCERPT_CHARS)
        })
    }

    /// Galaxy description as currently shown
    pub fn galaxy_text(&self, index: usize) -> Option<String> {
        let card = self.galaxies().get(index)?;
        Some(if self.is_galaxy_expanded(index) {
            card.description.clone()
        } else {
            excerpt(&card.description, GALAXY_EXCERPT_CHARS)
        })
    }
}

/// Button caption for an expandable text
pub fn toggle_caption(expanded: bool) -> &'static str {
    if expanded {
        "Show Less"
    } else {
        "Read More"
    }
}
