//! NASA API Client
//!
//! Two stateless GET operations against fixed endpoints, plus the joint
//! fetch the home screen issues on mount. There is no retry and no cache:
//! every call goes to the network.

use std::time::Duration;

use futures_util::future::try_join;
use reqwest::Client;
use tracing::{debug, error};

use crate::egui_app::config::Config;
use crate::shared::config::ImageSearchQuery;
use crate::shared::error::ApiError;
use crate::shared::nasa::{Apod, GalaxyCard, SearchResponse};

/// Everything the home screen shows below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeFeed {
    pub apod: Apod,
    pub galaxies: Vec<GalaxyCard>,
}

/// HTTP client for the two NASA endpoints
#[derive(Debug, Clone)]
pub struct NasaClient {
    client: Client,
    apod_url: String,
    api_key: String,
    images_url: String,
    image_query: ImageSearchQuery,
}

impl NasaClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let app = config.app();
        let client = Client::builder()
            .timeout(Duration::from_secs(app.http_timeout_secs))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            apod_url: app.apod_url.clone(),
            api_key: app.api_key.clone(),
            images_url: app.images_url.clone(),
            image_query: app.image_query.clone(),
        })
    }

    /// Today's astronomy picture
    pub async fn fetch_apod(&self) -> Result<Apod, ApiError> {
        let response = self
            .client
            .get(&self.apod_url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching image");
                ApiError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Error fetching image");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        let apod: Apod = serde_json::from_str(&body)?;
        debug!(title = %apod.title, "Fetched picture of the day");
        Ok(apod)
    }

    /// Galaxy images from `collection.items`
    ///
    /// Items without an image link or a metadata record are skipped.
    pub async fn fetch_galaxies(&self) -> Result<Vec<GalaxyCard>, ApiError> {
        let response = self
            .client
            .get(&self.images_url)
            .query(&self.image_query.pairs())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching galaxy data");
                ApiError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Error fetching galaxy data");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        let search: SearchResponse = serde_json::from_str(&body)?;
        let total = search.collection.items.len();
        let cards: Vec<GalaxyCard> = search
            .collection
            .items
            .into_iter()
            .filter_map(GalaxyCard::from_item)
            .collect();

        if cards.len() < total {
            debug!(skipped = total - cards.len(), "Skipped incomplete search items");
        }
        Ok(cards)
    }

    /// Both fetches issued concurrently; the first failure fails the whole
    /// feed and no partial result is returned
    pub async fn fetch_home_feed(&self) -> Result<HomeFeed, ApiError> {
        let (apod, galaxies) = try_join(self.fetch_apod(), self.fetch_galaxies()).await?;
        Ok(HomeFeed { apod, galaxies })
    }
}
