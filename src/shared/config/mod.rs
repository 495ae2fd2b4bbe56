//! Application configuration module
//!
//! Provides the configuration types for the application: the remote
//! endpoints, the local storage location and the password hashing cost.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables. See [`AppConfig::load`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default "picture of the day" endpoint
pub const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Default image-search endpoint
pub const DEFAULT_IMAGES_URL: &str = "https://images-api.nasa.gov/search";

/// Public demo key accepted by api.nasa.gov
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Name of the per-user directory under the platform config/data dirs
pub const APP_DIR_NAME: &str = "cosmos-explorer";

/// Fixed query parameters of the galaxy image search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageSearchQuery {
    pub topic: String,
    pub media_type: String,
    pub page_size: u32,
    pub year_start: u32,
}

impl Default for ImageSearchQuery {
    fn default() -> Self {
        Self {
            topic: "galaxy".to_string(),
            media_type: "image".to_string(),
            page_size: 10,
            year_start: 2018,
        }
    }
}

impl ImageSearchQuery {
    /// Query pairs in the order the search endpoint documents them
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.topic.clone()),
            ("media_type", self.media_type.clone()),
            ("page_size", self.page_size.to_string()),
            ("year_start", self.year_start.to_string()),
        ]
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// APOD endpoint, without the `api_key` parameter
    pub apod_url: String,
    /// api.nasa.gov key
    pub api_key: String,
    /// Image-search endpoint, without query parameters
    pub images_url: String,
    /// Galaxy search parameters
    pub image_query: ImageSearchQuery,
    /// Directory holding the local store; `None` means the platform data dir
    pub data_dir: Option<PathBuf>,
    /// Request timeout in seconds
    pub http_timeout_secs: u64,
    /// bcrypt work factor for stored passwords
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            apod_url: DEFAULT_APOD_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            images_url: DEFAULT_IMAGES_URL.to_string(),
            image_query: ImageSearchQuery::default(),
            data_dir: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// On-disk shape of `config.toml`; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    apod_url: Option<String>,
    api_key: Option<String>,
    images_url: Option<String>,
    image_query: Option<ImageSearchQuery>,
    data_dir: Option<PathBuf>,
    http_timeout_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load defaults, then `config.toml` from the platform config dir if it
    /// exists, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = match Self::default_file_path() {
            Some(path) if path.exists() => AppConfigBuilder::from_toml_file(&path)?,
            _ => AppConfigBuilder::default(),
        };
        builder = builder.with_env()?;
        builder.build()
    }

    /// `~/.config/cosmos-explorer/config.toml` or the platform equivalent
    pub fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.apod_url, &self.images_url] {
            reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", url, e)))?;
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("api_key"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidBcryptCost(self.bcrypt_cost));
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::MissingValue("http_timeout_secs"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    apod_url: Option<String>,
    api_key: Option<String>,
    images_url: Option<String>,
    image_query: Option<ImageSearchQuery>,
    data_dir: Option<PathBuf>,
    http_timeout_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Seed a builder from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Seed a builder from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(Self {
            apod_url: file.apod_url,
            api_key: file.api_key,
            images_url: file.images_url,
            image_query: file.image_query,
            data_dir: file.data_dir,
            http_timeout_secs: file.http_timeout_secs,
            bcrypt_cost: file.bcrypt_cost,
        })
    }

    /// Apply `NASA_API_KEY`, `COSMOS_APOD_URL`, `COSMOS_IMAGES_URL`,
    /// `COSMOS_DATA_DIR` and `COSMOS_HTTP_TIMEOUT_SECS` when set.
    pub fn with_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(key) = std::env::var("NASA_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("COSMOS_APOD_URL") {
            self.apod_url = Some(url);
        }
        if let Ok(url) = std::env::var("COSMOS_IMAGES_URL") {
            self.images_url = Some(url);
        }
        if let Ok(dir) = std::env::var("COSMOS_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(raw) = std::env::var("COSMOS_HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                key: "COSMOS_HTTP_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            self.http_timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Set the APOD endpoint
    pub fn apod_url(mut self, url: impl Into<String>) -> Self {
        self.apod_url = Some(url.into());
        self
    }

    /// Set the api.nasa.gov key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the image-search endpoint
    pub fn images_url(mut self, url: impl Into<String>) -> Self {
        self.images_url = Some(url.into());
        self
    }

    pub fn image_query(mut self, query: ImageSearchQuery) -> Self {
        self.image_query = Some(query);
        self
    }

    /// Set the directory holding the local store
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = Some(secs);
        self
    }

    /// Set the bcrypt cost (tests use [`MIN_BCRYPT_COST`])
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            apod_url: self.apod_url.unwrap_or(defaults.apod_url),
            api_key: self.api_key.unwrap_or(defaults.api_key),
            images_url: self.images_url.unwrap_or(defaults.images_url),
            image_query: self.image_query.unwrap_or(defaults.image_query),
            data_dir: self.data_dir.or(defaults.data_dir),
            http_timeout_secs: self.http_timeout_secs.unwrap_or(defaults.http_timeout_secs),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("bcrypt cost {0} is outside the supported range")]
    InvalidBcryptCost(u32),
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
