use std::path::PathBuf;

use crate::egui_app::local_db::LocalStore;
use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, `config.toml`, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self { app: AppConfig::load()? })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Path of the local store file
    pub fn storage_path(&self) -> PathBuf {
        LocalStore::default_path(self.app.data_dir.as_deref())
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.app.bcrypt_cost
    }
}
