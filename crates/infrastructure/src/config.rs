//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `skylens.toml` (or the file passed to [`AppConfig::load_from`]),
//! then `SKYLENS_*` environment variables such as
//! `SKYLENS_BACKEND__BASE_URL`.

use std::path::Path;

use integration_backend::BackendConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYLENS";

/// Default config file name, without extension
pub const DEFAULT_CONFIG_FILE: &str = "skylens";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather service endpoints
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `skylens.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file and the environment
    ///
    /// Unlike [`AppConfig::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., SKYLENS_BACKEND__BASE_URL)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Override the backend base URL, e.g. from a CLI flag
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.backend.base_url = url;
        }
        self
    }
}
