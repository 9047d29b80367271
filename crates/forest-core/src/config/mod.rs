//! Application configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate
//! and overlaid with `FOREST__`-prefixed environment variables. Every field
//! has a default, so a missing file still yields a usable configuration.

pub mod dataset;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Folder dataset settings.
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values from environment variables such as
    /// `FOREST__LOGGING__LEVEL=debug` take precedence over the file.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(Path::new(path)).required(false))
            .add_source(
                config::Environment::with_prefix("FOREST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
