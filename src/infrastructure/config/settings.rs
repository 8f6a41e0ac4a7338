//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! field has a default matching the deployed function, so a missing file is
//! not an error for [`Config::load_or_default`].
//!
//! # Example
//!
//! ```no_run
//! use bedrock_codegen::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::inference::InferenceConfig;
use super::logging::LoggingConfig;
use super::response::ResponseMode;
use super::storage::StorageConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model, region, transport and decoding settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Bucket and key naming for generated code.
    #[serde(default)]
    pub storage: StorageConfig,

    /// How outcomes map to HTTP responses.
    ///
    /// Defaults to [`ResponseMode::Structured`].
    #[serde(default)]
    pub response_mode: ResponseMode,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let inference = &self.inference;
        if inference.model_id.is_empty() {
            return Err(ConfigError::MissingField { field: "model_id" }.into());
        }
        if inference.region.is_empty() {
            return Err(ConfigError::MissingField { field: "region" }.into());
        }
        if inference.read_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "read_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let decoding = &inference.decoding;
        if decoding.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&decoding.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }
        if decoding.top_p.is_nan() || decoding.top_p <= 0.0 || decoding.top_p > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "top_p",
                reason: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }
        if decoding.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_k",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.storage.bucket.is_empty() {
            return Err(ConfigError::MissingField { field: "bucket" }.into());
        }

        Ok(())
    }
}
