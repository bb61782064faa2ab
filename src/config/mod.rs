//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SOCRATIC_ARCHITECT` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use socratic_architect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Knowledge TTL: {}h", config.discovery.knowledge_ttl_hours);
//! ```

mod dialogue;
mod discovery;
mod error;
mod features;
mod logging;

pub use dialogue::DialogueConfig;
pub use discovery::DiscoveryConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use features::FeatureFlags;
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::domain::discovery::DiscoverySettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Dialogue configuration (question repetition window)
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Domain discovery configuration (knowledge TTL, thresholds, limits)
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOCRATIC_ARCHITECT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SOCRATIC_ARCHITECT__DISCOVERY__MAX_RECOMMENDATIONS=5` -> `discovery.max_recommendations = 5`
    /// - `SOCRATIC_ARCHITECT__FEATURES__DOMAIN_AWARE_INQUIRY=true` -> `features.domain_aware_inquiry = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOCRATIC_ARCHITECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.dialogue.validate()?;
        self.discovery.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings for the domain discovery engine
    pub fn discovery_settings(&self) -> DiscoverySettings {
        self.discovery.settings(&self.features)
    }
}
