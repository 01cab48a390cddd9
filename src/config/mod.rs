//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOURISM_ASSIST_` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! development server that logs submitted applications.
//!
//! # Example
//!
//! ```no_run
//! use tourism_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod assistant;
mod error;
mod features;
mod server;
mod submission;
mod wizard;

pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};
pub use submission::{SubmissionConfig, SubmissionMode};
pub use wizard::{WizardConfig, MAX_DELAY_MS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Application wizard (script source, pacing, session cap)
    #[serde(default)]
    pub wizard: WizardConfig,

    /// FAQ assistant (default language, pacing, session cap)
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Where confirmed applications are delivered
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOURISM_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOURISM_ASSIST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOURISM_ASSIST__SUBMISSION__MODE=http` -> `submission.mode = http`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOURISM_ASSIST")
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
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.wizard.validate()?;
        self.assistant.validate()?;
        self.submission.validate(self.is_production())?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
