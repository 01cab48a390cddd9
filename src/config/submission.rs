//! Application submission configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where confirmed applications go.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// Write to the service log
    #[default]
    Log,
    /// POST to an intake endpoint
    Http,
}

/// Submission configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub mode: SubmissionMode,

    /// Intake endpoint, required in `http` mode
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bearer token sent to the intake endpoint
    pub bearer_token: Option<SecretString>,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate submission configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.mode == SubmissionMode::Http {
            let endpoint = self
                .endpoint
                .as_deref()
                .ok_or(ValidationError::MissingRequired("submission.endpoint"))?;
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidEndpoint);
            }
            if production && !endpoint.starts_with("https://") {
                return Err(ValidationError::EndpointMustBeHttps);
            }
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::default(),
            endpoint: None,
            timeout_secs: default_timeout(),
            bearer_token: None,
        }
    }
}

fn default_timeout() -> u64 {
    10
}
