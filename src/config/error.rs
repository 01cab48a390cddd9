//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host or port")]
    InvalidAddress,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Delay out of range: {0}")]
    InvalidDelay(&'static str),

    #[error("Session limit must be positive: {0}")]
    InvalidSessionLimit(&'static str),

    #[error("Idle timeout must be positive: {0}")]
    InvalidIdleTimeout(&'static str),

    #[error("Submission endpoint must be an http(s) URL")]
    InvalidEndpoint,

    #[error("Submission endpoint must use HTTPS in production")]
    EndpointMustBeHttps,
}
