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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("ai.timeout_secs must be shorter than server.request_timeout_secs")]
    CompletionTimeoutTooLong,

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,
}
