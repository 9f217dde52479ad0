//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as FieldError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log filter directive '{0}'")]
    InvalidLogFilter(String),

    #[error("Invalid benchmark: {0}")]
    InvalidBenchmark(FieldError),

    #[error("Invalid intake default: {0}")]
    InvalidDefault(FieldError),
}
