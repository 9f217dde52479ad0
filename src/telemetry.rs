//! Tracing subscriber setup for hosts embedding the engine.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the caller. This helper wires one up from [`TelemetryConfig`].

use thiserror::Error;

use crate::config::{TelemetryConfig, ValidationError};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error(transparent)]
    InvalidFilter(#[from] ValidationError),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// Fails if the filter is malformed or a subscriber was already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|_| TelemetryError::AlreadyInitialized)
}
