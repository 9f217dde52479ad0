//! Pricing configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables and an optional file using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `RENEWAL_PRICING` prefix and nested values
//! use double underscores as separators.
//!
//! Configuration is turned into plain values ([`BenchmarkTable`],
//! [`IntakeDefaults`]) that are passed into the pipeline explicitly. Nothing
//! here is global.
//!
//! # Example
//!
//! ```no_run
//! use renewal_pricing::config::PricingConfig;
//!
//! let config = PricingConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.engine();
//! ```

mod benchmarks;
mod error;
mod telemetry;

pub use benchmarks::{BenchmarkConfig, RegionalBenchmark};
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::pricing::{BenchmarkTable, PriceRecommendationEngine};
use crate::domain::renewal::IntakeDefaults;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RENEWAL_PRICING";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Industry per-seat benchmarks
    #[serde(default)]
    pub benchmarks: BenchmarkConfig,

    /// Placeholders for absent signals
    #[serde(default)]
    pub defaults: IntakeDefaults,
}

impl PricingConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RENEWAL_PRICING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RENEWAL_PRICING__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level`
    /// - `RENEWAL_PRICING__DEFAULTS__SENTIMENT_SCORE=65` -> `defaults.sentiment_score`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::env_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence. The format is inferred from the extension (toml, json,
    /// yaml, ...).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::env_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).separator("__")
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        self.benchmarks.validate()?;
        self.defaults
            .validate()
            .map_err(ValidationError::InvalidDefault)?;
        Ok(())
    }

    /// The benchmark table described by this configuration
    pub fn benchmark_table(&self) -> BenchmarkTable {
        self.benchmarks.to_table()
    }

    /// An engine over this configuration's benchmark table
    pub fn engine(&self) -> PriceRecommendationEngine {
        PriceRecommendationEngine::new(self.benchmark_table())
    }
}
