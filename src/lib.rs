//! Renewal Pricing - Contract renewal price recommendations
//!
//! This crate turns a customer's renewal context, discovery signals and usage
//! data into a target price with a confidence score, ordered reasoning and
//! three alternative scenarios. The pipeline is deterministic: the same input
//! always yields the same recommendation.
//!
//! # Example
//!
//! ```no_run
//! use renewal_pricing::config::PricingConfig;
//! use renewal_pricing::domain::renewal::{intake, RawRenewalInputs};
//!
//! # fn run(raw: RawRenewalInputs) -> Result<(), Box<dyn std::error::Error>> {
//! let config = PricingConfig::load()?;
//! config.validate()?;
//!
//! let input = intake::resolve(&raw, &config.defaults)?;
//! let recommendation = config.engine().recommend(&input)?;
//! println!("{}", recommendation.target_price);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;

pub use domain::pricing::{PriceRecommendation, PriceRecommendationEngine, PricingError};
pub use domain::renewal::RenewalPricingInput;
