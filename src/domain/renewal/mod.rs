//! Renewal module - Inputs describing one contract renewal.
//!
//! # Components
//!
//! - `CustomerRenewalContext`, `DiscoverySignals`, `UsageDataSnapshot` - the
//!   explicit, validated inputs
//! - `PricingStrategyPreferences` - closed categorical strategy choices
//! - `DataQualityFlags` - which signal groups are real versus placeholder
//! - `intake` - optional raw signals resolved into a full input

mod context;
mod data_quality;
pub mod intake;
mod macros;
mod strategy;

pub use context::{
    CustomerRenewalContext, DiscoverySignals, RenewalPricingInput, UsageDataSnapshot,
    MAX_CURRENT_ARR, MIN_USAGE_GROWTH_RATIO,
};
pub use data_quality::{DataQuality, DataQualityFlags};
pub use intake::{
    IntakeDefaults, RawDiscoverySignals, RawRenewalInputs, RawStrategyPreferences, RawUsageData,
};
pub use strategy::{
    CompetitivePressure, PricingGoal, PricingStrategyPreferences, RiskTolerance,
    ValuePerceptionChange,
};

#[cfg(test)]
pub(crate) use context::fixtures;
