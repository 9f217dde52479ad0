//! Fully-resolved renewal inputs consumed by the pricing pipeline.
//!
//! Every field here is explicit. Absent signals are defaulted beforehand by
//! [`intake::resolve`](super::intake::resolve), which also records what was
//! defaulted in [`DataQualityFlags`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{DataQualityFlags, PricingStrategyPreferences};
use crate::domain::foundation::{check, ValidationError};

/// Largest accepted ARR. Keeps every derived price finite.
pub const MAX_CURRENT_ARR: f64 = 1e15;

/// Lowest accepted usage growth: usage cannot shrink by more than all of it.
pub const MIN_USAGE_GROWTH_RATIO: f64 = -1.0;

/// Account facts for the contract being renewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRenewalContext {
    /// Current annual recurring revenue. Must be greater than zero.
    pub current_arr: f64,
    pub seat_count: u32,
    pub industry: String,
    pub region: String,
    pub days_until_renewal: u32,
    pub first_contract_date: NaiveDate,
    /// The date the recommendation is computed for. Tenure is measured up to
    /// this date so the computation never reads the system clock.
    pub evaluation_date: NaiveDate,
}

impl CustomerRenewalContext {
    /// Whole calendar months between the first contract date and the
    /// evaluation date. Zero when the contract starts in the future.
    pub fn tenure_months(&self) -> u32 {
        let start = self.first_contract_date;
        let end = self.evaluation_date;
        if end <= start {
            return 0;
        }

        let mut months = (end.year() - start.year()) * 12 + end.month() as i32
            - start.month() as i32;
        if end.day() < start.day() {
            months -= 1;
        }
        u32::try_from(months.max(0)).unwrap_or(0)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let arr = check::positive("current_arr", self.current_arr)?;
        if arr > MAX_CURRENT_ARR {
            return Err(ValidationError::out_of_range(
                "current_arr",
                0.0,
                MAX_CURRENT_ARR,
                arr,
            ));
        }
        if self.industry.trim().is_empty() {
            return Err(ValidationError::invalid_value("industry", "cannot be empty"));
        }
        Ok(())
    }
}

/// Signals gathered during the renewal discovery conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverySignals {
    /// 1-10
    pub relationship_strength: f64,
    /// 1-10
    pub renewal_confidence: f64,
    /// 1-10
    pub renewal_confidence_at_current_price: f64,
    /// Maximum contractual increase as a fraction (0.10 = 10%).
    pub price_increase_cap: f64,
    /// 0-100
    pub budget_pressure: f64,
    /// 0-100
    pub competitive_threat: f64,
    /// Quantified value delivered, in currency. Zero means "not quantified".
    pub quantified_value: f64,
}

impl DiscoverySignals {
    fn validate(&self) -> Result<(), ValidationError> {
        check::in_range("relationship_strength", self.relationship_strength, 1.0, 10.0)?;
        check::in_range("renewal_confidence", self.renewal_confidence, 1.0, 10.0)?;
        check::in_range(
            "renewal_confidence_at_current_price",
            self.renewal_confidence_at_current_price,
            1.0,
            10.0,
        )?;
        // Range against the discount floor is an engine constraint, not a
        // field check.
        check::finite("price_increase_cap", self.price_increase_cap)?;
        check::in_range("budget_pressure", self.budget_pressure, 0.0, 100.0)?;
        check::in_range("competitive_threat", self.competitive_threat, 0.0, 100.0)?;
        check::non_negative("quantified_value", self.quantified_value)?;
        Ok(())
    }
}

/// Point-in-time product usage measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDataSnapshot {
    /// 0-1
    pub feature_adoption_ratio: f64,
    pub integration_count: u32,
    pub data_volume_tb: f64,
    pub active_users: u32,
    pub customizations_count: u32,
    /// Period-over-period usage change as a fraction; may be negative.
    pub usage_growth_ratio: f64,
    /// 0-100
    pub sentiment_score: f64,
}

impl UsageDataSnapshot {
    fn validate(&self) -> Result<(), ValidationError> {
        check::in_range("feature_adoption_ratio", self.feature_adoption_ratio, 0.0, 1.0)?;
        check::non_negative("data_volume_tb", self.data_volume_tb)?;
        check::finite("usage_growth_ratio", self.usage_growth_ratio)?;
        if self.usage_growth_ratio < MIN_USAGE_GROWTH_RATIO {
            return Err(ValidationError::out_of_range(
                "usage_growth_ratio",
                MIN_USAGE_GROWTH_RATIO,
                f64::MAX,
                self.usage_growth_ratio,
            ));
        }
        check::in_range("sentiment_score", self.sentiment_score, 0.0, 100.0)?;
        Ok(())
    }
}

/// The aggregate input for one recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalPricingInput {
    pub context: CustomerRenewalContext,
    pub signals: DiscoverySignals,
    pub usage: UsageDataSnapshot,
    pub strategy: PricingStrategyPreferences,
    /// Which signal groups hold real data versus placeholder defaults.
    pub data_quality: DataQualityFlags,
}

impl RenewalPricingInput {
    /// Checks every bounded field. Fails on the first invalid field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.context.validate()?;
        self.signals.validate()?;
        self.usage.validate()?;
        Ok(())
    }
}
