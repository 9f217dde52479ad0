//! Intake: turn partially-known signals into a fully explicit input.
//!
//! The scoring components never default anything themselves. Callers hand
//! whatever they collected to [`resolve`], which substitutes placeholder
//! values for absent signals and records each substitution in
//! [`DataQualityFlags`] so the confidence score can reflect it.
//!
//! Absent is not the same as invalid: a missing `sentiment_score` is
//! defaulted, a `sentiment_score` of `NaN` is rejected by validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    CompetitivePressure, CustomerRenewalContext, DataQuality, DataQualityFlags,
    DiscoverySignals, PricingGoal, PricingStrategyPreferences, RenewalPricingInput,
    RiskTolerance, UsageDataSnapshot, ValuePerceptionChange,
};
use crate::domain::foundation::{check, ValidationError};
use crate::domain::pricing::DISCOUNT_FLOOR;

/// Placeholder values substituted for absent signals.
///
/// The relationship, budget, threat and sentiment defaults sit at the
/// neutral points of the churn-risk formula, so a placeholder never moves
/// risk on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeDefaults {
    pub relationship_strength: f64,
    pub renewal_confidence: f64,
    pub renewal_confidence_at_current_price: f64,
    pub price_increase_cap: f64,
    pub budget_pressure: f64,
    pub competitive_threat: f64,
    pub quantified_value: f64,
    pub feature_adoption_ratio: f64,
    /// Share of seats assumed active when `active_users` is unknown.
    pub engagement_ratio: f64,
    pub usage_growth_ratio: f64,
    pub sentiment_score: f64,
}

impl Default for IntakeDefaults {
    fn default() -> Self {
        Self {
            relationship_strength: 5.0,
            renewal_confidence: 5.0,
            renewal_confidence_at_current_price: 5.0,
            price_increase_cap: 0.10,
            budget_pressure: 50.0,
            competitive_threat: 30.0,
            quantified_value: 0.0,
            feature_adoption_ratio: 0.5,
            engagement_ratio: 0.5,
            usage_growth_ratio: 0.0,
            sentiment_score: 70.0,
        }
    }
}

impl IntakeDefaults {
    /// Placeholders must themselves be valid inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check::in_range("defaults.relationship_strength", self.relationship_strength, 1.0, 10.0)?;
        check::in_range("defaults.renewal_confidence", self.renewal_confidence, 1.0, 10.0)?;
        check::in_range(
            "defaults.renewal_confidence_at_current_price",
            self.renewal_confidence_at_current_price,
            1.0,
            10.0,
        )?;
        let cap = check::finite("defaults.price_increase_cap", self.price_increase_cap)?;
        if cap < DISCOUNT_FLOOR {
            return Err(ValidationError::out_of_range(
                "defaults.price_increase_cap",
                DISCOUNT_FLOOR,
                f64::MAX,
                cap,
            ));
        }
        check::in_range("defaults.budget_pressure", self.budget_pressure, 0.0, 100.0)?;
        check::in_range("defaults.competitive_threat", self.competitive_threat, 0.0, 100.0)?;
        check::non_negative("defaults.quantified_value", self.quantified_value)?;
        check::in_range("defaults.feature_adoption_ratio", self.feature_adoption_ratio, 0.0, 1.0)?;
        check::in_range("defaults.engagement_ratio", self.engagement_ratio, 0.0, 1.0)?;
        check::finite("defaults.usage_growth_ratio", self.usage_growth_ratio)?;
        check::in_range("defaults.sentiment_score", self.sentiment_score, 0.0, 100.0)?;
        Ok(())
    }
}

/// Discovery signals as collected; any of them may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDiscoverySignals {
    pub relationship_strength: Option<f64>,
    pub renewal_confidence: Option<f64>,
    pub renewal_confidence_at_current_price: Option<f64>,
    pub price_increase_cap: Option<f64>,
    pub budget_pressure: Option<f64>,
    pub competitive_threat: Option<f64>,
    pub quantified_value: Option<f64>,
}

/// Usage data as collected; any of it may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawUsageData {
    pub feature_adoption_ratio: Option<f64>,
    pub integration_count: Option<u32>,
    pub data_volume_tb: Option<f64>,
    pub active_users: Option<u32>,
    pub customizations_count: Option<u32>,
    pub usage_growth_ratio: Option<f64>,
    pub sentiment_score: Option<f64>,
}

/// Strategy choices as submitted, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStrategyPreferences {
    pub pricing_goal: Option<String>,
    pub risk_tolerance: Option<String>,
    pub competitive_pressure: Option<String>,
    pub value_perception_change: Option<String>,
}

/// Everything the caller knows about a renewal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRenewalInputs {
    pub context: CustomerRenewalContext,
    #[serde(default)]
    pub signals: RawDiscoverySignals,
    #[serde(default)]
    pub usage: RawUsageData,
    #[serde(default)]
    pub strategy: RawStrategyPreferences,
}

/// Counts supplied fields in a group.
fn present(fields: &[bool]) -> DataQuality {
    let supplied = fields.iter().filter(|p| **p).count();
    DataQuality::from_presence(supplied, fields.len())
}

fn parse_or_default<T>(raw: Option<&str>) -> Result<T, ValidationError>
where
    T: std::str::FromStr<Err = ValidationError> + Default,
{
    match raw {
        Some(s) => s.parse(),
        None => Ok(T::default()),
    }
}

/// Fills absent signals with placeholders and grades data quality.
///
/// Fails on unrecognized strategy strings and on any field that is present
/// but invalid.
pub fn resolve(
    raw: &RawRenewalInputs,
    defaults: &IntakeDefaults,
) -> Result<RenewalPricingInput, ValidationError> {
    let s = &raw.signals;
    let u = &raw.usage;
    let st = &raw.strategy;

    let strategy = PricingStrategyPreferences {
        pricing_goal: parse_or_default::<PricingGoal>(st.pricing_goal.as_deref())?,
        risk_tolerance: parse_or_default::<RiskTolerance>(st.risk_tolerance.as_deref())?,
        competitive_pressure: parse_or_default::<CompetitivePressure>(
            st.competitive_pressure.as_deref(),
        )?,
        value_perception_change: parse_or_default::<ValuePerceptionChange>(
            st.value_perception_change.as_deref(),
        )?,
    };

    let data_quality = DataQualityFlags {
        usage: present(&[
            u.feature_adoption_ratio.is_some(),
            u.integration_count.is_some(),
            u.data_volume_tb.is_some(),
            u.active_users.is_some(),
            u.customizations_count.is_some(),
            u.usage_growth_ratio.is_some(),
        ]),
        financial: present(&[s.quantified_value.is_some(), s.price_increase_cap.is_some()]),
        sentiment: present(&[u.sentiment_score.is_some()]),
        competitive: present(&[
            s.competitive_threat.is_some(),
            st.competitive_pressure.is_some(),
        ]),
        relationship_risk: present(&[
            s.relationship_strength.is_some(),
            s.renewal_confidence.is_some(),
            s.renewal_confidence_at_current_price.is_some(),
            s.budget_pressure.is_some(),
        ]),
    };

    let seats = raw.context.seat_count;
    let default_active_users = (f64::from(seats) * defaults.engagement_ratio).round() as u32;

    let input = RenewalPricingInput {
        context: raw.context.clone(),
        signals: DiscoverySignals {
            relationship_strength: s
                .relationship_strength
                .unwrap_or(defaults.relationship_strength),
            renewal_confidence: s.renewal_confidence.unwrap_or(defaults.renewal_confidence),
            renewal_confidence_at_current_price: s
                .renewal_confidence_at_current_price
                .unwrap_or(defaults.renewal_confidence_at_current_price),
            price_increase_cap: s.price_increase_cap.unwrap_or(defaults.price_increase_cap),
            budget_pressure: s.budget_pressure.unwrap_or(defaults.budget_pressure),
            competitive_threat: s.competitive_threat.unwrap_or(defaults.competitive_threat),
            quantified_value: s.quantified_value.unwrap_or(defaults.quantified_value),
        },
        usage: UsageDataSnapshot {
            feature_adoption_ratio: u
                .feature_adoption_ratio
                .unwrap_or(defaults.feature_adoption_ratio),
            integration_count: u.integration_count.unwrap_or(0),
            data_volume_tb: u.data_volume_tb.unwrap_or(0.0),
            active_users: u.active_users.unwrap_or(default_active_users),
            customizations_count: u.customizations_count.unwrap_or(0),
            usage_growth_ratio: u.usage_growth_ratio.unwrap_or(defaults.usage_growth_ratio),
            sentiment_score: u.sentiment_score.unwrap_or(defaults.sentiment_score),
        },
        strategy,
        data_quality,
    };

    input.validate()?;

    debug!(
        complete_indicators = data_quality.complete_count(),
        usage = ?data_quality.usage,
        financial = ?data_quality.financial,
        sentiment = ?data_quality.sentiment,
        competitive = ?data_quality.competitive,
        relationship_risk = ?data_quality.relationship_risk,
        "Resolved renewal inputs"
    );

    Ok(input)
}
