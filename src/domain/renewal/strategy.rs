//! Pricing strategy preferences selected by the account manager.

use serde::{Deserialize, Serialize};

use super::macros::categorical_enum;

categorical_enum! {
    /// The renewal strategy intent.
    pub enum PricingGoal, field = "pricing_goal" {
        /// Hold price flat.
        Maintain => "maintain",
        /// Take a reduced share of the computed increase.
        Modest => "modest",
        /// Price at the computed increase.
        Market => "market",
        /// Push beyond the computed increase.
        Aggressive => "aggressive",
        /// Offer the maximum discount to protect the account.
        Defensive => "defensive",
    }
}

impl Default for PricingGoal {
    fn default() -> Self {
        PricingGoal::Market
    }
}

categorical_enum! {
    /// How much churn risk the account manager will accept.
    ///
    /// Carried through the pipeline untouched; no stage consumes it yet.
    pub enum RiskTolerance, field = "risk_tolerance" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        RiskTolerance::Medium
    }
}

categorical_enum! {
    /// Competitive pressure observed in the account.
    pub enum CompetitivePressure, field = "competitive_pressure" {
        None => "none",
        Medium => "medium",
        High => "high",
    }
}

impl Default for CompetitivePressure {
    fn default() -> Self {
        CompetitivePressure::Medium
    }
}

categorical_enum! {
    /// Change in how the customer perceives delivered value.
    pub enum ValuePerceptionChange, field = "value_perception_change" {
        Declined => "declined",
        Neutral => "neutral",
        Improved => "improved",
        SignificantlyImproved => "significantly_improved",
    }
}

impl Default for ValuePerceptionChange {
    fn default() -> Self {
        ValuePerceptionChange::Neutral
    }
}

/// The account manager's strategy choices for this renewal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingStrategyPreferences {
    pub pricing_goal: PricingGoal,
    pub risk_tolerance: RiskTolerance,
    pub competitive_pressure: CompetitivePressure,
    pub value_perception_change: ValuePerceptionChange,
}
