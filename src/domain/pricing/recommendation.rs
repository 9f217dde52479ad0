//! Recommendation output and the fraction-to-percent boundary.
//!
//! Everything upstream of [`PriceRecommendation::assemble`] works in
//! fractions. This is the only place output fields are converted to percent
//! units and currency amounts are rounded.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::{IncreaseBreakdown, PricingIntermediates};
use super::factors::FactorScores;
use super::scenarios::ScenarioDraft;
use crate::domain::foundation::units::{round_currency, to_percent};
use crate::domain::foundation::Percentage;

/// Scenario names, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioLabel {
    Conservative,
    Recommended,
    Aggressive,
}

impl ScenarioLabel {
    /// Position in the scenarios array.
    pub fn index(&self) -> usize {
        match self {
            ScenarioLabel::Conservative => 0,
            ScenarioLabel::Recommended => 1,
            ScenarioLabel::Aggressive => 2,
        }
    }
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScenarioLabel::Conservative => "Conservative",
            ScenarioLabel::Recommended => "Recommended",
            ScenarioLabel::Aggressive => "Aggressive",
        };
        write!(f, "{}", s)
    }
}

/// One negotiation option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingScenario {
    pub label: ScenarioLabel,
    pub target_price: f64,
    /// Percent units (7.5 means 7.5%).
    pub increase_percent: f64,
    pub acceptance_probability: Percentage,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// The recommendation handed back to the caller.
///
/// Produced once and never mutated; a changed input means a new
/// recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecommendation {
    pub target_price: f64,
    pub increase_amount: f64,
    /// Percent units (7.5 means 7.5%).
    pub increase_percent: f64,
    pub confidence_score: Percentage,
    pub reasoning: Vec<String>,
    /// Always Conservative, Recommended, Aggressive.
    pub scenarios: [PricingScenario; 3],
    /// Factor results, for audit.
    pub factors: FactorScores,
    /// Stage-by-stage increase, in fractions, for audit.
    pub breakdown: IncreaseBreakdown,
}

/// Applies an increase fraction to the current ARR and rounds to whole units.
pub fn price_at(current_arr: f64, increase: f64) -> f64 {
    round_currency(current_arr * (1.0 + increase))
}

impl PriceRecommendation {
    /// Converts pipeline results into output units.
    pub fn assemble(
        intermediates: &PricingIntermediates,
        confidence_score: Percentage,
        reasoning: Vec<String>,
        scenarios: [ScenarioDraft; 3],
    ) -> Self {
        let current_arr = intermediates.current_arr;
        let final_increase = intermediates.breakdown.final_increase;
        let target_price = price_at(current_arr, final_increase);

        Self {
            target_price,
            increase_amount: target_price - current_arr,
            increase_percent: to_percent(final_increase),
            confidence_score,
            reasoning,
            scenarios: scenarios.map(|draft| PricingScenario {
                label: draft.label,
                target_price: price_at(current_arr, draft.increase),
                increase_percent: to_percent(draft.increase),
                acceptance_probability: draft.acceptance_probability,
                pros: draft.pros,
                cons: draft.cons,
            }),
            factors: intermediates.factors,
            breakdown: intermediates.breakdown,
        }
    }

    /// Looks up a scenario by label.
    pub fn scenario(&self, label: ScenarioLabel) -> &PricingScenario {
        &self.scenarios[label.index()]
    }

    /// The final increase as a fraction.
    pub fn final_increase(&self) -> f64 {
        self.breakdown.final_increase
    }
}
