//! Scenario Generator - Conservative, Recommended and Aggressive options.

use super::bands::{RiskBand, StickinessBand};
use super::engine::{PricingIntermediates, DISCOUNT_FLOOR};
use super::recommendation::ScenarioLabel;
use crate::domain::foundation::Percentage;

pub const CONSERVATIVE_FACTOR: f64 = 0.5;
pub const AGGRESSIVE_FACTOR: f64 = 1.2;

pub const CONSERVATIVE_ACCEPTANCE: Percentage = Percentage::new(95);
pub const RECOMMENDED_ACCEPTANCE: Percentage = Percentage::new(85);
pub const AGGRESSIVE_ACCEPTANCE: Percentage = Percentage::new(65);

/// A scenario in fractional units, before output conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDraft {
    pub label: ScenarioLabel,
    pub increase: f64,
    pub acceptance_probability: Percentage,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Generator for negotiation scenarios.
pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// Builds the three scenarios around the engine's final increase.
    ///
    /// Ordering `conservative <= recommended <= aggressive` holds for every
    /// input. When the recommendation is a discount, halving it would make
    /// the conservative option *more* expensive than recommended, so both
    /// alternatives are bounded by the recommended increase and by
    /// `[DISCOUNT_FLOOR, contract_cap]`.
    pub fn generate(intermediates: &PricingIntermediates) -> [ScenarioDraft; 3] {
        let recommended = intermediates.breakdown.final_increase;
        let cap = intermediates.breakdown.contract_cap;

        let conservative = (recommended * CONSERVATIVE_FACTOR)
            .min(recommended)
            .max(DISCOUNT_FLOOR)
            .min(cap);
        let aggressive = (recommended * AGGRESSIVE_FACTOR)
            .min(cap)
            .max(recommended);

        [
            ScenarioDraft {
                label: ScenarioLabel::Conservative,
                increase: conservative,
                acceptance_probability: CONSERVATIVE_ACCEPTANCE,
                pros: Self::conservative_pros(intermediates),
                cons: Self::conservative_cons(intermediates),
            },
            ScenarioDraft {
                label: ScenarioLabel::Recommended,
                increase: recommended,
                acceptance_probability: RECOMMENDED_ACCEPTANCE,
                pros: Self::recommended_pros(intermediates),
                cons: Self::recommended_cons(intermediates),
            },
            ScenarioDraft {
                label: ScenarioLabel::Aggressive,
                increase: aggressive,
                acceptance_probability: AGGRESSIVE_ACCEPTANCE,
                pros: Self::aggressive_pros(intermediates),
                cons: Self::aggressive_cons(intermediates, aggressive),
            },
        ]
    }

    fn conservative_pros(i: &PricingIntermediates) -> Vec<String> {
        let mut pros = vec!["Highest likelihood of acceptance".to_string()];
        if i.bands.risk.is_concerning() {
            pros.push("Protects a relationship showing elevated churn risk".to_string());
        }
        pros
    }

    fn conservative_cons(i: &PricingIntermediates) -> Vec<String> {
        let mut cons = Vec::new();
        if i.bands.value.is_strong() {
            cons.push("Leaves value capture on the table given strong delivered value".to_string());
        }
        if i.bands.market.is_below_market() {
            cons.push("Keeps pricing below the market benchmark".to_string());
        }
        if cons.is_empty() {
            cons.push("Lower revenue growth than the recommended option".to_string());
        }
        cons
    }

    fn recommended_pros(i: &PricingIntermediates) -> Vec<String> {
        let mut pros = vec!["Balances revenue growth with retention risk".to_string()];
        if i.bands.stickiness == StickinessBand::High {
            pros.push("Supported by high switching costs".to_string());
        }
        if i.bands.value.is_strong() {
            pros.push("Backed by a strong value story".to_string());
        }
        pros
    }

    fn recommended_cons(i: &PricingIntermediates) -> Vec<String> {
        let mut cons = Vec::new();
        if i.bands.risk.is_concerning() {
            cons.push("Requires a clear value narrative given elevated churn risk".to_string());
        }
        if i.breakdown.was_capped() {
            cons.push("Already uses the full contract cap".to_string());
        }
        cons
    }

    fn aggressive_pros(i: &PricingIntermediates) -> Vec<String> {
        let mut pros = vec!["Maximizes revenue capture".to_string()];
        if i.bands.value.is_strong() {
            pros.push("Justified by strong value leverage".to_string());
        }
        if i.bands.market.is_below_market() {
            pros.push("Moves pricing toward the market benchmark".to_string());
        }
        pros
    }

    fn aggressive_cons(i: &PricingIntermediates, aggressive: f64) -> Vec<String> {
        let mut cons = vec!["Lower probability of acceptance".to_string()];
        match i.bands.risk {
            RiskBand::High | RiskBand::Elevated => {
                cons.push("Meaningful churn exposure at the current risk level".to_string());
            }
            RiskBand::Moderate | RiskBand::Low => {}
        }
        if aggressive >= i.breakdown.contract_cap {
            cons.push("Limited by the contract cap".to_string());
        }
        cons
    }
}
