//! Reasoning Generator - Ordered justification for the recommendation.
//!
//! Output order is fixed: stickiness, value, usage trend, market position,
//! risk, contract cap. Structural factors come first and situational ones
//! last; callers may rely on the position of each sentence.

use super::bands::{GrowthBand, MarketBand, RiskBand, StickinessBand, ValueBand};
use super::engine::{PricingIntermediates, DISCOUNT_FLOOR};
use super::market_position::CompetitivePosition;
use crate::domain::foundation::units::{format_currency, format_percent};
use crate::domain::renewal::PricingGoal;

/// Number of sentences produced for every recommendation.
pub const REASONING_LINES: usize = 6;

/// Generator for template-based reasoning.
pub struct ReasoningGenerator;

impl ReasoningGenerator {
    /// Builds the reasoning list from bands computed upstream.
    pub fn explain(intermediates: &PricingIntermediates) -> Vec<String> {
        vec![
            Self::stickiness(intermediates),
            Self::value(intermediates),
            Self::usage_trend(intermediates),
            Self::market_position(intermediates),
            Self::risk(intermediates),
            Self::contract_cap(intermediates),
        ]
    }

    fn stickiness(i: &PricingIntermediates) -> String {
        let score = i.factors.stickiness.score.value();
        match i.bands.stickiness {
            StickinessBand::High => format!(
                "High product stickiness (score {}/100) creates significant switching costs that support a price increase.",
                score
            ),
            StickinessBand::Moderate => format!(
                "Moderate product stickiness (score {}/100) provides some switching-cost protection.",
                score
            ),
            StickinessBand::Low => format!(
                "Low product stickiness (score {}/100) limits pricing leverage; switching would be easy for this customer.",
                score
            ),
        }
    }

    fn value(i: &PricingIntermediates) -> String {
        let leverage = &i.factors.value_leverage;
        if !leverage.quantified {
            return "Delivered value has not been quantified, so value is assumed to match price and no value uplift is applied."
                .to_string();
        }
        match i.bands.value {
            ValueBand::Exceptional => format!(
                "Customer realizes {:.1}x value relative to price, strong leverage for an increase.",
                leverage.index
            ),
            ValueBand::Strong => format!(
                "Customer realizes {:.1}x value relative to price, supporting a moderate increase.",
                leverage.index
            ),
            ValueBand::Positive => format!(
                "Customer realizes {:.2}x value relative to price, a slight premium over cost.",
                leverage.index
            ),
            ValueBand::AtOrBelowPrice => format!(
                "Quantified value ({:.2}x price) does not exceed what the customer pays; the value story needs reinforcement.",
                leverage.index
            ),
        }
    }

    fn usage_trend(i: &PricingIntermediates) -> String {
        let trend = i.factors.value_leverage.trend.label();
        match i.bands.growth {
            GrowthBand::Strong => format!(
                "Usage grew {} period over period, a strong expansion signal (value trend: {}).",
                format_percent(i.usage_growth_ratio),
                trend
            ),
            GrowthBand::Growing => format!(
                "Usage grew {}, indicating healthy adoption (value trend: {}).",
                format_percent(i.usage_growth_ratio),
                trend
            ),
            GrowthBand::Flat => format!(
                "Usage is steady ({} change) (value trend: {}).",
                format_percent(i.usage_growth_ratio),
                trend
            ),
            GrowthBand::Contracting => format!(
                "Usage declined {}, which reduces the supportable increase (value trend: {}).",
                format_percent(i.usage_growth_ratio.abs()),
                trend
            ),
        }
    }

    fn market_position(i: &PricingIntermediates) -> String {
        let market = &i.factors.market_position;
        let position = match market.competitive_position {
            CompetitivePosition::Stronger => "stronger than",
            CompetitivePosition::Same => "on par with",
            CompetitivePosition::Weaker => "weaker than",
        };

        if !market.has_seat_data {
            return format!(
                "No seat-level data is available, so price is assumed to match the industry average ({} per seat). Competitive position is {} alternatives.",
                format_currency(market.industry_average),
                position
            );
        }

        let comparison = match i.bands.market {
            MarketBand::WellBelow => "well below the industry average, leaving clear room to move toward market",
            MarketBand::SlightlyBelow => "slightly below the industry average",
            MarketBand::AtMarket => "in line with the industry average",
            MarketBand::Above => "above the industry average; further increases need a strong value case",
        };

        format!(
            "Price per seat ({}) is {} of the benchmark ({}), {}. Competitive position is {} alternatives.",
            format_currency(market.price_per_seat),
            format_percent(market.peer_benchmark_ratio),
            format_currency(market.industry_average),
            comparison,
            position
        )
    }

    fn risk(i: &PricingIntermediates) -> String {
        let churn = i.factors.churn_risk.churn_risk_score;
        let multiplier = i.breakdown.risk_multiplier;
        match i.bands.risk {
            RiskBand::High => format!(
                "High churn risk ({:.0}/100) cuts the increase by {} to protect the renewal.",
                churn,
                format_percent(1.0 - multiplier)
            ),
            RiskBand::Elevated => format!(
                "Elevated churn risk ({:.0}/100) reduces the increase by {}.",
                churn,
                format_percent(1.0 - multiplier)
            ),
            RiskBand::Moderate => format!(
                "Moderate churn risk ({:.0}/100) leaves the increase unadjusted.",
                churn
            ),
            RiskBand::Low => format!(
                "Low churn risk ({:.0}/100) supports a {} uplift on the base increase.",
                churn,
                format_percent(multiplier - 1.0)
            ),
        }
    }

    fn contract_cap(i: &PricingIntermediates) -> String {
        let b = &i.breakdown;
        if b.was_capped() {
            format!(
                "The increase is limited to the contract cap of {} (uncapped: {}).",
                format_percent(b.contract_cap),
                format_percent(b.goal_adjusted_increase)
            )
        } else if b.was_floored() {
            format!(
                "The adjustment is held at the discount floor of {}.",
                format_percent(DISCOUNT_FLOOR)
            )
        } else {
            match i.strategy.pricing_goal {
                PricingGoal::Maintain => format!(
                    "Maintain strategy holds price flat, within the contract cap of {}.",
                    format_percent(b.contract_cap)
                ),
                PricingGoal::Defensive => format!(
                    "Defensive strategy applies a fixed {} adjustment, within the contract cap of {}.",
                    format_percent(b.final_increase),
                    format_percent(b.contract_cap)
                ),
                PricingGoal::Modest | PricingGoal::Market | PricingGoal::Aggressive => format!(
                    "Recommended increase of {} is within the contract cap of {}.",
                    format_percent(b.final_increase),
                    format_percent(b.contract_cap)
                ),
            }
        }
    }
}
