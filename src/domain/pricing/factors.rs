//! Factor scores: the four independent component results.

use serde::{Deserialize, Serialize};

use super::bands::{FactorBands, GrowthBand, MarketBand, RiskBand, StickinessBand, ValueBand};
use super::benchmarks::BenchmarkTable;
use super::market_position::{MarketPosition, MarketPositionAnalyzer};
use super::risk::{ChurnRisk, RiskAssessor, RiskInputs};
use super::stickiness::{StickinessInputs, StickinessScore, StickinessScorer};
use super::value_leverage::{ValueLeverage, ValueLeverageAnalyzer};
use crate::domain::foundation::ValidationError;
use crate::domain::renewal::RenewalPricingInput;

/// Intermediate results of the four factor components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub stickiness: StickinessScore,
    pub value_leverage: ValueLeverage,
    pub market_position: MarketPosition,
    pub churn_risk: ChurnRisk,
}

impl FactorScores {
    /// Runs the four components over a validated input.
    ///
    /// The components are independent of each other; none reads another's
    /// output.
    pub fn compute(
        input: &RenewalPricingInput,
        benchmarks: &BenchmarkTable,
    ) -> Result<Self, ValidationError> {
        let ctx = &input.context;
        let signals = &input.signals;
        let usage = &input.usage;
        let strategy = &input.strategy;

        let stickiness = StickinessScorer::score(&StickinessInputs {
            feature_adoption_ratio: usage.feature_adoption_ratio,
            integration_count: usage.integration_count,
            data_volume_tb: usage.data_volume_tb,
            active_users: usage.active_users,
            seat_count: ctx.seat_count,
            customizations_count: usage.customizations_count,
            tenure_months: ctx.tenure_months(),
        });

        let value_leverage = ValueLeverageAnalyzer::analyze(
            ctx.current_arr,
            signals.quantified_value,
            usage.usage_growth_ratio,
            strategy.value_perception_change,
        )?;

        let market_position = MarketPositionAnalyzer::analyze(
            ctx.current_arr,
            ctx.seat_count,
            &ctx.industry,
            &ctx.region,
            strategy.competitive_pressure,
            benchmarks,
        )?;

        let churn_risk = RiskAssessor::assess(&RiskInputs {
            relationship_strength: signals.relationship_strength,
            renewal_confidence: signals.renewal_confidence,
            renewal_confidence_at_current_price: signals.renewal_confidence_at_current_price,
            budget_pressure: signals.budget_pressure,
            competitive_threat: signals.competitive_threat,
            sentiment_score: usage.sentiment_score,
            risk_tolerance: strategy.risk_tolerance,
        });

        Ok(Self {
            stickiness,
            value_leverage,
            market_position,
            churn_risk,
        })
    }

    /// Classifies every factor into its threshold band.
    pub fn bands(&self, usage_growth_ratio: f64) -> FactorBands {
        FactorBands {
            stickiness: StickinessBand::classify(self.stickiness.score.value()),
            value: ValueBand::classify(self.value_leverage.index),
            market: MarketBand::classify(self.market_position.peer_benchmark_ratio),
            growth: GrowthBand::classify(usage_growth_ratio),
            risk: RiskBand::classify(self.churn_risk.churn_risk_score),
        }
    }
}
