//! Price Recommendation Engine - Combines factor scores into a bounded increase.
//!
//! # Stages
//!
//! Stages run in strict order and each consumes the previous stage's output
//! verbatim:
//!
//! 1. **Base increase** - sum of four bounded contributions (stickiness,
//!    value, market, usage trend)
//! 2. **Risk multiplier** - dampens or boosts by churn risk band
//! 3. **Goal adjustment** - applies the account manager's pricing goal
//! 4. **Constraints** - clamps to `[DISCOUNT_FLOOR, contract_cap]`
//!
//! The contract cap outranks the goal. With a negative cap, even the
//! maintain goal ends at the cap rather than at zero.
//!
//! Confidence, reasoning and scenarios are generated from the same
//! [`PricingIntermediates`]; none of them recomputes a factor.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::bands::FactorBands;
use super::benchmarks::BenchmarkTable;
use super::confidence::ConfidenceScorer;
use super::errors::PricingError;
use super::factors::FactorScores;
use super::reasoning::ReasoningGenerator;
use super::recommendation::PriceRecommendation;
use super::scenarios::ScenarioGenerator;
use crate::domain::foundation::Percentage;
use crate::domain::renewal::{
    DataQualityFlags, PricingGoal, PricingStrategyPreferences, RenewalPricingInput,
};

/// Lowest permitted increase (a 5% discount).
pub const DISCOUNT_FLOOR: f64 = -0.05;

/// Fixed increase used by the defensive goal in place of stages 1-3.
///
/// Equal to the floor today; kept as its own constant because the two are
/// distinct rules that happen to coincide.
pub const DEFENSIVE_INCREASE: f64 = -0.05;

/// Stage 1 weight applied to the 0-1 stickiness fraction.
pub const STICKINESS_WEIGHT: f64 = 0.08;

/// Stage-by-stage record of how the final increase was reached.
///
/// All values are fractions (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncreaseBreakdown {
    pub stickiness_contribution: f64,
    pub value_contribution: f64,
    pub market_contribution: f64,
    pub trend_contribution: f64,
    pub base_increase: f64,
    pub risk_multiplier: f64,
    pub risk_adjusted_increase: f64,
    pub goal_adjusted_increase: f64,
    pub final_increase: f64,
    pub contract_cap: f64,
    /// The defensive goal replaced stages 1-3 with a fixed discount.
    pub defensive_override: bool,
}

impl IncreaseBreakdown {
    /// True when the contract cap cut the goal-adjusted increase down.
    pub fn was_capped(&self) -> bool {
        self.goal_adjusted_increase > self.contract_cap
    }

    /// True when the discount floor raised the goal-adjusted increase.
    pub fn was_floored(&self) -> bool {
        self.goal_adjusted_increase < DISCOUNT_FLOOR
    }
}

/// Everything computed before text and scenarios are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingIntermediates {
    pub current_arr: f64,
    pub usage_growth_ratio: f64,
    pub strategy: PricingStrategyPreferences,
    pub data_quality: DataQualityFlags,
    pub factors: FactorScores,
    pub bands: FactorBands,
    pub breakdown: IncreaseBreakdown,
}

/// Orchestrates the full recommendation pipeline.
///
/// Holds only an immutable benchmark table, so one engine can serve
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct PriceRecommendationEngine {
    benchmarks: BenchmarkTable,
}

impl PriceRecommendationEngine {
    /// Creates an engine over the given benchmark table.
    pub fn new(benchmarks: BenchmarkTable) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    /// Produces a complete recommendation.
    ///
    /// # Errors
    /// - `InvalidInput` if any field fails validation
    /// - `InvalidConstraint` if the contract cap is below the discount floor
    pub fn recommend(
        &self,
        input: &RenewalPricingInput,
    ) -> Result<PriceRecommendation, PricingError> {
        let intermediates = self.analyze(input)?;

        let confidence =
            ConfidenceScorer::score(&intermediates.data_quality, intermediates.strategy.pricing_goal);
        let reasoning = ReasoningGenerator::explain(&intermediates);
        let scenarios = ScenarioGenerator::generate(&intermediates);

        let recommendation =
            PriceRecommendation::assemble(&intermediates, confidence, reasoning, scenarios);

        info!(
            current_arr = intermediates.current_arr,
            target_price = recommendation.target_price,
            increase_percent = recommendation.increase_percent,
            confidence = recommendation.confidence_score.value(),
            goal = %intermediates.strategy.pricing_goal,
            "Renewal price recommendation produced"
        );

        Ok(recommendation)
    }

    /// Runs validation, the factor components and the four stages.
    pub fn analyze(&self, input: &RenewalPricingInput) -> Result<PricingIntermediates, PricingError> {
        if let Err(err) = input.validate() {
            warn!(field = err.field(), "Rejected renewal input: {}", err);
            return Err(err.into());
        }
        let cap = input.signals.price_increase_cap;
        check_constraint(cap)?;

        let factors = FactorScores::compute(input, &self.benchmarks)?;
        let bands = factors.bands(input.usage.usage_growth_ratio);

        debug!(
            stickiness = factors.stickiness.score.value(),
            value_index = factors.value_leverage.index,
            value_trend = factors.value_leverage.trend.label(),
            benchmark_ratio = factors.market_position.peer_benchmark_ratio,
            churn_risk = factors.churn_risk.churn_risk_score,
            "Computed factor scores"
        );

        let breakdown = Self::resolve_increase(
            factors.stickiness.score,
            &bands,
            input.strategy.pricing_goal,
            cap,
        )?;

        Ok(PricingIntermediates {
            current_arr: input.context.current_arr,
            usage_growth_ratio: input.usage.usage_growth_ratio,
            strategy: input.strategy,
            data_quality: input.data_quality,
            factors,
            bands,
            breakdown,
        })
    }

    /// Runs the four stages from already-classified factors.
    pub fn resolve_increase(
        stickiness: Percentage,
        bands: &FactorBands,
        goal: PricingGoal,
        contract_cap: f64,
    ) -> Result<IncreaseBreakdown, PricingError> {
        check_constraint(contract_cap)?;

        // Stage 1
        let stickiness_contribution = stickiness.as_fraction() * STICKINESS_WEIGHT;
        let value_contribution = bands.value.contribution();
        let market_contribution = bands.market.contribution();
        let trend_contribution = bands.growth.contribution();
        let base_increase =
            stickiness_contribution + value_contribution + market_contribution + trend_contribution;

        // Stage 2
        let risk_multiplier = bands.risk.multiplier();
        let risk_adjusted_increase = base_increase * risk_multiplier;

        // Stage 3
        let goal_adjusted_increase = match goal {
            PricingGoal::Maintain => 0.0,
            PricingGoal::Modest => risk_adjusted_increase * 0.6,
            PricingGoal::Market => risk_adjusted_increase,
            PricingGoal::Aggressive => risk_adjusted_increase * 1.2,
            PricingGoal::Defensive => DEFENSIVE_INCREASE,
        };

        // Stage 4. A negative cap also binds maintain.
        let final_increase = goal_adjusted_increase.clamp(DISCOUNT_FLOOR, contract_cap);

        debug!(
            base_increase,
            risk_multiplier,
            goal_adjusted_increase,
            final_increase,
            contract_cap,
            goal = %goal,
            "Resolved price increase"
        );

        Ok(IncreaseBreakdown {
            stickiness_contribution,
            value_contribution,
            market_contribution,
            trend_contribution,
            base_increase,
            risk_multiplier,
            risk_adjusted_increase,
            goal_adjusted_increase,
            final_increase,
            contract_cap,
            defensive_override: goal == PricingGoal::Defensive,
        })
    }
}

/// Rejects a cap that leaves no valid increase. NaN is rejected too.
fn check_constraint(contract_cap: f64) -> Result<(), PricingError> {
    if contract_cap >= DISCOUNT_FLOOR {
        return Ok(());
    }
    warn!(contract_cap, floor = DISCOUNT_FLOOR, "Contract cap below discount floor");
    Err(PricingError::InvalidConstraint {
        cap: contract_cap,
        floor: DISCOUNT_FLOOR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::bands::{
        GrowthBand, MarketBand, RiskBand, StickinessBand, ValueBand,
    };
    use crate::domain::renewal::fixtures::baseline_input;

    fn bands(value: f64, ratio: f64, growth: f64, churn: f64) -> FactorBands {
        FactorBands {
            stickiness: StickinessBand::High,
            value: ValueBand::classify(value),
            market: MarketBand::classify(ratio),
            growth: GrowthBand::classify(growth),
            risk: RiskBand::classify(churn),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn strong_account_is_capped_at_contract_limit() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(90),
            &bands(1.8, 0.90, 0.20, 15.0),
            PricingGoal::Market,
            0.10,
        )
        .unwrap();

        assert!(close(b.base_increase, 0.172));
        assert_eq!(b.risk_multiplier, 1.1);
        assert!(close(b.risk_adjusted_increase, 0.1892));
        assert_eq!(b.final_increase, 0.10);
        assert!(b.was_capped());
    }

    #[test]
    fn maintain_goal_forces_zero() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(90),
            &bands(1.8, 0.90, 0.20, 15.0),
            PricingGoal::Maintain,
            0.10,
        )
        .unwrap();
        assert_eq!(b.final_increase, 0.0);
    }

    #[test]
    fn negative_cap_binds_maintain_goal() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(90),
            &bands(1.8, 0.90, 0.20, 15.0),
            PricingGoal::Maintain,
            -0.03,
        )
        .unwrap();
        assert_eq!(b.goal_adjusted_increase, 0.0);
        assert_eq!(b.final_increase, -0.03);
        assert!(b.was_capped());
    }

    #[test]
    fn negative_cap_leaves_defensive_discount_unchanged() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(100),
            &bands(2.0, 0.5, 0.5, 0.0),
            PricingGoal::Defensive,
            -0.02,
        )
        .unwrap();
        assert_eq!(b.goal_adjusted_increase, DEFENSIVE_INCREASE);
        // Already below the cap and at the floor, so it passes unchanged.
        assert_eq!(b.final_increase, -0.05);
        assert!(!b.was_capped());
        assert!(!b.was_floored());
        assert!(b.defensive_override);
    }

    #[test]
    fn modest_and_aggressive_scale_the_risk_adjusted_increase() {
        let modest = PriceRecommendationEngine::resolve_increase(
            Percentage::new(50),
            &bands(1.0, 1.10, 0.0, 30.0),
            PricingGoal::Modest,
            0.20,
        )
        .unwrap();
        // base = 0.04, multiplier 1.0
        assert!(close(modest.final_increase, 0.024));

        let aggressive = PriceRecommendationEngine::resolve_increase(
            Percentage::new(50),
            &bands(1.0, 1.10, 0.0, 30.0),
            PricingGoal::Aggressive,
            0.20,
        )
        .unwrap();
        assert!(close(aggressive.final_increase, 0.048));
    }

    #[test]
    fn defensive_goal_uses_fixed_discount() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(100),
            &bands(2.0, 0.5, 0.5, 0.0),
            PricingGoal::Defensive,
            0.10,
        )
        .unwrap();
        assert_eq!(b.goal_adjusted_increase, DEFENSIVE_INCREASE);
        assert_eq!(b.final_increase, -0.05);
        assert!(b.defensive_override);
        assert!(!b.was_floored());
    }

    #[test]
    fn high_risk_halves_the_increase() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(50),
            &bands(1.3, 0.97, 0.10, 75.0),
            PricingGoal::Market,
            0.10,
        )
        .unwrap();
        // 0.04 + 0.03 + 0.02 + 0.01 = 0.10, halved
        assert!(close(b.final_increase, 0.05));
    }

    #[test]
    fn contracting_usage_can_reach_the_floor() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(0),
            &bands(0.5, 1.2, -0.5, 50.0),
            PricingGoal::Market,
            0.10,
        )
        .unwrap();
        // -0.02 * 0.75
        assert!(close(b.final_increase, -0.015));
    }

    #[test]
    fn cap_below_floor_is_invalid_constraint() {
        let err = PriceRecommendationEngine::resolve_increase(
            Percentage::new(50),
            &bands(1.0, 1.0, 0.0, 30.0),
            PricingGoal::Market,
            -0.10,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidConstraint { .. }));
    }

    #[test]
    fn cap_equal_to_floor_is_allowed() {
        let b = PriceRecommendationEngine::resolve_increase(
            Percentage::new(100),
            &bands(2.0, 0.5, 0.5, 0.0),
            PricingGoal::Market,
            -0.05,
        )
        .unwrap();
        assert_eq!(b.final_increase, -0.05);
    }

    #[test]
    fn recommend_rejects_cap_below_floor() {
        let mut input = baseline_input();
        input.signals.price_increase_cap = -0.10;
        let err = PriceRecommendationEngine::default().recommend(&input).unwrap_err();
        assert!(matches!(err, PricingError::InvalidConstraint { cap, .. } if cap == -0.10));
    }

    #[test]
    fn recommend_rejects_invalid_input_before_constraint() {
        let mut input = baseline_input();
        input.context.current_arr = 0.0;
        input.signals.price_increase_cap = -0.10;
        let err = PriceRecommendationEngine::default().recommend(&input).unwrap_err();
        assert_eq!(err.field(), "current_arr");
    }

    #[test]
    fn analyze_reuses_factor_bands_in_breakdown() {
        let engine = PriceRecommendationEngine::default();
        let intermediates = engine.analyze(&baseline_input()).unwrap();
        assert_eq!(
            intermediates.breakdown.value_contribution,
            intermediates.bands.value.contribution()
        );
        assert_eq!(
            intermediates.breakdown.risk_multiplier,
            intermediates.bands.risk.multiplier()
        );
    }
}
