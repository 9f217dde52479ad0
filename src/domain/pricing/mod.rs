//! Pricing Module - The renewal price recommendation pipeline.
//!
//! # Components
//!
//! - `StickinessScorer` - Switching-cost score from usage (0-100)
//! - `ValueLeverageAnalyzer` - Quantified value / ARR, with trend
//! - `MarketPositionAnalyzer` - Price per seat against the benchmark table
//! - `RiskAssessor` - Churn risk from relationship and account signals
//! - `PriceRecommendationEngine` - Four-stage increase resolution
//! - `ConfidenceScorer` - Data completeness and strategy alignment
//! - `ReasoningGenerator` - Ordered justification sentences
//! - `ScenarioGenerator` - Conservative / Recommended / Aggressive options
//!
//! # Design Philosophy
//!
//! Every component is a pure function over explicit inputs. The engine holds
//! only an immutable benchmark table, so independent recommendations can be
//! computed in parallel without locking.

mod bands;
mod benchmarks;
mod confidence;
mod engine;
mod errors;
mod factors;
mod market_position;
mod reasoning;
mod recommendation;
mod risk;
mod scenarios;
mod stickiness;
mod value_leverage;

pub use bands::{FactorBands, GrowthBand, MarketBand, RiskBand, StickinessBand, ValueBand};
pub use benchmarks::{BenchmarkSource, BenchmarkTable, DEFAULT_PRICE_PER_SEAT};
pub use confidence::ConfidenceScorer;
pub use engine::{
    IncreaseBreakdown, PriceRecommendationEngine, PricingIntermediates, DEFENSIVE_INCREASE,
    DISCOUNT_FLOOR, STICKINESS_WEIGHT,
};
pub use errors::PricingError;
pub use factors::FactorScores;
pub use market_position::{CompetitivePosition, MarketPosition, MarketPositionAnalyzer};
pub use reasoning::{ReasoningGenerator, REASONING_LINES};
pub use recommendation::{price_at, PriceRecommendation, PricingScenario, ScenarioLabel};
pub use risk::{ChurnRisk, RiskAssessor, RiskInputs};
pub use scenarios::{
    ScenarioDraft, ScenarioGenerator, AGGRESSIVE_ACCEPTANCE, CONSERVATIVE_ACCEPTANCE,
    RECOMMENDED_ACCEPTANCE,
};
pub use stickiness::{StickinessComponents, StickinessInputs, StickinessScore, StickinessScorer};
pub use value_leverage::{ValueLeverage, ValueLeverageAnalyzer, ValueTrend};
