//! End-to-end recommendation tests.
//!
//! These tests drive the public API the way a host application would:
//! build (or resolve) an input, run the engine, and inspect the output.

use chrono::NaiveDate;

use renewal_pricing::domain::foundation::ErrorCode;
use renewal_pricing::domain::pricing::{
    BenchmarkSource, BenchmarkTable, CompetitivePosition, PriceRecommendationEngine, PricingError,
    ScenarioLabel, ValueTrend, REASONING_LINES,
};
use renewal_pricing::domain::renewal::{
    intake, CustomerRenewalContext, DataQuality, DataQualityFlags, DiscoverySignals,
    IntakeDefaults, PricingGoal, PricingStrategyPreferences, RawRenewalInputs,
    RenewalPricingInput, UsageDataSnapshot,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn context(current_arr: f64, seat_count: u32) -> CustomerRenewalContext {
    CustomerRenewalContext {
        current_arr,
        seat_count,
        industry: "technology".to_string(),
        region: "north_america".to_string(),
        days_until_renewal: 60,
        first_contract_date: date(2021, 3, 1),
        evaluation_date: date(2024, 3, 1),
    }
}

/// A deeply embedded, high-value, low-risk account.
///
/// Stickiness 90, value index 1.8, usage growth 0.20, churn risk 15.
fn strong_account() -> RenewalPricingInput {
    RenewalPricingInput {
        context: context(100_000.0, 100),
        signals: DiscoverySignals {
            relationship_strength: 5.0,
            renewal_confidence: 8.0,
            renewal_confidence_at_current_price: 8.0,
            price_increase_cap: 0.10,
            budget_pressure: 25.0,
            competitive_threat: 30.0,
            quantified_value: 180_000.0,
        },
        usage: UsageDataSnapshot {
            feature_adoption_ratio: 1.0,
            integration_count: 4,
            data_volume_tb: 7.5,
            active_users: 100,
            customizations_count: 0,
            usage_growth_ratio: 0.20,
            sentiment_score: 70.0,
        },
        strategy: PricingStrategyPreferences::default(),
        data_quality: DataQualityFlags::uniform(DataQuality::Complete),
    }
}

/// Prices 100 seats at $100,000 to a benchmark ratio of 0.90.
fn engine_at_ratio_090() -> PriceRecommendationEngine {
    let table = BenchmarkTable::empty(1_000.0).with_industry("technology", 1_000.0 / 0.9);
    PriceRecommendationEngine::new(table)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Worked Scenarios
// =============================================================================

#[test]
fn strong_account_is_capped_at_contract_limit() {
    let rec = engine_at_ratio_090().recommend(&strong_account()).unwrap();

    assert_eq!(rec.factors.stickiness.score.value(), 90);
    assert_close(rec.factors.value_leverage.index, 1.8);
    assert_close(rec.factors.market_position.peer_benchmark_ratio, 0.9);
    assert_close(rec.factors.churn_risk.churn_risk_score, 15.0);

    assert_close(rec.breakdown.base_increase, 0.172);
    assert_close(rec.breakdown.risk_multiplier, 1.1);
    assert_close(rec.breakdown.risk_adjusted_increase, 0.1892);
    assert_close(rec.final_increase(), 0.10);
    assert!(rec.breakdown.was_capped());

    assert_eq!(rec.target_price, 110_000.0);
    assert_eq!(rec.increase_amount, 10_000.0);
    assert_eq!(rec.increase_percent, 10.0);
}

#[test]
fn maintain_goal_holds_price_flat() {
    let mut input = strong_account();
    input.strategy.pricing_goal = PricingGoal::Maintain;

    let rec = engine_at_ratio_090().recommend(&input).unwrap();

    assert_eq!(rec.final_increase(), 0.0);
    assert_eq!(rec.target_price, 100_000.0);
    assert_eq!(rec.increase_amount, 0.0);
    assert_eq!(rec.increase_percent, 0.0);
}

#[test]
fn missing_quantified_value_means_value_matches_price() {
    let mut input = strong_account();
    input.context = context(50_000.0, 50);
    input.signals.quantified_value = 0.0;
    input.usage.usage_growth_ratio = 0.0;
    input.usage.active_users = 50;

    let rec = PriceRecommendationEngine::default().recommend(&input).unwrap();

    assert_eq!(rec.factors.value_leverage.index, 1.0);
    assert_eq!(rec.factors.value_leverage.trend, ValueTrend::Stable);
    assert_eq!(rec.breakdown.value_contribution, 0.0);
}

#[test]
fn cap_below_discount_floor_is_rejected() {
    let mut input = strong_account();
    input.signals.price_increase_cap = -0.10;

    let err = PriceRecommendationEngine::default()
        .recommend(&input)
        .unwrap_err();

    assert!(matches!(err, PricingError::InvalidConstraint { .. }));
    assert_eq!(err.code(), ErrorCode::InvalidConstraint);
    assert_eq!(err.field(), "price_increase_cap");
}

#[test]
fn zero_seats_fall_back_to_industry_average() {
    let mut input = strong_account();
    input.context = context(80_000.0, 0);
    input.usage.active_users = 0;

    let rec = PriceRecommendationEngine::default().recommend(&input).unwrap();
    let market = &rec.factors.market_position;

    assert_eq!(market.price_per_seat, market.industry_average);
    assert_eq!(market.peer_benchmark_ratio, 1.0);
    assert!(!market.has_seat_data);
    assert_eq!(market.benchmark_source, BenchmarkSource::Industry);
}

#[test]
fn placeholder_data_lowers_confidence() {
    let engine = PriceRecommendationEngine::default();

    let best = engine.recommend(&strong_account()).unwrap();

    let mut degraded = strong_account();
    degraded.data_quality = DataQualityFlags::uniform(DataQuality::Placeholder);
    let worst = engine.recommend(&degraded).unwrap();

    assert!(worst.confidence_score < best.confidence_score);
    // Data quality never touches the price itself.
    assert_eq!(worst.target_price, best.target_price);
}

// =============================================================================
// Output Contract
// =============================================================================

#[test]
fn recommended_scenario_mirrors_top_level_output() {
    let rec = engine_at_ratio_090().recommend(&strong_account()).unwrap();
    let recommended = rec.scenario(ScenarioLabel::Recommended);

    assert_eq!(recommended.target_price, rec.target_price);
    assert_eq!(recommended.increase_percent, rec.increase_percent);
    assert_eq!(recommended.acceptance_probability.value(), 85);

    let labels: Vec<_> = rec.scenarios.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        vec![
            ScenarioLabel::Conservative,
            ScenarioLabel::Recommended,
            ScenarioLabel::Aggressive
        ]
    );
}

#[test]
fn scenarios_for_capped_account() {
    let rec = engine_at_ratio_090().recommend(&strong_account()).unwrap();

    let conservative = rec.scenario(ScenarioLabel::Conservative);
    assert_eq!(conservative.increase_percent, 5.0);
    assert_eq!(conservative.target_price, 105_000.0);
    assert_eq!(conservative.acceptance_probability.value(), 95);

    // Already at the cap, so the aggressive option cannot go higher.
    let aggressive = rec.scenario(ScenarioLabel::Aggressive);
    assert_eq!(aggressive.increase_percent, 10.0);
    assert_eq!(aggressive.acceptance_probability.value(), 65);
}

#[test]
fn reasoning_runs_structural_to_situational() {
    let rec = engine_at_ratio_090().recommend(&strong_account()).unwrap();

    assert_eq!(rec.reasoning.len(), REASONING_LINES);
    assert!(rec.reasoning[0].to_lowercase().contains("stickiness"));
    assert!(rec.reasoning[5].contains("10%"));
}

#[test]
fn defensive_goal_offers_fixed_discount() {
    let mut input = strong_account();
    input.strategy.pricing_goal = PricingGoal::Defensive;

    let rec = engine_at_ratio_090().recommend(&input).unwrap();

    assert!(rec.breakdown.defensive_override);
    assert_close(rec.final_increase(), -0.05);
    assert_eq!(rec.target_price, 95_000.0);
    assert_eq!(rec.increase_percent, -5.0);
}

#[test]
fn no_competition_reads_as_stronger_position() {
    let mut input = strong_account();
    input.strategy.competitive_pressure =
        renewal_pricing::domain::renewal::CompetitivePressure::None;

    let rec = engine_at_ratio_090().recommend(&input).unwrap();

    assert_eq!(
        rec.factors.market_position.competitive_position,
        CompetitivePosition::Stronger
    );
}

#[test]
fn recommendation_serializes_to_json() {
    let rec = engine_at_ratio_090().recommend(&strong_account()).unwrap();
    let json = serde_json::to_value(&rec).unwrap();

    assert_eq!(json["target_price"], 110_000.0);
    assert_eq!(json["increase_percent"], 10.0);
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Intake
// =============================================================================

#[test]
fn sparse_inputs_resolve_and_recommend() {
    let raw: RawRenewalInputs = serde_json::from_value(serde_json::json!({
        "context": {
            "current_arr": 60000.0,
            "seat_count": 40,
            "industry": "Healthcare",
            "region": "emea",
            "days_until_renewal": 45,
            "first_contract_date": "2023-02-01",
            "evaluation_date": "2024-02-01"
        },
        "usage": { "feature_adoption_ratio": 0.7 },
        "strategy": { "pricing_goal": "modest" }
    }))
    .unwrap();

    let input = intake::resolve(&raw, &IntakeDefaults::default()).unwrap();
    assert_eq!(input.strategy.pricing_goal, PricingGoal::Modest);
    assert_eq!(input.data_quality.usage, DataQuality::Partial);
    assert_eq!(input.data_quality.sentiment, DataQuality::Placeholder);

    let rec = PriceRecommendationEngine::default().recommend(&input).unwrap();
    assert!(rec.final_increase() <= input.signals.price_increase_cap);
    assert!(rec.confidence_score.value() < 91);
}

#[test]
fn unknown_goal_is_rejected_at_intake() {
    let raw: RawRenewalInputs = serde_json::from_value(serde_json::json!({
        "context": {
            "current_arr": 60000.0,
            "seat_count": 40,
            "industry": "retail",
            "region": "emea",
            "days_until_renewal": 45,
            "first_contract_date": "2023-02-01",
            "evaluation_date": "2024-02-01"
        },
        "strategy": { "pricing_goal": "skyrocket" }
    }))
    .unwrap();

    let err = intake::resolve(&raw, &IntakeDefaults::default()).unwrap_err();
    assert_eq!(err.field(), "pricing_goal");
}

#[test]
fn non_finite_arr_is_rejected_with_field() {
    let mut input = strong_account();
    input.context.current_arr = f64::INFINITY;

    let err = PriceRecommendationEngine::default()
        .recommend(&input)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert_eq!(err.field(), "current_arr");
}

#[test]
fn oversized_arr_is_rejected_instead_of_overflowing() {
    let mut input = strong_account();
    input.context.current_arr = 1e308;

    let err = PriceRecommendationEngine::default()
        .recommend(&input)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert_eq!(err.field(), "current_arr");
}
