//! Market Position Analyzer - Price per seat against the industry benchmark.

use serde::{Deserialize, Serialize};

use super::benchmarks::{BenchmarkSource, BenchmarkTable};
use crate::domain::foundation::{check, ValidationError};
use crate::domain::renewal::CompetitivePressure;

/// Our position relative to competitors in this account.
///
/// This is a straight mapping from the account manager's competitive
/// pressure input. It is not derived from the benchmark ratio, and the two
/// can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitivePosition {
    Stronger,
    Same,
    Weaker,
}

impl From<CompetitivePressure> for CompetitivePosition {
    fn from(pressure: CompetitivePressure) -> Self {
        match pressure {
            CompetitivePressure::None => CompetitivePosition::Stronger,
            CompetitivePressure::Medium => CompetitivePosition::Same,
            CompetitivePressure::High => CompetitivePosition::Weaker,
        }
    }
}

/// Market position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketPosition {
    /// `price_per_seat / industry_average`. Below 1.0 means underpriced.
    pub peer_benchmark_ratio: f64,
    pub competitive_position: CompetitivePosition,
    pub price_per_seat: f64,
    pub industry_average: f64,
    pub benchmark_source: BenchmarkSource,
    /// False when the seat count was zero and the benchmark was used as the
    /// customer's own price per seat.
    pub has_seat_data: bool,
}

/// Analyzer for benchmark-relative pricing.
pub struct MarketPositionAnalyzer;

impl MarketPositionAnalyzer {
    /// Compares the customer's price per seat with the benchmark table.
    ///
    /// # Edge Cases
    /// - `seat_count == 0`: price per seat falls back to the industry
    ///   average, so the ratio is exactly 1.0
    pub fn analyze(
        customer_arr: f64,
        seat_count: u32,
        industry: &str,
        region: &str,
        competitive_pressure: CompetitivePressure,
        benchmarks: &BenchmarkTable,
    ) -> Result<MarketPosition, ValidationError> {
        let customer_arr = check::positive("current_arr", customer_arr)?;
        let (industry_average, benchmark_source) = benchmarks.lookup(industry, region);
        let industry_average = check::positive("industry_average", industry_average)?;

        let has_seat_data = seat_count > 0;
        let price_per_seat = if has_seat_data {
            customer_arr / f64::from(seat_count)
        } else {
            industry_average
        };

        Ok(MarketPosition {
            peer_benchmark_ratio: price_per_seat / industry_average,
            competitive_position: competitive_pressure.into(),
            price_per_seat,
            industry_average,
            benchmark_source,
            has_seat_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BenchmarkTable {
        BenchmarkTable::empty(1_000.0).with_industry("technology", 1_250.0)
    }

    #[test]
    fn ratio_compares_price_per_seat_to_average() {
        let result = MarketPositionAnalyzer::analyze(
            100_000.0,
            100,
            "technology",
            "na",
            CompetitivePressure::Medium,
            &table(),
        )
        .unwrap();
        assert_eq!(result.price_per_seat, 1_000.0);
        assert_eq!(result.industry_average, 1_250.0);
        assert!((result.peer_benchmark_ratio - 0.8).abs() < 1e-12);
        assert!(result.has_seat_data);
    }

    #[test]
    fn zero_seats_falls_back_to_parity() {
        let result = MarketPositionAnalyzer::analyze(
            80_000.0,
            0,
            "technology",
            "na",
            CompetitivePressure::Medium,
            &table(),
        )
        .unwrap();
        assert_eq!(result.price_per_seat, result.industry_average);
        assert_eq!(result.peer_benchmark_ratio, 1.0);
        assert!(!result.has_seat_data);
    }

    #[test]
    fn competitive_position_maps_pressure_directly() {
        let analyze = |pressure| {
            MarketPositionAnalyzer::analyze(50_000.0, 10, "x", "y", pressure, &table())
                .unwrap()
                .competitive_position
        };
        assert_eq!(analyze(CompetitivePressure::None), CompetitivePosition::Stronger);
        assert_eq!(analyze(CompetitivePressure::Medium), CompetitivePosition::Same);
        assert_eq!(analyze(CompetitivePressure::High), CompetitivePosition::Weaker);
    }

    #[test]
    fn competitive_position_ignores_ratio() {
        // Heavily overpriced but no competitive pressure: still "stronger".
        let result = MarketPositionAnalyzer::analyze(
            500_000.0,
            10,
            "technology",
            "na",
            CompetitivePressure::None,
            &table(),
        )
        .unwrap();
        assert!(result.peer_benchmark_ratio > 1.05);
        assert_eq!(result.competitive_position, CompetitivePosition::Stronger);
    }

    #[test]
    fn non_positive_arr_is_rejected() {
        let err = MarketPositionAnalyzer::analyze(
            -1.0,
            10,
            "technology",
            "na",
            CompetitivePressure::Medium,
            &table(),
        )
        .unwrap_err();
        assert_eq!(err.field(), "current_arr");
    }
}
