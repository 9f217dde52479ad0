//! Value Leverage Analyzer - Delivered value relative to price paid.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{check, ValidationError};
use crate::domain::renewal::ValuePerceptionChange;

/// Direction the customer's realized value is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTrend {
    Improving,
    Stable,
    Declining,
}

impl ValueTrend {
    pub fn label(&self) -> &'static str {
        match self {
            ValueTrend::Improving => "improving",
            ValueTrend::Stable => "stable",
            ValueTrend::Declining => "declining",
        }
    }
}

/// Value leverage index and trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLeverage {
    /// Quantified value divided by ARR. `1.0` when value was not quantified.
    pub index: f64,
    pub trend: ValueTrend,
    /// True when the index reflects a quantified value rather than the
    /// "value matches price" assumption.
    pub quantified: bool,
}

/// Analyzer for value-to-price leverage.
pub struct ValueLeverageAnalyzer;

impl ValueLeverageAnalyzer {
    /// Computes the value leverage index and trend.
    ///
    /// # Edge Cases
    /// - `quantified_value == 0`: index is exactly 1.0 (value matches price,
    ///   not "no value")
    /// - `current_arr <= 0` or non-finite: `ValidationError`, never a division
    ///   by zero
    pub fn analyze(
        current_arr: f64,
        quantified_value: f64,
        usage_growth_ratio: f64,
        perception: ValuePerceptionChange,
    ) -> Result<ValueLeverage, ValidationError> {
        let current_arr = check::positive("current_arr", current_arr)?;
        let quantified_value = check::non_negative("quantified_value", quantified_value)?;
        let usage_growth_ratio = check::finite("usage_growth_ratio", usage_growth_ratio)?;

        let quantified = quantified_value > 0.0;
        let index = if quantified {
            quantified_value / current_arr
        } else {
            1.0
        };

        Ok(ValueLeverage {
            index,
            trend: Self::trend(usage_growth_ratio, perception),
            quantified,
        })
    }

    /// Improving signals win over declining ones when both are present.
    fn trend(usage_growth_ratio: f64, perception: ValuePerceptionChange) -> ValueTrend {
        if usage_growth_ratio > 0.10 || perception == ValuePerceptionChange::SignificantlyImproved {
            ValueTrend::Improving
        } else if usage_growth_ratio < -0.05 || perception == ValuePerceptionChange::Declined {
            ValueTrend::Declining
        } else {
            ValueTrend::Stable
        }
    }
}
