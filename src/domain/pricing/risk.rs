//! Risk Assessor - Churn risk from relationship and account signals.

use serde::{Deserialize, Serialize};

use crate::domain::renewal::RiskTolerance;

/// Inputs to the churn risk formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub relationship_strength: f64,
    /// Collected alongside the other signals but not weighted by the formula.
    pub renewal_confidence: f64,
    pub renewal_confidence_at_current_price: f64,
    pub budget_pressure: f64,
    pub competitive_threat: f64,
    pub sentiment_score: f64,
    /// Passed through untouched. The risk multiplier is applied by the
    /// engine, not here.
    pub risk_tolerance: RiskTolerance,
}

/// Churn risk on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnRisk {
    pub churn_risk_score: f64,
    /// Score before the final clamp, kept for audit.
    pub unclamped_score: f64,
}

/// Assessor for churn risk.
pub struct RiskAssessor;

impl RiskAssessor {
    /// Applies the ordered adjustments, clamping only once at the end.
    ///
    /// Neutral points: relationship 5, budget pressure 50, competitive
    /// threat 30, sentiment 70.
    pub fn assess(inputs: &RiskInputs) -> ChurnRisk {
        let mut score = 100.0 - inputs.renewal_confidence_at_current_price * 10.0;
        score -= (inputs.relationship_strength - 5.0) * 3.0;
        score += (inputs.budget_pressure - 50.0) * 0.2;
        score += (inputs.competitive_threat - 30.0) * 0.15;
        score -= (inputs.sentiment_score - 70.0) * 0.1;

        let clamped = if score.is_nan() {
            100.0
        } else {
            score.clamp(0.0, 100.0)
        };

        ChurnRisk {
            churn_risk_score: clamped,
            unclamped_score: score,
        }
    }
}
