//! Confidence Scorer - How far to trust a recommendation.

use crate::domain::foundation::Percentage;
use crate::domain::renewal::{DataQuality, DataQualityFlags, PricingGoal};

/// Graded value of one indicator at each data quality level.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndicatorGrades {
    complete: f64,
    partial: f64,
    placeholder: f64,
}

impl IndicatorGrades {
    fn grade(&self, quality: DataQuality) -> f64 {
        match quality {
            DataQuality::Complete => self.complete,
            DataQuality::Partial => self.partial,
            DataQuality::Placeholder => self.placeholder,
        }
    }
}

const USAGE: IndicatorGrades = IndicatorGrades { complete: 95.0, partial: 75.0, placeholder: 40.0 };
const FINANCIAL: IndicatorGrades = IndicatorGrades { complete: 95.0, partial: 80.0, placeholder: 50.0 };
const SENTIMENT: IndicatorGrades = IndicatorGrades { complete: 90.0, partial: 70.0, placeholder: 50.0 };
const COMPETITIVE: IndicatorGrades = IndicatorGrades { complete: 85.0, partial: 70.0, placeholder: 55.0 };
const RELATIONSHIP_RISK: IndicatorGrades =
    IndicatorGrades { complete: 90.0, partial: 75.0, placeholder: 50.0 };

/// Scorer for recommendation confidence.
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Scores confidence from data completeness and strategy alignment.
    ///
    /// Goals that push away from the computed market increase lower
    /// confidence.
    pub fn score(flags: &DataQualityFlags, goal: PricingGoal) -> Percentage {
        let avg = Self::average_data_quality(flags);
        Percentage::from_score(avg * Self::strategy_alignment(goal))
    }

    /// Mean of the five graded indicators.
    pub fn average_data_quality(flags: &DataQualityFlags) -> f64 {
        let grades = [
            USAGE.grade(flags.usage),
            FINANCIAL.grade(flags.financial),
            SENTIMENT.grade(flags.sentiment),
            COMPETITIVE.grade(flags.competitive),
            RELATIONSHIP_RISK.grade(flags.relationship_risk),
        ];
        grades.iter().sum::<f64>() / grades.len() as f64
    }

    /// Multiplier reflecting how closely the goal follows the evidence.
    pub fn strategy_alignment(goal: PricingGoal) -> f64 {
        match goal {
            PricingGoal::Market | PricingGoal::Maintain => 1.0,
            PricingGoal::Modest => 0.95,
            PricingGoal::Aggressive => 0.85,
            PricingGoal::Defensive => 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_data_with_market_goal() {
        let flags = DataQualityFlags::uniform(DataQuality::Complete);
        // (95 + 95 + 90 + 85 + 90) / 5 = 91
        assert_eq!(ConfidenceScorer::score(&flags, PricingGoal::Market).value(), 91);
    }

    #[test]
    fn placeholder_data_with_market_goal() {
        let flags = DataQualityFlags::uniform(DataQuality::Placeholder);
        // (40 + 50 + 50 + 55 + 50) / 5 = 49
        assert_eq!(ConfidenceScorer::score(&flags, PricingGoal::Market).value(), 49);
    }

    #[test]
    fn worst_data_scores_below_best_for_every_goal() {
        let worst = DataQualityFlags::uniform(DataQuality::Placeholder);
        let best = DataQualityFlags::uniform(DataQuality::Complete);
        for goal in PricingGoal::ALL {
            assert!(
                ConfidenceScorer::score(&worst, *goal) < ConfidenceScorer::score(&best, *goal),
                "goal {}",
                goal
            );
        }
    }

    #[test]
    fn aggressive_goal_lowers_confidence() {
        let flags = DataQualityFlags::uniform(DataQuality::Complete);
        // 91 * 0.85 = 77.35
        assert_eq!(ConfidenceScorer::score(&flags, PricingGoal::Aggressive).value(), 77);
        // 91 * 0.9 = 81.9
        assert_eq!(ConfidenceScorer::score(&flags, PricingGoal::Defensive).value(), 82);
    }

    #[test]
    fn each_indicator_grade_is_monotonic() {
        for grades in [USAGE, FINANCIAL, SENTIMENT, COMPETITIVE, RELATIONSHIP_RISK] {
            assert!(grades.placeholder < grades.partial);
            assert!(grades.partial < grades.complete);
        }
    }
}
