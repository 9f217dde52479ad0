//! Stickiness Scorer - How embedded the product is in the customer's work.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Maximum points per sub-factor. The caps sum to 100.
pub const ADOPTION_CAP: f64 = 30.0;
pub const INTEGRATIONS_CAP: f64 = 20.0;
pub const DATA_VOLUME_CAP: f64 = 15.0;
pub const ENGAGEMENT_CAP: f64 = 20.0;
pub const CUSTOMIZATIONS_CAP: f64 = 10.0;
pub const TENURE_CAP: f64 = 5.0;

/// Engagement ratio used when there is no seat count to divide by.
pub const NO_SEAT_ENGAGEMENT_RATIO: f64 = 0.5;

/// Explicit usage measurements. Nothing is defaulted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickinessInputs {
    pub feature_adoption_ratio: f64,
    pub integration_count: u32,
    pub data_volume_tb: f64,
    pub active_users: u32,
    pub seat_count: u32,
    pub customizations_count: u32,
    pub tenure_months: u32,
}

/// Points contributed by each sub-factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickinessComponents {
    pub feature_adoption: f64,
    pub integrations: f64,
    pub data_volume: f64,
    pub user_engagement: f64,
    pub customizations: f64,
    pub tenure: f64,
}

impl StickinessComponents {
    /// Raw sum before rounding.
    pub fn total(&self) -> f64 {
        self.feature_adoption
            + self.integrations
            + self.data_volume
            + self.user_engagement
            + self.customizations
            + self.tenure
    }
}

/// Stickiness result: the rounded score plus its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickinessScore {
    pub score: Percentage,
    pub components: StickinessComponents,
}

/// Scorer for embeddedness / switching cost.
pub struct StickinessScorer;

impl StickinessScorer {
    /// Scores stickiness on a 0-100 scale.
    ///
    /// Each sub-factor is capped independently, so one extreme signal cannot
    /// carry the whole score.
    ///
    /// # Edge Cases
    /// - `seat_count == 0`: engagement uses a 0.5 ratio
    /// - More active users than seats: engagement is capped at 20
    /// - Negative or NaN inputs contribute zero
    pub fn score(inputs: &StickinessInputs) -> StickinessScore {
        let engagement_ratio = if inputs.seat_count > 0 {
            f64::from(inputs.active_users) / f64::from(inputs.seat_count)
        } else {
            NO_SEAT_ENGAGEMENT_RATIO
        };

        let components = StickinessComponents {
            feature_adoption: capped(inputs.feature_adoption_ratio * 30.0, ADOPTION_CAP),
            integrations: capped(f64::from(inputs.integration_count) * 5.0, INTEGRATIONS_CAP),
            data_volume: capped(inputs.data_volume_tb * 2.0, DATA_VOLUME_CAP),
            user_engagement: capped(engagement_ratio * 20.0, ENGAGEMENT_CAP),
            customizations: capped(f64::from(inputs.customizations_count) * 3.0, CUSTOMIZATIONS_CAP),
            tenure: capped(f64::from(inputs.tenure_months) / 12.0 * 5.0, TENURE_CAP),
        };

        StickinessScore {
            score: Percentage::from_score(components.total()),
            components,
        }
    }
}

fn capped(points: f64, cap: f64) -> f64 {
    if points.is_nan() {
        return 0.0;
    }
    points.clamp(0.0, cap)
}
