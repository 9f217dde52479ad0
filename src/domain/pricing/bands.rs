//! Threshold bands over the factor scores.
//!
//! Each factor is classified exactly once. The engine reads a band's
//! contribution or multiplier; the reasoning and scenario generators read the
//! same band to choose their wording. Nobody compares raw scores against
//! thresholds a second time.

use serde::{Deserialize, Serialize};

/// Stickiness level for narrative purposes. Stage A scales stickiness
/// linearly, so this band carries no contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickinessBand {
    High,
    Moderate,
    Low,
}

impl StickinessBand {
    pub fn classify(score: u8) -> Self {
        match score {
            70..=u8::MAX => StickinessBand::High,
            40..=69 => StickinessBand::Moderate,
            _ => StickinessBand::Low,
        }
    }
}

/// Value leverage index band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueBand {
    /// index > 1.5
    Exceptional,
    /// index > 1.2
    Strong,
    /// index > 1.0
    Positive,
    /// index <= 1.0
    AtOrBelowPrice,
}

impl ValueBand {
    pub fn classify(index: f64) -> Self {
        if index > 1.5 {
            ValueBand::Exceptional
        } else if index > 1.2 {
            ValueBand::Strong
        } else if index > 1.0 {
            ValueBand::Positive
        } else {
            ValueBand::AtOrBelowPrice
        }
    }

    /// Stage A value contribution.
    pub fn contribution(&self) -> f64 {
        match self {
            ValueBand::Exceptional => 0.05,
            ValueBand::Strong => 0.03,
            ValueBand::Positive => 0.01,
            ValueBand::AtOrBelowPrice => 0.0,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, ValueBand::Exceptional | ValueBand::Strong)
    }
}

/// Peer benchmark ratio band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketBand {
    /// ratio < 0.95
    WellBelow,
    /// ratio < 1.00
    SlightlyBelow,
    /// ratio < 1.05
    AtMarket,
    /// ratio >= 1.05
    Above,
}

impl MarketBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio < 0.95 {
            MarketBand::WellBelow
        } else if ratio < 1.00 {
            MarketBand::SlightlyBelow
        } else if ratio < 1.05 {
            MarketBand::AtMarket
        } else {
            MarketBand::Above
        }
    }

    /// Stage A market contribution.
    pub fn contribution(&self) -> f64 {
        match self {
            MarketBand::WellBelow => 0.03,
            MarketBand::SlightlyBelow => 0.02,
            MarketBand::AtMarket => 0.01,
            MarketBand::Above => 0.0,
        }
    }

    pub fn is_below_market(&self) -> bool {
        matches!(self, MarketBand::WellBelow | MarketBand::SlightlyBelow)
    }
}

/// Usage growth band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthBand {
    /// growth > 0.15
    Strong,
    /// growth > 0.05
    Growing,
    /// -0.10 <= growth <= 0.05
    Flat,
    /// growth < -0.10
    Contracting,
}

impl GrowthBand {
    pub fn classify(growth: f64) -> Self {
        if growth > 0.15 {
            GrowthBand::Strong
        } else if growth > 0.05 {
            GrowthBand::Growing
        } else if growth < -0.10 {
            GrowthBand::Contracting
        } else {
            GrowthBand::Flat
        }
    }

    /// Stage A usage trend contribution.
    pub fn contribution(&self) -> f64 {
        match self {
            GrowthBand::Strong => 0.02,
            GrowthBand::Growing => 0.01,
            GrowthBand::Flat => 0.0,
            GrowthBand::Contracting => -0.02,
        }
    }
}

/// Churn risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// churn > 60
    High,
    /// churn > 40
    Elevated,
    /// 20 <= churn <= 40
    Moderate,
    /// churn < 20
    Low,
}

impl RiskBand {
    pub fn classify(churn_risk: f64) -> Self {
        if churn_risk > 60.0 {
            RiskBand::High
        } else if churn_risk > 40.0 {
            RiskBand::Elevated
        } else if churn_risk < 20.0 {
            RiskBand::Low
        } else {
            RiskBand::Moderate
        }
    }

    /// Stage B risk multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            RiskBand::High => 0.5,
            RiskBand::Elevated => 0.75,
            RiskBand::Moderate => 1.0,
            RiskBand::Low => 1.1,
        }
    }

    pub fn is_concerning(&self) -> bool {
        matches!(self, RiskBand::High | RiskBand::Elevated)
    }
}

/// All bands for one recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorBands {
    pub stickiness: StickinessBand,
    pub value: ValueBand,
    pub market: MarketBand,
    pub growth: GrowthBand,
    pub risk: RiskBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_band_thresholds_are_exclusive() {
        assert_eq!(ValueBand::classify(1.51), ValueBand::Exceptional);
        assert_eq!(ValueBand::classify(1.5), ValueBand::Strong);
        assert_eq!(ValueBand::classify(1.2), ValueBand::Positive);
        assert_eq!(ValueBand::classify(1.0), ValueBand::AtOrBelowPrice);
    }

    #[test]
    fn market_band_thresholds() {
        assert_eq!(MarketBand::classify(0.90), MarketBand::WellBelow);
        assert_eq!(MarketBand::classify(0.95), MarketBand::SlightlyBelow);
        assert_eq!(MarketBand::classify(1.0), MarketBand::AtMarket);
        assert_eq!(MarketBand::classify(1.05), MarketBand::Above);
    }

    #[test]
    fn growth_band_thresholds() {
        assert_eq!(GrowthBand::classify(0.20).contribution(), 0.02);
        assert_eq!(GrowthBand::classify(0.15).contribution(), 0.01);
        assert_eq!(GrowthBand::classify(0.05).contribution(), 0.0);
        assert_eq!(GrowthBand::classify(-0.10).contribution(), 0.0);
        assert_eq!(GrowthBand::classify(-0.11).contribution(), -0.02);
    }

    #[test]
    fn risk_band_multipliers() {
        assert_eq!(RiskBand::classify(61.0).multiplier(), 0.5);
        assert_eq!(RiskBand::classify(60.0).multiplier(), 0.75);
        assert_eq!(RiskBand::classify(40.0).multiplier(), 1.0);
        assert_eq!(RiskBand::classify(20.0).multiplier(), 1.0);
        assert_eq!(RiskBand::classify(19.9).multiplier(), 1.1);
    }

    #[test]
    fn stickiness_band_cutoffs() {
        assert_eq!(StickinessBand::classify(70), StickinessBand::High);
        assert_eq!(StickinessBand::classify(69), StickinessBand::Moderate);
        assert_eq!(StickinessBand::classify(39), StickinessBand::Low);
    }
}
