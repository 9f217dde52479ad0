//! Data-quality flags: which signal groups came from real data.

use serde::{Deserialize, Serialize};

/// How much of a signal group was observed rather than defaulted.
///
/// Ordered from worst to best so `Placeholder < Partial < Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    /// Every field in the group was defaulted.
    Placeholder,
    /// Some fields were observed, some defaulted.
    Partial,
    /// Every field in the group was observed.
    Complete,
}

impl DataQuality {
    pub const ALL: [DataQuality; 3] = [
        DataQuality::Placeholder,
        DataQuality::Partial,
        DataQuality::Complete,
    ];

    /// Grades a group from how many of its fields were supplied.
    pub fn from_presence(present: usize, total: usize) -> Self {
        if total == 0 || present >= total {
            DataQuality::Complete
        } else if present == 0 {
            DataQuality::Placeholder
        } else {
            DataQuality::Partial
        }
    }

    /// Returns the next better grade, if any.
    pub fn upgraded(&self) -> Option<Self> {
        match self {
            DataQuality::Placeholder => Some(DataQuality::Partial),
            DataQuality::Partial => Some(DataQuality::Complete),
            DataQuality::Complete => None,
        }
    }
}

/// Data quality for each of the five confidence indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataQualityFlags {
    pub usage: DataQuality,
    pub financial: DataQuality,
    pub sentiment: DataQuality,
    pub competitive: DataQuality,
    pub relationship_risk: DataQuality,
}

impl DataQualityFlags {
    /// All five indicators at the same grade.
    pub const fn uniform(quality: DataQuality) -> Self {
        Self {
            usage: quality,
            financial: quality,
            sentiment: quality,
            competitive: quality,
            relationship_risk: quality,
        }
    }

    /// Number of indicators backed by fully observed data.
    pub fn complete_count(&self) -> usize {
        [
            self.usage,
            self.financial,
            self.sentiment,
            self.competitive,
            self.relationship_risk,
        ]
        .iter()
        .filter(|q| **q == DataQuality::Complete)
        .count()
    }
}

impl Default for DataQualityFlags {
    fn default() -> Self {
        Self::uniform(DataQuality::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_presence_grades_groups() {
        assert_eq!(DataQuality::from_presence(0, 4), DataQuality::Placeholder);
        assert_eq!(DataQuality::from_presence(2, 4), DataQuality::Partial);
        assert_eq!(DataQuality::from_presence(4, 4), DataQuality::Complete);
    }

    #[test]
    fn quality_is_ordered_worst_to_best() {
        assert!(DataQuality::Placeholder < DataQuality::Partial);
        assert!(DataQuality::Partial < DataQuality::Complete);
    }

    #[test]
    fn upgraded_walks_to_complete() {
        assert_eq!(DataQuality::Placeholder.upgraded(), Some(DataQuality::Partial));
        assert_eq!(DataQuality::Complete.upgraded(), None);
    }

    #[test]
    fn complete_count_counts_indicators() {
        let mut flags = DataQualityFlags::uniform(DataQuality::Complete);
        assert_eq!(flags.complete_count(), 5);
        flags.sentiment = DataQuality::Placeholder;
        assert_eq!(flags.complete_count(), 4);
    }
}
