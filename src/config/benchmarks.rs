//! Benchmark table configuration

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;
use crate::domain::pricing::BenchmarkTable;

/// One industry/region override
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegionalBenchmark {
    pub industry: String,
    pub region: String,
    pub average: f64,
}

/// Per-seat benchmark settings layered over the built-in table
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    /// Start from the compiled-in table (otherwise start empty)
    #[serde(default = "default_use_built_in")]
    pub use_built_in: bool,

    /// Replaces the table's fallback average
    pub default_average: Option<f64>,

    /// Industry averages added or replaced
    #[serde(default)]
    pub industries: HashMap<String, f64>,

    /// Industry/region overrides
    #[serde(default)]
    pub regional: Vec<RegionalBenchmark>,
}

impl BenchmarkConfig {
    /// Builds the table handed to the engine.
    pub fn to_table(&self) -> BenchmarkTable {
        let mut table = if self.use_built_in {
            BenchmarkTable::built_in().clone()
        } else {
            BenchmarkTable::empty(crate::domain::pricing::DEFAULT_PRICE_PER_SEAT)
        };

        if let Some(avg) = self.default_average {
            table.default_average = avg;
        }
        for (industry, avg) in &self.industries {
            table = table.with_industry(industry, *avg);
        }
        for entry in &self.regional {
            table = table.with_regional(&entry.industry, &entry.region, entry.average);
        }
        table
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_table()
            .validate()
            .map_err(ValidationError::InvalidBenchmark)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            use_built_in: default_use_built_in(),
            default_average: None,
            industries: HashMap::new(),
            regional: Vec::new(),
        }
    }
}

fn default_use_built_in() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::BenchmarkSource;

    #[test]
    fn test_default_config_yields_built_in_table() {
        let table = BenchmarkConfig::default().to_table();
        assert_eq!(&table, BenchmarkTable::built_in());
    }

    #[test]
    fn test_overrides_are_layered() {
        let config = BenchmarkConfig {
            use_built_in: true,
            default_average: Some(750.0),
            industries: HashMap::from([("Logistics".to_string(), 700.0)]),
            regional: vec![RegionalBenchmark {
                industry: "technology".to_string(),
                region: "apac".to_string(),
                average: 1_000.0,
            }],
        };
        let table = config.to_table();

        assert_eq!(table.lookup("logistics", "na"), (700.0, BenchmarkSource::Industry));
        assert_eq!(table.lookup("technology", "APAC"), (1_000.0, BenchmarkSource::Regional));
        assert_eq!(table.lookup("technology", "emea"), (1_200.0, BenchmarkSource::Industry));
        assert_eq!(table.lookup("unknown", "emea"), (750.0, BenchmarkSource::Default));
    }

    #[test]
    fn test_empty_base_table() {
        let config = BenchmarkConfig {
            use_built_in: false,
            ..BenchmarkConfig::default()
        };
        assert!(config.to_table().industries.is_empty());
    }

    #[test]
    fn test_negative_average_fails_validation() {
        let config = BenchmarkConfig {
            industries: HashMap::from([("retail".to_string(), -1.0)]),
            ..BenchmarkConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBenchmark(_))
        ));
    }
}
