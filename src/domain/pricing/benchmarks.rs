//! Industry price-per-seat reference table.
//!
//! A static placeholder for market data. Entries are keyed by industry, with
//! optional `industry/region` overrides. Keys are matched case-insensitively
//! with spaces and dashes folded to underscores.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{check, ValidationError};

/// Annual price per seat used when an industry has no entry.
pub const DEFAULT_PRICE_PER_SEAT: f64 = 1_000.0;

static BUILT_IN: Lazy<BenchmarkTable> = Lazy::new(|| {
    let mut table = BenchmarkTable::empty(DEFAULT_PRICE_PER_SEAT);
    for (industry, average) in [
        ("technology", 1_200.0),
        ("financial_services", 1_500.0),
        ("healthcare", 1_100.0),
        ("manufacturing", 900.0),
        ("retail", 800.0),
        ("education", 600.0),
        ("government", 950.0),
        ("media", 850.0),
    ] {
        table.industries.insert(industry.to_string(), average);
    }
    table
});

/// Where a benchmark value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSource {
    Regional,
    Industry,
    Default,
}

/// Per-seat industry averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    pub default_average: f64,
    /// Industry key to average price per seat.
    pub industries: BTreeMap<String, f64>,
    /// `industry/region` key to average price per seat.
    pub regional: BTreeMap<String, f64>,
}

impl BenchmarkTable {
    /// A table with no entries.
    pub fn empty(default_average: f64) -> Self {
        Self {
            default_average,
            industries: BTreeMap::new(),
            regional: BTreeMap::new(),
        }
    }

    /// The compiled-in reference table.
    pub fn built_in() -> &'static BenchmarkTable {
        &BUILT_IN
    }

    /// Adds or replaces an industry average.
    pub fn with_industry(mut self, industry: &str, average: f64) -> Self {
        self.industries.insert(normalize(industry), average);
        self
    }

    /// Adds or replaces an industry/region override.
    pub fn with_regional(mut self, industry: &str, region: &str, average: f64) -> Self {
        self.regional.insert(regional_key(industry, region), average);
        self
    }

    /// Resolves the benchmark: regional override, then industry, then default.
    pub fn lookup(&self, industry: &str, region: &str) -> (f64, BenchmarkSource) {
        if let Some(avg) = self.regional.get(&regional_key(industry, region)) {
            return (*avg, BenchmarkSource::Regional);
        }
        if let Some(avg) = self.industries.get(&normalize(industry)) {
            return (*avg, BenchmarkSource::Industry);
        }
        (self.default_average, BenchmarkSource::Default)
    }

    /// Every average must be finite and positive; a zero average would make
    /// the benchmark ratio undefined.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check::positive("benchmarks.default_average", self.default_average)?;
        for (key, avg) in self.industries.iter().chain(self.regional.iter()) {
            check::positive(&format!("benchmarks.{}", key), *avg)?;
        }
        Ok(())
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        BUILT_IN.clone()
    }
}

fn normalize(key: &str) -> String {
    key.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn regional_key(industry: &str, region: &str) -> String {
    format!("{}/{}", normalize(industry), normalize(region))
}
