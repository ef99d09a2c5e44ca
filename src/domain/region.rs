// ============================================================
// REGION AGGREGATES
// ============================================================
// Per-region summaries computed once at startup

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::company::SizeCategory;

/// Dominant-industry value for a region with no records.
pub const NO_INDUSTRY: &str = "N/A";

/// Summary of every normalized record that shares one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAggregate {
    pub company_count: usize,

    /// Most frequent industry; first one seen wins a tie
    pub dominant_industry: String,

    pub industry_breakdown: BTreeMap<String, usize>,

    /// Never holds `SizeCategory::Unknown`
    pub size_breakdown: BTreeMap<SizeCategory, usize>,
}

impl Default for RegionAggregate {
    fn default() -> Self {
        Self {
            company_count: 0,
            dominant_industry: NO_INDUSTRY.to_string(),
            industry_breakdown: BTreeMap::new(),
            size_breakdown: BTreeMap::new(),
        }
    }
}

/// One color band of the map legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendBucket {
    pub lower: f64,
    pub upper: f64,
    pub color: String,
    pub label: String,
}

/// Every region aggregate plus the legend derived from their counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub regions: BTreeMap<String, RegionAggregate>,
    pub legend: Vec<LegendBucket>,
}

impl Aggregates {
    pub fn get(&self, region: &str) -> Option<&RegionAggregate> {
        self.regions.get(region)
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Smallest and largest company count, if any region exists.
    pub fn count_range(&self) -> Option<(usize, usize)> {
        let mut counts = self.regions.values().map(|r| r.company_count);
        let first = counts.next()?;
        Some(counts.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}
