use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::company::{CompanyRecord, NormalizedRecord, SizeCategory, UNKNOWN_REGION};

/// Source spelling -> spelling used by the district boundary dataset.
static REGION_RENAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Lisbon", "Lisboa"),
        ("Porto", "Porto"),
        ("Aveiro", "Aveiro"),
        ("Braga", "Braga"),
        ("Coimbra", "Coimbra"),
        ("Faro", "Faro"),
        ("Leiria", "Leiria"),
        ("Setúbal", "Setúbal"),
        ("Viana do Castelo", "Viana do Castelo"),
        ("Vila Real", "Vila Real"),
        ("Viseu", "Viseu"),
        ("Castelo Branco", "Castelo Branco"),
        ("Santarem", "Santarém"),
        ("Azores", "Açores"),
    ])
});

static SIZE_BRACKETS: Lazy<HashMap<&'static str, SizeCategory>> = Lazy::new(|| {
    HashMap::from([
        ("11-50", SizeCategory::P),
        ("51-200", SizeCategory::M),
        ("201-500", SizeCategory::L),
        ("501-1000", SizeCategory::G),
        ("1001-5000", SizeCategory::MG),
        ("5001-10000", SizeCategory::MG),
        ("10001+", SizeCategory::MG),
        // date artifact left behind by the spreadsheet export
        ("45931", SizeCategory::Unknown),
    ])
});

/// Missing region cells and the literal `null` both become `Unknown`.
pub fn clean_region(raw: Option<&str>) -> &str {
    match raw {
        None | Some("") | Some("null") => UNKNOWN_REGION,
        Some(region) => region,
    }
}

/// Apply the rename table; anything not in it passes through.
pub fn rename_region(region: &str) -> String {
    REGION_RENAMES
        .get(region)
        .copied()
        .unwrap_or(region)
        .to_string()
}

pub fn size_category(raw: &str) -> SizeCategory {
    SIZE_BRACKETS
        .get(raw)
        .copied()
        .unwrap_or(SizeCategory::Unknown)
}

pub fn normalize_record(record: &CompanyRecord) -> NormalizedRecord {
    let region = rename_region(clean_region(record.region_raw.as_deref()));

    NormalizedRecord {
        region,
        industry: record.industry.clone(),
        size_category: size_category(&record.size_raw),
    }
}

/// Clean, rename and bucket every row. Unmapped values never fail; they land
/// in the `Unknown` buckets.
pub fn normalize(records: &[CompanyRecord]) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> = records.iter().map(normalize_record).collect();

    let unknown_regions = normalized.iter().filter(|r| !r.has_known_region()).count();
    let unknown_sizes = normalized
        .iter()
        .filter(|r| !r.size_category.is_known())
        .count();
    tracing::debug!(
        rows = normalized.len(),
        unknown_regions,
        unknown_sizes,
        "normalized company rows"
    );

    normalized
}
