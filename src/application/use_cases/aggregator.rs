use std::collections::{BTreeMap, HashMap};

use crate::domain::company::NormalizedRecord;
use crate::domain::region::{Aggregates, LegendBucket, RegionAggregate, NO_INDUSTRY};

/// Low -> high company count.
pub const COLOR_SCALE: [&str; 3] = ["#D3D3D3", "#7AB34F", "#2E5D1C"];

/// Group normalized rows by region. Rows in the `Unknown` region are left out
/// of every view; rows with an `Unknown` size only count towards
/// `company_count`, never towards `size_breakdown`.
pub fn aggregate(records: &[NormalizedRecord]) -> Aggregates {
    let mut grouped: BTreeMap<&str, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.has_known_region()) {
        grouped.entry(record.region.as_str()).or_default().push(record);
    }

    let regions: BTreeMap<String, RegionAggregate> = grouped
        .into_iter()
        .map(|(region, rows)| (region.to_string(), aggregate_region(&rows)))
        .collect();

    let counts: Vec<usize> = regions.values().map(|r| r.company_count).collect();
    let legend = legend_buckets(&counts);

    tracing::debug!(regions = regions.len(), "aggregated company rows");

    Aggregates { regions, legend }
}

fn aggregate_region(rows: &[&NormalizedRecord]) -> RegionAggregate {
    let mut industry_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut size_breakdown = BTreeMap::new();

    for row in rows {
        *industry_breakdown.entry(row.industry.clone()).or_insert(0) += 1;
        if row.size_category.is_known() {
            *size_breakdown.entry(row.size_category).or_insert(0) += 1;
        }
    }

    RegionAggregate {
        company_count: rows.len(),
        dominant_industry: dominant_industry(rows.iter().map(|r| r.industry.as_str()))
            .unwrap_or_else(|| NO_INDUSTRY.to_string()),
        industry_breakdown,
        size_breakdown,
    }
}

/// Most frequent value; on a tie the value seen first wins.
pub fn dominant_industry<'a>(industries: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for industry in industries {
        let count = counts.entry(industry).or_insert(0);
        if *count == 0 {
            first_seen.push(industry);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for industry in first_seen {
        let count = counts[industry];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((industry, count)),
        }
    }

    best.map(|(industry, _)| industry.to_string())
}

/// Split `[min, max]` of the counts into three equal-width buckets, the
/// lowest one including `min`. No counts means no legend.
pub fn legend_buckets(counts: &[usize]) -> Vec<LegendBucket> {
    let (Some(min), Some(max)) = (counts.iter().min(), counts.iter().max()) else {
        return Vec::new();
    };
    let (min, max) = (*min as f64, *max as f64);
    let step = (max - min) / COLOR_SCALE.len() as f64;

    let edges: Vec<f64> = (0..=COLOR_SCALE.len())
        .map(|k| if k == COLOR_SCALE.len() { max } else { min + k as f64 * step })
        .collect();

    COLOR_SCALE
        .iter()
        .enumerate()
        .map(|(i, color)| LegendBucket {
            lower: edges[i],
            upper: edges[i + 1],
            color: color.to_string(),
            label: format!("{} - {}", edges[i].trunc() as i64, edges[i + 1].trunc() as i64),
        })
        .collect()
}
