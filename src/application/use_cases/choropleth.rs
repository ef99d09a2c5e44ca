use serde::Serialize;
use serde_json::Value;

use super::aggregator::COLOR_SCALE;
use crate::domain::geo::GeoPolygonCollection;
use crate::domain::region::{Aggregates, LegendBucket};

pub const MAP_STYLE: &str = "carto-darkmatter";
pub const MAP_ZOOM: f64 = 4.0;
pub const MAP_CENTER: MapCenter = MapCenter {
    lat: 39.3999,
    lon: -8.2245,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

/// Region counts joined to the district layer, ready for a choropleth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub locations: Vec<String>,
    pub counts: Vec<usize>,
    pub range_color: Option<(usize, usize)>,
    pub color_scale: Vec<String>,
    pub legend: Vec<LegendBucket>,
    pub feature_id_key: String,
    pub map_style: String,
    pub center: MapCenter,
    pub zoom: f64,
    pub geojson: Value,
}

pub fn build_map_view(aggregates: &Aggregates, polygons: &GeoPolygonCollection) -> MapView {
    let (locations, counts): (Vec<String>, Vec<usize>) = aggregates
        .regions
        .iter()
        .map(|(region, aggregate)| (region.clone(), aggregate.company_count))
        .unzip();

    MapView {
        locations,
        counts,
        range_color: aggregates.count_range(),
        color_scale: COLOR_SCALE.iter().map(|c| c.to_string()).collect(),
        legend: aggregates.legend.clone(),
        feature_id_key: polygons.feature_id_key(),
        map_style: MAP_STYLE.to_string(),
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        geojson: polygons.raw.clone(),
    }
}
