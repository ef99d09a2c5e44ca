// ============================================================
// GEO POLYGONS
// ============================================================
// District boundaries keyed by region name, as served by the geo dataset

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::{AppError, Result};

/// One boundary feature. Geometry is kept opaque; only the page draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPolygon {
    pub name: String,
    pub geometry: Value,
}

/// Polygon layer plus the raw FeatureCollection it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPolygonCollection {
    pub key_property: String,
    pub polygons: BTreeMap<String, GeoPolygon>,
    pub raw: Value,
    pub skipped_features: usize,
}

impl GeoPolygonCollection {
    /// Index a GeoJSON FeatureCollection by `properties.<key_property>`.
    ///
    /// Features without a string value for the key are skipped, not fatal.
    pub fn from_feature_collection(raw: Value, key_property: &str) -> Result<Self> {
        if raw.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(AppError::GeoError(
                "Document is not a GeoJSON FeatureCollection".to_string(),
            ));
        }

        let features = raw
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::GeoError("FeatureCollection has no features array".to_string()))?;

        let mut polygons = BTreeMap::new();
        let mut skipped_features = 0;

        for feature in features {
            let name = feature
                .get("properties")
                .and_then(|props| props.get(key_property))
                .and_then(Value::as_str);

            match name {
                Some(name) => {
                    let geometry = feature.get("geometry").cloned().unwrap_or(Value::Null);
                    polygons.insert(
                        name.to_string(),
                        GeoPolygon {
                            name: name.to_string(),
                            geometry,
                        },
                    );
                }
                None => skipped_features += 1,
            }
        }

        Ok(Self {
            key_property: key_property.to_string(),
            polygons,
            raw,
            skipped_features,
        })
    }

    pub fn get(&self, name: &str) -> Option<&GeoPolygon> {
        self.polygons.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.polygons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The property path a choropleth uses to match locations to features.
    pub fn feature_id_key(&self) -> String {
        format!("properties.{}", self.key_property)
    }

    /// Names from `regions` that have no boundary in this layer.
    pub fn missing<'a>(&self, regions: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        regions
            .into_iter()
            .filter(|name| !self.contains(name))
            .map(str::to_string)
            .collect()
    }
}
