use async_trait::async_trait;
use url::Url;

use crate::domain::error::{AppError, Result};
use crate::domain::geo::GeoPolygonCollection;

/// Where district boundaries come from.
#[async_trait]
pub trait PolygonSource {
    async fn fetch_polygons(&self, key_property: &str) -> Result<GeoPolygonCollection>;
    fn describe(&self) -> String;
}

/// Fetches a GeoJSON FeatureCollection with a single GET.
pub struct HttpPolygonSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpPolygonSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| AppError::ValidationError(format!("Invalid GeoJSON URL {}: {}", url, e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }
}

#[async_trait]
impl PolygonSource for HttpPolygonSource {
    async fn fetch_polygons(&self, key_property: &str) -> Result<GeoPolygonCollection> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| AppError::GeoError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::GeoError(format!("API error ({}): {}", status, text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::GeoError(format!("Failed to parse JSON: {}", e)))?;

        GeoPolygonCollection::from_feature_collection(json, key_property)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// A polygon layer that is already in memory.
pub struct StaticPolygonSource {
    document: serde_json::Value,
}

impl StaticPolygonSource {
    pub fn new(document: serde_json::Value) -> Self {
        Self { document }
    }
}

#[async_trait]
impl PolygonSource for StaticPolygonSource {
    async fn fetch_polygons(&self, key_property: &str) -> Result<GeoPolygonCollection> {
        GeoPolygonCollection::from_feature_collection(self.document.clone(), key_property)
    }

    fn describe(&self) -> String {
        "in-memory FeatureCollection".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_source_rejects_bad_url() {
        assert!(matches!(
            HttpPolygonSource::new("not a url"),
            Err(AppError::ValidationError(_))
        ));
        let source = HttpPolygonSource::new("https://example.com/districts.geojson").unwrap();
        assert_eq!(source.describe(), "https://example.com/districts.geojson");
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticPolygonSource::new(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "dis_name": "Faro" }, "geometry": null }
            ]
        }));
        let polygons = source.fetch_polygons("dis_name").await.unwrap();
        assert!(polygons.contains("Faro"));
    }

    #[tokio::test]
    async fn test_static_source_bad_document() {
        let source = StaticPolygonSource::new(json!([1, 2, 3]));
        assert!(source.fetch_polygons("dis_name").await.is_err());
    }
}
