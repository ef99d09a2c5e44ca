use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

pub const DEFAULT_GEOJSON_URL: &str = "https://data.opendatasoft.com/api/explore/v2.1/catalog/datasets/districts-portugal@e-redes/exports/geojson?lang=en&timezone=Europe%2FBerlin";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Spreadsheet with the company rows (`.xlsx` or `.csv`)
    pub data_path: PathBuf,
    #[validate(url)]
    pub geojson_url: String,
    /// Feature property holding the district name
    #[validate(length(min = 1))]
    pub geo_key_property: String,
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub log_filter: String,
    #[validate(url)]
    pub plotly_src: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("planilha.xlsx"),
            geojson_url: DEFAULT_GEOJSON_URL.to_string(),
            geo_key_property: "dis_name".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8050,
            log_filter: "info".to_string(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
