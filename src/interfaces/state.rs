use std::sync::{Arc, Mutex};

use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::geo::GeoPolygonCollection;
use crate::domain::region::Aggregates;
use crate::interfaces::http::LogEntry;

/// Everything the HTTP handlers read. Built once at startup; only the log
/// buffer changes afterwards.
pub struct DashboardState {
    pub config: DashboardConfig,
    pub aggregates: Arc<Aggregates>,
    pub polygons: Arc<GeoPolygonCollection>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

impl DashboardState {
    pub fn new(
        config: DashboardConfig,
        aggregates: Aggregates,
        polygons: GeoPolygonCollection,
        logs: Arc<Mutex<Vec<LogEntry>>>,
    ) -> Self {
        Self {
            config,
            aggregates: Arc::new(aggregates),
            polygons: Arc::new(polygons),
            logs,
        }
    }
}
