use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::application::{aggregate, normalize};
use crate::domain::company::CompanyRecord;
use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::geo::PolygonSource;
use crate::infrastructure::spreadsheet::load_records;
use crate::interfaces::http::{add_log, LogEntry};
use crate::interfaces::state::DashboardState;

/// Load the table, build the aggregates and fetch the district layer.
/// Any failure here aborts startup; there is no map-less mode.
pub async fn setup(
    config: DashboardConfig,
    polygon_source: &(dyn PolygonSource + Send + Sync),
    logs: Arc<Mutex<Vec<LogEntry>>>,
) -> Result<DashboardState> {
    let records = load_company_table(config.data_path.clone(), &logs).await?;

    let normalized = normalize(&records);
    let aggregates = aggregate(&normalized);
    add_log(
        &logs,
        "INFO",
        "Aggregator",
        &format!(
            "Aggregated {} rows into {} regions",
            normalized.len(),
            aggregates.len()
        ),
    );

    add_log(
        &logs,
        "INFO",
        "Geo",
        &format!("Fetching district boundaries from {}", polygon_source.describe()),
    );
    let polygons = polygon_source
        .fetch_polygons(&config.geo_key_property)
        .await
        .map_err(|err| {
            add_log(
                &logs,
                "ERROR",
                "Geo",
                &format!("Failed to load district boundaries: {}", err),
            );
            err
        })?;

    if polygons.skipped_features > 0 {
        add_log(
            &logs,
            "WARN",
            "Geo",
            &format!(
                "{} features have no '{}' property",
                polygons.skipped_features, config.geo_key_property
            ),
        );
    }

    let missing = polygons.missing(aggregates.region_names());
    if !missing.is_empty() {
        add_log(
            &logs,
            "WARN",
            "Geo",
            &format!("Regions without a boundary: {}", missing.join(", ")),
        );
    }

    add_log(
        &logs,
        "INFO",
        "Geo",
        &format!("Loaded {} district boundaries", polygons.len()),
    );

    Ok(DashboardState::new(config, aggregates, polygons, logs))
}

async fn load_company_table(
    path: PathBuf,
    logs: &Arc<Mutex<Vec<LogEntry>>>,
) -> Result<Vec<CompanyRecord>> {
    add_log(
        logs,
        "INFO",
        "Loader",
        &format!("Reading company table {}", path.display()),
    );

    let records = tokio::task::spawn_blocking(move || load_records(&path))
        .await
        .map_err(|err| AppError::Internal(format!("Loader worker failed: {}", err)))?
        .map_err(|err| {
            add_log(
                logs,
                "ERROR",
                "Loader",
                &format!("Failed to read company table: {}", err),
            );
            err
        })?;

    add_log(
        logs,
        "INFO",
        "Loader",
        &format!("Loaded {} company rows", records.len()),
    );
    Ok(records)
}
