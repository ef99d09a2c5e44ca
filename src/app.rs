use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::geo::HttpPolygonSource;
use crate::interfaces::http::{add_log, LogEntry};

pub async fn run() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = ConfigService::new().load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));
    let polygon_source = HttpPolygonSource::new(&config.geojson_url)?;

    let state = crate::infrastructure::bootstrap::setup(config, &polygon_source, logs.clone())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Startup failed");
            err
        })?;
    let state = Arc::new(state);

    let (host, port) = state.config.bind_address();
    let server = crate::interfaces::http::start_server(state)
        .map_err(|err| AppError::Internal(format!("Failed to bind {}:{}: {}", host, port, err)))?;

    add_log(
        &logs,
        "INFO",
        "System",
        &format!("Dashboard listening on http://{}:{}", host, port),
    );

    server.await?;
    Ok(())
}
