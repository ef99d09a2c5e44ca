use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::{build_map_view, on_region_selected};
use crate::domain::display::{SelectionState, PLACEHOLDER_TITLE};
use crate::infrastructure::response::render_template;
use crate::interfaces::state::DashboardState;

const PAGE_TEMPLATE: &str = include_str!("page.html");
const PAGE_TITLE: &str = "Empresas por Distrito";
const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub company_count: usize,
    pub dominant_industry: String,
}

#[get("/")]
async fn index(data: web::Data<DashboardState>) -> impl Responder {
    let vars = HashMap::from([
        ("page_title", PAGE_TITLE.to_string()),
        ("placeholder_title", PLACEHOLDER_TITLE.to_string()),
        ("plotly_src", data.config.plotly_src.clone()),
    ]);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_template(PAGE_TEMPLATE, &vars))
}

#[get("/map")]
async fn map(data: web::Data<DashboardState>) -> impl Responder {
    HttpResponse::Ok().json(build_map_view(&data.aggregates, &data.polygons))
}

#[get("/selection")]
async fn selection(
    data: web::Data<DashboardState>,
    query: web::Query<SelectionQuery>,
) -> impl Responder {
    let state = SelectionState::from_key(query.region.as_deref());
    if let Some(region) = state.region() {
        add_log(
            &data.logs,
            "INFO",
            "Selection",
            &format!("Region selected: {}", region),
        );
    }

    HttpResponse::Ok().json(on_region_selected(state.region(), &data.aggregates))
}

#[get("/regions")]
async fn regions(data: web::Data<DashboardState>) -> impl Responder {
    let summaries: Vec<RegionSummary> = data
        .aggregates
        .regions
        .iter()
        .map(|(region, aggregate)| RegionSummary {
            region: region.clone(),
            company_count: aggregate.company_count,
            dominant_industry: aggregate.dominant_industry.clone(),
        })
        .collect();
    HttpResponse::Ok().json(summaries)
}

#[get("/health")]
async fn health(data: web::Data<DashboardState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "regions": data.aggregates.len(),
        "polygons": data.polygons.len(),
    }))
}

#[get("/logs")]
async fn get_logs(data: web::Data<DashboardState>) -> impl Responder {
    let logs = match data.logs.lock() {
        Ok(logs) => logs.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    HttpResponse::Ok().json(logs)
}

/// Register the page and the `/api` scope on an app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope("/api")
            .service(map)
            .service(selection)
            .service(regions)
            .service(health)
            .service(get_logs),
    );
}

/// Record a log line in the in-memory buffer and forward it to tracing.
pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    match level {
        "ERROR" => tracing::error!(source, "{}", message),
        "WARN" => tracing::warn!(source, "{}", message),
        "DEBUG" => tracing::debug!(source, "{}", message),
        _ => tracing::info!(source, "{}", message),
    }

    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = match logs.lock() {
        Ok(logs) => logs,
        Err(poisoned) => poisoned.into_inner(),
    };
    logs.push(entry.clone());
    if logs.len() > MAX_LOG_ENTRIES {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(state: Arc<DashboardState>) -> std::io::Result<Server> {
    let (host, port) = state.config.bind_address();
    let data = web::Data::from(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{aggregate, normalize};
    use crate::domain::company::CompanyRecord;
    use crate::domain::dashboard_config::DashboardConfig;
    use crate::domain::display::DisplayModel;
    use crate::domain::geo::GeoPolygonCollection;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    fn state() -> web::Data<DashboardState> {
        let records = vec![
            CompanyRecord::new(Some("Lisbon"), "IT", "11-50"),
            CompanyRecord::new(Some("Lisbon"), "IT", "51-200"),
            CompanyRecord::new(Some("Lisbon"), "HR", "51-200"),
            CompanyRecord::new(Some("Porto"), "Construction", "501-1000"),
        ];
        let polygons = GeoPolygonCollection::from_feature_collection(
            json!({
                "type": "FeatureCollection",
                "features": [
                    { "type": "Feature", "properties": { "dis_name": "Lisboa" }, "geometry": null },
                    { "type": "Feature", "properties": { "dis_name": "Porto" }, "geometry": null }
                ]
            }),
            "dis_name",
        )
        .unwrap();

        web::Data::new(DashboardState::new(
            DashboardConfig::default(),
            aggregate(&normalize(&records)),
            polygons,
            Arc::new(Mutex::new(Vec::new())),
        ))
    }

    #[actix_web::test]
    async fn test_selection_without_region_is_placeholder() {
        let app = actix_test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = actix_test::TestRequest::get().uri("/api/selection").to_request();
        let model: DisplayModel = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(model, DisplayModel::placeholder());
    }

    #[actix_web::test]
    async fn test_selection_for_region() {
        let app = actix_test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/selection?region=Lisboa")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Lisboa");
        assert_eq!(body["companyCount"], 3);
        assert_eq!(body["topSegmentText"], "Maior Segmento: IT");
    }

    #[actix_web::test]
    async fn test_selection_for_unknown_region_is_ok() {
        let app = actix_test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/selection?region=Guarda")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["companyCount"], 0);
        assert_eq!(body["dominantIndustry"], "N/A");
    }

    #[actix_web::test]
    async fn test_map_and_index() {
        let data = state();
        let app = actix_test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

        let req = actix_test::TestRequest::get().uri("/api/map").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["locations"], json!(["Lisboa", "Porto"]));
        assert_eq!(body["counts"], json!([3, 1]));

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let html = actix_test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(html.to_vec()).unwrap();
        assert!(html.contains(PLACEHOLDER_TITLE));
        assert!(html.contains(&data.config.plotly_src));
        assert!(!html.contains("{{"));
    }

    #[actix_web::test]
    async fn test_selection_is_logged() {
        let data = state();
        let app = actix_test::init_service(App::new().app_data(data.clone()).configure(configure)).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/selection?region=Porto")
            .to_request();
        actix_test::call_service(&app, req).await;

        let req = actix_test::TestRequest::get().uri("/api/logs").to_request();
        let logs: Vec<LogEntry> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].source, "Selection");
    }

    #[test]
    fn test_log_buffer_is_bounded() {
        let logs = Mutex::new(Vec::new());
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            add_log(&logs, "INFO", "Test", &format!("entry {}", i));
        }
        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }
}
