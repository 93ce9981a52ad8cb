use std::time::Duration;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use scoring::PresetRegistry;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

mod config;
mod dto;
mod error;
mod features;
mod state;

use config::Config;
use features::{meets, scoring_rules, standings};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        meets::handlers::create_meet,
        meets::handlers::get_current_meet,
        meets::handlers::delete_current_meet,
        standings::handlers::get_club_standings,
        standings::handlers::get_swimmer_standings,
        scoring_rules::handlers::get_config,
        scoring_rules::handlers::update_config,
        scoring_rules::handlers::apply_preset,
        scoring_rules::handlers::list_presets,
    ),
    components(
        schemas(
            dto::CreateMeetRequest,
            dto::MeetSummaryResponse,
            dto::PresetResponse,
            scoring::models::ScoredMeet,
            scoring::models::Event,
            scoring::models::EventResult,
            scoring::models::EventRecords,
            scoring::models::QualifyingTimes,
            scoring::models::Swimmer,
            scoring::models::Club,
            scoring::models::Stroke,
            scoring::models::Gender,
            scoring::models::CourseType,
            scoring::models::StatusReason,
            scoring::models::ClubStanding,
            scoring::models::SwimmerStanding,
            scoring::models::SwimmerEventSummary,
            scoring::models::ScoringConfig,
            scoring::models::CategoryConfig,
            scoring::models::CategoryScoringRule,
            scoring::models::BonusPointConfig,
        )
    ),
    tags(
        (name = "meets", description = "Load, read and remove the current meet"),
        (name = "standings", description = "Club and swimmer standings of the current meet"),
        (name = "config", description = "Scoring rules and presets"),
    )
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api/meets", meets::routes::routes())
        .nest("/api/standings", standings::routes::routes())
        .nest("/api/config", scoring_rules::routes::config_routes())
        .nest("/api/presets", scoring_rules::routes::preset_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting swim meet scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let scoring_config = PresetRegistry::new()
        .get_by_name(&config.default_preset)
        .with_context(|| format!("Unknown DEFAULT_PRESET '{}'", config.default_preset))?;
    tracing::info!("Scoring with preset '{}'", scoring_config.id);

    let app = build_router(AppState::new(scoring_config));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "OpenAPI document available at http://{}/api-docs/openapi.json",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use scoring::PresetId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const RESULTS: &str = "Prueba 1 Fem., 50m Libre Clasificación \
        1 GARCIA, Ana 95 C.N. Uno 28.10 S \
        2 LOPEZ, Marta 12 C.D. Dos 28.40 S \
        3 SANZ, Eva 98 C.N. Uno 28.90 S";

    fn app() -> Router {
        let config = PresetRegistry::new().get(PresetId::ClmRegional2026).unwrap();
        build_router(AppState::new(config))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn load_meet(app: &Router) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/meets",
            Some(json!({ "name": "Trofeo", "text": RESULTS, "referenceYear": 2026 })),
        )
        .await
    }

    #[tokio::test]
    async fn test_list_presets() {
        let (status, body) = send(&app(), Method::GET, "/api/presets", None).await;

        assert_eq!(status, StatusCode::OK);
        let presets = body.as_array().unwrap();
        assert_eq!(presets.len(), 3);
        assert!(presets.iter().any(|p| p["id"] == "open-scoring"));
    }

    #[tokio::test]
    async fn test_no_meet_loaded() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/meets/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/api/standings/clubs", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_meet_then_read_standings() {
        let app = app();

        let (status, summary) = load_meet(&app).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(summary["eventCount"], 1);
        assert_eq!(summary["resultCount"], 3);
        assert_eq!(summary["clubCount"], 2);
        assert_eq!(summary["scoringConfigId"], "clm-regional-2026");

        let (status, clubs) = send(&app, Method::GET, "/api/standings/clubs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(clubs.as_array().unwrap().len(), 2);

        let (status, swimmers) = send(&app, Method::GET, "/api/standings/swimmers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(swimmers.as_array().unwrap().len(), 3);

        let (status, _) = send(&app, Method::DELETE, "/api/meets/current", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, "/api/meets/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreadable_text() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/meets",
            Some(json!({ "name": "Nada", "text": "Página 1 de 3" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/meets",
            Some(json!({ "name": "", "text": RESULTS })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_unknown_preset() {
        let (status, _) = send(&app(), Method::PUT, "/api/config/preset/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_switching_preset_rescores() {
        let app = app();
        load_meet(&app).await;

        let (status, config) =
            send(&app, Method::PUT, "/api/config/preset/open-scoring", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(config["id"], "open-scoring");

        let (_, current) = send(&app, Method::GET, "/api/config", None).await;
        assert_eq!(current["id"], "open-scoring");

        let (status, scored) = send(&app, Method::GET, "/api/meets/current", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scored["scoring_config_id"], "open-scoring");
    }

    #[tokio::test]
    async fn test_update_config_rejects_empty_scale() {
        let app = app();
        let (_, mut config) = send(&app, Method::GET, "/api/config", None).await;
        config["individualPoints"] = json!([]);

        let (status, _) = send(&app, Method::PUT, "/api/config", Some(config)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let (status, doc) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/api/meets"].is_object());
    }
}
