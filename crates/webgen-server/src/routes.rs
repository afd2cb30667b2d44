//! HTTP routes
//!
//! Endpoints:
//!   GET  /
//!   GET  /api/health
//!   POST /api/generate
//!   POST /api/lead
//!   POST /api/error-log
//!   GET  /api/stores/:id/config
//!   PUT  /api/stores/:id/config
//!   POST /api/stores/:id/config/reset

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use generation::{GeneratedSite, SiteRequest};
use storefront::{StoreConfig, StoreOwner};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;
use crate::validate;

pub const SERVICE_NAME: &str = "WebGen AI Backend";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/generate", post(generate))
        .route("/api/lead", post(capture_lead))
        .route("/api/error-log", post(log_client_error))
        .route(
            "/api/stores/:id/config",
            get(get_store_config).put(put_store_config),
        )
        .route("/api/stores/:id/config/reset", post(reset_store_config))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "route not found" })),
    )
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "WebGen AI backend running",
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "/api/health",
            "generate": "/api/generate (POST)",
            "lead": "/api/lead (POST)",
            "storeConfig": "/api/stores/:id/config",
        }
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "aiConfigured": state.has_ai,
        "model": state.model,
        "uptimeSeconds": state.uptime_seconds(),
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub html: String,
    pub css: String,
    pub js: String,
    pub metadata: GenerateMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMetadata {
    #[serde(flatten)]
    pub request: SiteRequest,
    pub generated_at: String,
    pub session_id: String,
    pub model: String,
    pub has_ai: bool,
    /// Sections that came from the built-in fallback page
    pub filled_sections: Vec<String>,
}

async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<SiteRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    validate::validate_generate(&request)?;

    let session_id = headers
        .get("x-session-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("sess_{}", Uuid::new_v4().simple()));

    info!(
        "generating demo for {:?} (session {session_id})",
        request.business_type
    );

    let outcome = state.generation.generate(&request).await.map_err(|err| {
        error!("generation failed: {err}");
        let help = if state.has_ai {
            "the completion API token is configured but the request failed".to_string()
        } else {
            "set REPLICATE_API_TOKEN to generate with a hosted model".to_string()
        };
        ApiError::Generation {
            message: err.to_string(),
            help,
        }
    })?;

    let stats = outcome.site.stats();
    info!(
        "demo generated: html {} chars, css {} chars, js {} chars",
        stats.html_chars, stats.css_chars, stats.js_chars
    );
    let GeneratedSite { html, css, js } = outcome.site;

    Ok(Json(GenerateResponse {
        success: true,
        html,
        css,
        js,
        metadata: GenerateMetadata {
            request,
            generated_at: Utc::now().to_rfc3339(),
            session_id,
            model: outcome.model.unwrap_or_else(|| state.model.clone()),
            has_ai: state.has_ai,
            filled_sections: outcome
                .filled_sections
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub email: String,
}

async fn capture_lead(ApiJson(lead): ApiJson<LeadRequest>) -> Result<Json<Value>, ApiError> {
    validate::validate_lead_email(&lead.email)?;

    // No CRM behind this yet; the log line is the record
    info!("lead captured: {}", lead.email);

    Ok(Json(json!({
        "success": true,
        "message": "lead recorded",
        "email": lead.email,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

async fn log_client_error(ApiJson(payload): ApiJson<Value>) -> Json<Value> {
    let scrubbed = validate::scrub_text(payload);
    error!("frontend error: {scrubbed}");
    Json(json!({ "success": true, "message": "error logged" }))
}

async fn get_store_config(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<String>,
) -> Result<Json<StoreConfig>, ApiError> {
    let config = state.configs.load(&store_id).await?;
    Ok(Json(config))
}

async fn put_store_config(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<String>,
    headers: HeaderMap,
    ApiJson(config): ApiJson<StoreConfig>,
) -> Result<Json<Value>, ApiError> {
    let owner = owner_from_headers(&headers);
    state.configs.save(&store_id, &config, &owner).await?;
    Ok(Json(json!({
        "success": true,
        "storeId": store_id,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

async fn reset_store_config(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<StoreConfig>, ApiError> {
    let owner = owner_from_headers(&headers);
    let config = state.configs.restore_defaults(&store_id, &owner).await?;
    Ok(Json(config))
}

fn owner_from_headers(headers: &HeaderMap) -> StoreOwner {
    let header = |name: &str, fallback: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(fallback)
            .to_string()
    };
    StoreOwner {
        id: header("x-owner-id", "anonymous"),
        email: header("x-owner-email", "unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generation::backend::local::LocalDemoBackend;
    use generation::{
        BusinessType, Feature, GenerationConfig, GenerationService, Goal, Style,
    };
    use storefront::{ConfigManager, FileDocumentStore};

    fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        let backend = Arc::new(LocalDemoBackend::new());
        let service = Arc::new(GenerationService::new(backend, GenerationConfig::instant()));
        let configs = ConfigManager::new(Arc::new(FileDocumentStore::new(dir.path())));
        Arc::new(AppState::new(service, configs, false))
    }

    fn site_request() -> SiteRequest {
        SiteRequest {
            business_type: BusinessType::Restaurant,
            features: vec![Feature::Hours, Feature::Whatsapp],
            goal: Goal::Messages,
            style: Style::Modern,
        }
    }

    #[tokio::test]
    async fn health_reports_local_model_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let Json(body) = health(State(test_state(&dir))).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["aiConfigured"], false);
        assert_eq!(body["model"], "local");
    }

    #[tokio::test]
    async fn generate_returns_all_three_sections() {
        let dir = tempfile::tempdir().unwrap();
        let response = generate(
            State(test_state(&dir)),
            HeaderMap::new(),
            ApiJson(site_request()),
        )
        .await
        .unwrap();

        assert!(response.0.success);
        assert!(!response.0.html.is_empty());
        assert!(!response.0.css.is_empty());
        assert!(!response.0.js.is_empty());
        assert!(response.0.metadata.session_id.starts_with("sess_"));
        assert!(!response.0.metadata.has_ai);
    }

    #[tokio::test]
    async fn generate_echoes_the_session_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-session-id", "sess_from_client".parse().unwrap());
        let response = generate(State(test_state(&dir)), headers, ApiJson(site_request()))
            .await
            .unwrap();
        assert_eq!(response.0.metadata.session_id, "sess_from_client");
    }

    #[tokio::test]
    async fn generate_rejects_too_many_features() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = site_request();
        request.features = vec![Feature::ContactForm; 6];
        let err = generate(State(test_state(&dir)), HeaderMap::new(), ApiJson(request))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn lead_capture_validates_email() {
        let ok = capture_lead(ApiJson(LeadRequest {
            email: "maria@example.com".into(),
        }))
        .await
        .unwrap();
        assert_eq!(ok.0["success"], true);

        let err = capture_lead(ApiJson(LeadRequest {
            email: "x@mailinator.com".into(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn error_log_always_acks() {
        let Json(body) = log_client_error(ApiJson(json!({
            "message": "TypeError <script>alert(1)</script>",
            "url": "/demo"
        })))
        .await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn store_config_roundtrip_through_handlers() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        // unknown store loads defaults
        let loaded = get_store_config(State(state.clone()), Path("demo".to_string()))
            .await
            .unwrap();
        assert_eq!(loaded.0, StoreConfig::default());

        let mut edited = StoreConfig::default();
        edited.general.store_name = "Corner Bakery".into();
        let saved = put_store_config(
            State(state.clone()),
            Path("demo".to_string()),
            HeaderMap::new(),
            ApiJson(edited.clone()),
        )
        .await
        .unwrap();
        assert_eq!(saved.0["success"], true);

        let reloaded = get_store_config(State(state.clone()), Path("demo".to_string()))
            .await
            .unwrap();
        assert_eq!(reloaded.0.general.store_name, "Corner Bakery");

        let reset = reset_store_config(
            State(state.clone()),
            Path("demo".to_string()),
            HeaderMap::new(),
        )
        .await
        .unwrap();
        assert_eq!(reset.0, StoreConfig::default());
    }

    #[tokio::test]
    async fn unknown_routes_get_a_json_404() {
        let (status, Json(body)) = not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[test]
    fn router_builds() {
        let dir = tempfile::tempdir().unwrap();
        let _router = build_router(test_state(&dir));
    }
}
