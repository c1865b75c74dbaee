use ai_tools_common::{GeminiClient, SystemConfig, TextGenerator};
use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::middleware::{get_tracing_layer, logging_middleware};
use crate::openapi::ApiDoc;
use crate::routes::{career, catalogue, development, education};
use crate::services::AiToolsService;
use crate::types::HealthResponse;

pub const API_PREFIX: &str = "/api/ai-tools";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SystemConfig>,
    pub tools: Arc<AiToolsService>,
}

impl AppState {
    pub fn new(config: SystemConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let tools = AiToolsService::new(generator, config.analyzer.clone());
        Self {
            config: Arc::new(config),
            tools: Arc::new(tools),
        }
    }

    /// State backed by the real Gemini client.
    pub fn from_config(config: SystemConfig) -> Result<Self> {
        let client = GeminiClient::new(&config.gemini).context("Failed to build Gemini client")?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_configured: state.config.has_api_key(),
        timestamp: Utc::now(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o)))
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Result<Router> {
    let tools = Router::new()
        .route("/", get(catalogue::list_tools))
        .route("/highlight", get(catalogue::random_tool_highlight))
        .route("/generate-code", post(development::generate_code))
        .route("/review-code", post(development::review_code))
        .route("/analyze-complexity", post(development::analyze_complexity))
        .route("/analyze-resume", post(career::analyze_resume))
        .route("/generate-questions", post(career::generate_questions))
        .route("/generate-ats-resume", post(career::generate_ats_resume))
        .route("/explain-algorithm", post(education::explain_algorithm))
        .route("/generate-roadmap", post(education::generate_roadmap));

    let cors = cors_layer(&state.config.server.cors_allowed_origins)?;
    let body_limit = state.config.server.request_body_limit_bytes;

    Ok(Router::new()
        .nest(API_PREFIX, tools)
        .route("/health", get(health_check))
        .route("/api-doc/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(get_tracing_layer())
        .layer(cors)
        .with_state(state))
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn run(self) -> Result<()> {
        let addr = format!(
            "{}:{}",
            self.state.config.server.host, self.state.config.server.port
        );
        let app = build_router(self.state)?;
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("AI tools server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("AI tools server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
