use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::instrument;

use super::parse_body;
use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiResponse, ExplainAlgorithmRequest, GenerateRoadmapRequest};

/// Explain an algorithm at the requested depth
#[utoipa::path(
    post,
    path = "/api/ai-tools/explain-algorithm",
    request_body = ExplainAlgorithmRequest,
    responses(
        (status = 200, description = "Algorithm explained", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Explanation failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "education"
)]
#[instrument(skip(state, body))]
pub async fn explain_algorithm(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let request: ExplainAlgorithmRequest = parse_body(&body)?;
    request.validate()?;

    let explanation = state
        .tools
        .explain_algorithm(request.algorithm_name(), request.depth())
        .await
        .map_err(|e| ApiError::tool(e, "Failed to explain algorithm. Please try again."))?;

    Ok(Json(ApiResponse::success("Algorithm explained successfully", explanation)))
}

/// Generate a learning roadmap for a tech domain
#[utoipa::path(
    post,
    path = "/api/ai-tools/generate-roadmap",
    request_body = GenerateRoadmapRequest,
    responses(
        (status = 200, description = "Roadmap generated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Generation failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "education"
)]
#[instrument(skip(state, body))]
pub async fn generate_roadmap(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let request: GenerateRoadmapRequest = parse_body(&body)?;
    request.validate()?;

    let roadmap = state
        .tools
        .generate_roadmap(
            request.domain(),
            request.experience_level(),
            &request.focus_areas(),
        )
        .await
        .map_err(|e| ApiError::tool(e, "Failed to generate roadmap. Please try again."))?;

    Ok(Json(ApiResponse::success(
        "Learning roadmap generated successfully",
        roadmap,
    )))
}
