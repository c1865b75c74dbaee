use axum::{body::Bytes, extract::State, Json};
use tracing::{info, instrument};

use super::parse_body;
use crate::error::{complexity_error, ApiError};
use crate::server::AppState;
use crate::services::ComplexityOutcome;
use crate::types::{ApiResponse, CodeRequest, GenerateCodeRequest, GeneratedCode};

/// Generate code for a problem statement
///
/// The model output is stripped of code fences, language tags and comments.
#[utoipa::path(
    post,
    path = "/api/ai-tools/generate-code",
    request_body = GenerateCodeRequest,
    responses(
        (status = 200, description = "Code generated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Generation failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "development"
)]
#[instrument(skip(state, body))]
pub async fn generate_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<GeneratedCode>>, ApiError> {
    let request: GenerateCodeRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let language = request.language();
    let code = state
        .tools
        .generate_code(request.problem_statement(), language)
        .await
        .map_err(|e| ApiError::tool(e, "Failed to generate code. Please try again."))?;

    Ok(Json(ApiResponse::success(
        "Code generated successfully",
        GeneratedCode {
            code,
            language,
            problem_statement: request.problem_statement().to_string(),
        },
    )))
}

/// Review code for quality, security and performance issues
#[utoipa::path(
    post,
    path = "/api/ai-tools/review-code",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Review completed", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Review failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "development"
)]
#[instrument(skip(state, body))]
pub async fn review_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let request: CodeRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let review = state
        .tools
        .review_code(request.code(), request.language())
        .await
        .map_err(|e| ApiError::tool(e, "Failed to review code. Please try again."))?;

    Ok(Json(ApiResponse::success("Code reviewed successfully", review)))
}

/// Analyze time and space complexity
///
/// When the model is unavailable or returns an unusable reply, the report
/// comes from the local heuristic analyzer and `isFallback` is `true`.
#[utoipa::path(
    post,
    path = "/api/ai-tools/analyze-complexity",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Analysis completed, possibly via fallback", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Analysis failed", body = crate::openapi::EnvelopeDoc),
        (status = 503, description = "Model unavailable and fallback disabled", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "development"
)]
#[instrument(skip(state, body))]
pub async fn analyze_complexity(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<ComplexityOutcome>>, ApiError> {
    let request: CodeRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let outcome = state
        .tools
        .analyze_complexity(request.code(), request.language())
        .await
        .map_err(complexity_error)?;

    let is_fallback = outcome.is_fallback();
    info!(is_fallback, "Complexity analysis served");

    let message = if is_fallback {
        "Time complexity analysis completed using fallback analysis (AI service temporarily unavailable)"
    } else {
        "Time complexity analysis completed successfully"
    };
    Ok(Json(ApiResponse::success(message, outcome).with_fallback(is_fallback)))
}
