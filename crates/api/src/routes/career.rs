use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::instrument;

use super::parse_body;
use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{
    AnalyzeResumeRequest, ApiResponse, GenerateAtsResumeRequest, GenerateQuestionsRequest,
};

/// Analyze a resume for ATS compatibility
#[utoipa::path(
    post,
    path = "/api/ai-tools/analyze-resume",
    request_body = AnalyzeResumeRequest,
    responses(
        (status = 200, description = "Resume analyzed", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Analysis failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "career"
)]
#[instrument(skip(state, body))]
pub async fn analyze_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let request: AnalyzeResumeRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let analysis = state
        .tools
        .analyze_resume(request.resume_text())
        .await
        .map_err(|e| ApiError::tool(e, "Failed to analyze resume. Please try again."))?;

    Ok(Json(ApiResponse::success("Resume analyzed successfully", analysis)))
}

/// Generate interview questions tailored to a resume
#[utoipa::path(
    post,
    path = "/api/ai-tools/generate-questions",
    request_body = GenerateQuestionsRequest,
    responses(
        (status = 200, description = "Questions generated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Generation failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "career"
)]
#[instrument(skip(state, body))]
pub async fn generate_questions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let request: GenerateQuestionsRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let questions = state
        .tools
        .generate_interview_questions(request.resume_text(), &request.job_title())
        .await
        .map_err(|e| {
            ApiError::tool(e, "Failed to generate interview questions. Please try again.")
        })?;

    Ok(Json(ApiResponse::success(
        "Interview questions generated successfully",
        questions,
    )))
}

/// Rewrite a resume for ATS screening, preserving its layout
#[utoipa::path(
    post,
    path = "/api/ai-tools/generate-ats-resume",
    request_body = GenerateAtsResumeRequest,
    responses(
        (status = 200, description = "Resume generated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Invalid request", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Generation failed", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "career"
)]
#[instrument(skip(state, body))]
pub async fn generate_ats_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let request: GenerateAtsResumeRequest = parse_body(&body)?;
    request.validate(&state.config.limits)?;

    let resume = state
        .tools
        .generate_ats_resume(
            request.original_resume(),
            request.analysis(),
            &request.target_job_title(),
        )
        .await
        .map_err(|e| {
            ApiError::tool(e, "Failed to generate ATS-optimized resume. Please try again.")
        })?;

    Ok(Json(ApiResponse::success(
        "ATS-optimized resume generated successfully",
        resume,
    )))
}
