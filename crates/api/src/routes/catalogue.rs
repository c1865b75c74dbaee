use axum::Json;
use tracing::instrument;

use crate::catalogue::{random_highlight, TOOLS};
use crate::error::ApiError;
use crate::types::{ApiResponse, ToolHighlight, ToolInfo};

/// List the available AI tools
#[utoipa::path(
    get,
    path = "/api/ai-tools",
    responses(
        (status = 200, description = "Tool catalogue", body = [ToolInfo])
    ),
    tag = "catalogue"
)]
#[instrument]
pub async fn list_tools() -> Json<ApiResponse<Vec<ToolInfo>>> {
    Json(ApiResponse::data(TOOLS.clone()))
}

/// Pick a random tool highlight for the dashboard
#[utoipa::path(
    get,
    path = "/api/ai-tools/highlight",
    responses(
        (status = 200, description = "A random highlight", body = ToolHighlight),
        (status = 500, description = "No highlight available", body = crate::openapi::EnvelopeDoc)
    ),
    tag = "catalogue"
)]
#[instrument]
pub async fn random_tool_highlight() -> Result<Json<ApiResponse<ToolHighlight>>, ApiError> {
    let highlight = random_highlight().ok_or_else(|| ApiError::Tool {
        message: "Failed to fetch tool highlight".to_string(),
    })?;
    Ok(Json(ApiResponse::data(highlight.clone())))
}
