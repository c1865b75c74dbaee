//! HTTP-facing errors
//!
//! Every failure leaves the server as the `{ "success": false, "message": ... }`
//! envelope. Upstream error details are logged, never echoed to the client.

use ai_tools_common::{LlmError, TransientKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::types::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed parsing or field validation
    #[error("{0}")]
    Validation(String),

    /// A tool failed and no degraded answer is available
    #[error("{message}")]
    Tool { message: String },

    /// The model is temporarily out of reach and fallback is disabled
    #[error("{message}")]
    Unavailable { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Log the upstream failure and replace it with a client-safe message.
    pub fn tool(source: LlmError, message: impl Into<String>) -> Self {
        let message = message.into();
        error!(error = %source, "{}", message);
        Self::Tool { message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Tool { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Map a complexity-analysis failure onto the message the client sees.
pub fn complexity_error(source: LlmError) -> ApiError {
    match source.transient_kind() {
        Some(kind) => {
            warn!(error = %source, "Complexity analysis unavailable and fallback disabled");
            let message = match kind {
                TransientKind::ServiceUnavailable => {
                    "AI service is temporarily unavailable. Please try again in a few minutes."
                }
                TransientKind::RateLimited => {
                    "Too many requests. Please wait a moment before trying again."
                }
            };
            ApiError::Unavailable {
                message: message.to_string(),
            }
        }
        None => ApiError::tool(source, "Failed to analyze time complexity. Please try again."),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::tool(LlmError::fatal("boom"), "Failed").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_complexity_error_messages() {
        let err = complexity_error(LlmError::transient(TransientKind::RateLimited, "429"));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Too many requests. Please wait a moment before trying again.");

        let err = complexity_error(LlmError::fatal("400 - bad"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to analyze time complexity. Please try again.");
    }
}
