//! HTTP handlers, grouped by tool category

pub mod career;
pub mod catalogue;
pub mod development;
pub mod education;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Parse a JSON request body with line/column detail on failure.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    debug!(body_size = body.len(), "Parsing request body");
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, line = e.line(), column = e.column(), "Request body is not valid JSON");
        ApiError::validation(format!(
            "Invalid JSON at line {}, column {}: {}",
            e.line(),
            e.column(),
            e
        ))
    })
}
