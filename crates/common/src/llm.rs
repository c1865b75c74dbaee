//! Text-generation client
//!
//! [`TextGenerator`] is the seam the tools service depends on; [`GeminiClient`]
//! implements it against the Gemini `generateContent` REST endpoint. Failures
//! come back as a typed [`LlmError`] so callers branch on transient vs fatal
//! instead of inspecting message text.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::{LlmError, LlmResult, Result, TransientKind};

/// Returned when a candidate carries neither `text` nor `parts`.
pub const NO_GENERATED_TEXT: &str = "[No generated text found]";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: UpstreamError,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl CandidateContent {
    fn into_text(self) -> String {
        if let Some(text) = self.text {
            text
        } else if !self.parts.is_empty() {
            self.parts.into_iter().map(|p| p.text).collect()
        } else {
            NO_GENERATED_TEXT.to_string()
        }
    }
}

/// Map an HTTP failure onto transient/fatal.
///
/// 503 or an upstream `UNAVAILABLE` status means the service is down; 429 or
/// `RESOURCE_EXHAUSTED` means we are rate limited. Everything else is fatal.
pub fn classify_failure(
    status: StatusCode,
    upstream_status: Option<&str>,
    reason: String,
) -> LlmError {
    match (status, upstream_status) {
        (StatusCode::SERVICE_UNAVAILABLE, _) | (_, Some("UNAVAILABLE")) => {
            LlmError::transient(TransientKind::ServiceUnavailable, reason)
        }
        (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some("RESOURCE_EXHAUSTED")) => {
            LlmError::transient(TransientKind::RateLimited, reason)
        }
        _ => LlmError::fatal(reason),
    }
}

/// Gemini HTTP client. Built once from config, cheap to clone.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        if config.api_key.is_none() {
            warn!("No Gemini API key configured; upstream calls will be rejected");
        }

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), endpoint = %self.endpoint))]
    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        // The request URL carries the API key, so it is stripped from every error.
        let response = request.send().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Gemini request could not be sent");
            LlmError::fatal(format!("Gemini API Error: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let upstream = serde_json::from_str::<ErrorEnvelope>(&raw).ok().map(|e| e.error);
            let message = upstream
                .as_ref()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| "Unknown error".to_string());
            let upstream_status = upstream.as_ref().and_then(|e| e.status.as_deref());

            error!(
                status = %status,
                upstream_status = ?upstream_status,
                "Gemini API returned an error"
            );
            return Err(classify_failure(
                status,
                upstream_status,
                format!("Gemini API Error: {} - {}", status.as_u16(), message),
            ));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                LlmError::fatal(format!("Failed to decode Gemini response: {}", e.without_url()))
            })?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::fatal("Gemini response contained no candidates"))?;

        let text = candidate.content.into_text();
        debug!(response_len = text.len(), "Gemini generation complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let config = GeminiConfig {
            base_url: "http://localhost:9999/v1beta/".to_string(),
            model: "gemini-test".to_string(),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_classify_failure() {
        assert_eq!(
            classify_failure(StatusCode::SERVICE_UNAVAILABLE, None, "x".into()).transient_kind(),
            Some(TransientKind::ServiceUnavailable)
        );
        assert_eq!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, None, "x".into()).transient_kind(),
            Some(TransientKind::RateLimited)
        );
        assert_eq!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, Some("UNAVAILABLE"), "x".into())
                .transient_kind(),
            Some(TransientKind::ServiceUnavailable)
        );
        assert!(!classify_failure(StatusCode::BAD_REQUEST, Some("INVALID_ARGUMENT"), "x".into())
            .is_transient());
    }

    #[test]
    fn test_candidate_text_preference() {
        let direct = CandidateContent {
            text: Some("direct".into()),
            parts: vec![ResponsePart { text: "ignored".into() }],
        };
        assert_eq!(direct.into_text(), "direct");

        let joined = CandidateContent {
            text: None,
            parts: vec![
                ResponsePart { text: "a".into() },
                ResponsePart { text: "b".into() },
            ],
        };
        assert_eq!(joined.into_text(), "ab");

        assert_eq!(CandidateContent::default().into_text(), NO_GENERATED_TEXT);
    }
}
