//! GeminiClient against a mock upstream

use ai_tools_common::config::GeminiConfig;
use ai_tools_common::error::{LlmError, TransientKind};
use ai_tools_common::llm::{GeminiClient, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

async fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig {
        base_url: format!("{}/v1beta", server.uri()),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        ..GeminiConfig::default()
    };
    GeminiClient::new(&config).unwrap()
}

async fn mount_status(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generate_returns_candidate_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({"contents": [{"parts": [{"text": "hello"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Hi "}, {"text": "there"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let text = client.generate("hello").await.unwrap();
    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn test_503_is_transient_service_unavailable() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        503,
        json!({"error": {"message": "overloaded", "status": "UNAVAILABLE"}}),
    )
    .await;

    let err = client_for(&server).await.generate("x").await.unwrap_err();
    assert_eq!(err.transient_kind(), Some(TransientKind::ServiceUnavailable));
    assert!(err.to_string().contains("503 - overloaded"));
}

#[tokio::test]
async fn test_429_is_transient_rate_limited() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        429,
        json!({"error": {"message": "quota", "status": "RESOURCE_EXHAUSTED"}}),
    )
    .await;

    let err = client_for(&server).await.generate("x").await.unwrap_err();
    assert_eq!(err.transient_kind(), Some(TransientKind::RateLimited));
}

#[tokio::test]
async fn test_400_is_fatal() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        400,
        json!({"error": {"message": "bad prompt", "status": "INVALID_ARGUMENT"}}),
    )
    .await;

    let err = client_for(&server).await.generate("x").await.unwrap_err();
    assert_eq!(
        err,
        LlmError::fatal("Gemini API Error: 400 - bad prompt")
    );
}

#[tokio::test]
async fn test_error_without_body_uses_unknown_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).await.generate("x").await.unwrap_err();
    assert!(!err.is_transient());
    assert!(err.to_string().contains("500 - Unknown error"));
}

#[tokio::test]
async fn test_send_failure_does_not_expose_api_key() {
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:1/v1beta".to_string(),
        api_key: Some("SECRET-GEMINI-KEY".to_string()),
        timeout_secs: 5,
        ..GeminiConfig::default()
    };
    let client = GeminiClient::new(&config).unwrap();

    let err = client.generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Fatal { .. }));
    assert!(!err.to_string().contains("SECRET-GEMINI-KEY"));
}

#[tokio::test]
async fn test_decode_failure_does_not_expose_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.generate("x").await.unwrap_err();
    assert!(err.to_string().starts_with("Upstream model request failed: Failed to decode"));
    assert!(!err.to_string().contains("test-key"));
}
