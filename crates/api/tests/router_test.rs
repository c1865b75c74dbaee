//! Router tests against a scripted text generator

use ai_tools_api::{build_router, AppState};
use ai_tools_common::{LlmError, LlmResult, SystemConfig, TextGenerator, TransientKind};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct MockGenerator {
    reply: LlmResult<String>,
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> LlmResult<String> {
        self.reply.clone()
    }
}

fn router_with(reply: LlmResult<String>, config: SystemConfig) -> Router {
    let state = AppState::new(config, Arc::new(MockGenerator { reply }));
    build_router(state).unwrap()
}

fn router(reply: LlmResult<String>) -> Router {
    router_with(reply, SystemConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

const BUBBLE: &str = "function bubbleSort(arr) {\n  for (let i = 0; i < arr.length; i++) {\n    for (let j = 0; j < arr.length - i - 1; j++) {}\n  }\n  return arr;\n}";

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router(Ok(String::new())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_configured"], false);
}

#[tokio::test]
async fn test_catalogue_lists_seven_tools() {
    let (status, body) = get(router(Ok(String::new())), "/api/ai-tools").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"][4]["id"], "complexity-analyzer");
}

#[tokio::test]
async fn test_highlight_has_color() {
    let (status, body) = get(router(Ok(String::new())), "/api/ai-tools/highlight").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["color"].is_string());
}

#[tokio::test]
async fn test_complexity_transient_failure_falls_back() {
    let err = LlmError::transient(
        TransientKind::ServiceUnavailable,
        "Gemini API Error: 503 - overloaded",
    );
    let (status, body) = post(
        router(Err(err)),
        "/api/ai-tools/analyze-complexity",
        json!({"code": BUBBLE, "language": "javascript"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isFallback"], true);
    assert_eq!(
        body["message"],
        "Time complexity analysis completed using fallback analysis (AI service temporarily unavailable)"
    );
    assert_eq!(body["data"]["algorithmAnalysis"]["algorithmType"], "Sorting Algorithm");
    assert_eq!(body["data"]["timeComplexity"]["worstCase"], "O(n²) - Worst case scenario");
    assert!(body["data"]["overview"].as_str().unwrap().contains("appears to be"));
}

#[tokio::test]
async fn test_complexity_model_reply_is_not_fallback() {
    let reply = r#"Sure! {"overview": "Bubble sort", "timeComplexity": {"worstCase": "O(n^2)"}}"#;
    let (status, body) = post(
        router(Ok(reply.to_string())),
        "/api/ai-tools/analyze-complexity",
        json!({"code": BUBBLE}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isFallback"], false);
    assert_eq!(body["message"], "Time complexity analysis completed successfully");
    assert_eq!(body["data"]["overview"], "Bubble sort");
}

#[tokio::test]
async fn test_complexity_fatal_failure_is_500() {
    let (status, body) = post(
        router(Err(LlmError::fatal("Gemini API Error: 400 - bad"))),
        "/api/ai-tools/analyze-complexity",
        json!({"code": BUBBLE}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Failed to analyze time complexity. Please try again."})
    );
}

#[tokio::test]
async fn test_complexity_without_fallback_is_503() {
    let mut config = SystemConfig::default();
    config.analyzer.fallback_enabled = false;
    let err = LlmError::transient(TransientKind::RateLimited, "Gemini API Error: 429 - quota");

    let (status, body) = post(
        router_with(Err(err), config),
        "/api/ai-tools/analyze-complexity",
        json!({"code": BUBBLE}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Too many requests. Please wait a moment before trying again.");
}

#[tokio::test]
async fn test_validation_errors_are_400() {
    let app = router(Ok(String::new()));
    let (status, body) = post(
        app.clone(),
        "/api/ai-tools/analyze-complexity",
        json!({"code": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Code is required");

    let (status, body) = post(
        app.clone(),
        "/api/ai-tools/generate-code",
        json!({"problemStatement": "Reverse a linked list", "language": "fortran"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please select a valid programming language");

    let (status, body) = post(
        app,
        "/api/ai-tools/explain-algorithm",
        json!({"algorithmName": "A*", "complexity": "extreme"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Complexity level must be simple, detailed, or advanced");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/ai-tools/review-code")
        .header("content-type", "application/json")
        .body(Body::from("{\"code\": "))
        .unwrap();
    let (status, body) = send(router(Ok(String::new())), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON at line 1"));
}

#[tokio::test]
async fn test_generate_code_returns_cleaned_code() {
    let reply = "```javascript\n/** Reverses. */\nfunction reverse(s) { return s.split('').reverse().join(''); }\n```";
    let (status, body) = post(
        router(Ok(reply.to_string())),
        "/api/ai-tools/generate-code",
        json!({"problemStatement": "  Reverse a string  "}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Code generated successfully");
    assert_eq!(
        body["data"]["code"],
        "function reverse(s) { return s.split('').reverse().join(''); }"
    );
    assert_eq!(body["data"]["language"], "javascript");
    assert_eq!(body["data"]["problemStatement"], "Reverse a string");
}

#[tokio::test]
async fn test_unparseable_review_degrades() {
    let (status, body) = post(
        router(Ok("Looks fine to me".to_string())),
        "/api/ai-tools/review-code",
        json!({"code": "print('hello world')", "language": "python"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["overallScore"], "Unable to parse");
    assert!(body.get("isFallback").is_none());
}

#[tokio::test]
async fn test_resume_tool_failure_is_500() {
    let (status, body) = post(
        router(Err(LlmError::fatal("network down"))),
        "/api/ai-tools/analyze-resume",
        json!({"resumeText": "Senior engineer with ten years of experience building distributed systems."}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to analyze resume. Please try again.");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = router(Ok(String::new())).oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get(router(Ok(String::new())), "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/ai-tools/analyze-complexity"].is_object());
}
