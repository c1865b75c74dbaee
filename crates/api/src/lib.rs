//! # AI Tools API Server
//!
//! REST API exposing a set of career and developer tools backed by a
//! generative model: code generation and review, resume analysis, interview
//! questions, algorithm explanations, learning roadmaps and time complexity
//! analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   REST Endpoints    │ <- /api/ai-tools/*, /health
//! ├─────────────────────┤
//! │   AiToolsService    │ <- prompts, JSON coercion, degraded payloads
//! ├─────────────────────┤
//! │   TextGenerator     │ <- Gemini over HTTP (or a test double)
//! └─────────────────────┘
//!           │ transient failure
//!           ▼
//!   heuristic complexity analyzer (ai-tools-analyzer)
//! ```
//!
//! ## Responses
//!
//! Every endpoint answers with the envelope
//! `{ "success", "message", "data", "isFallback" }`. Validation failures are
//! `400`, tool failures `500`. `isFallback` is only set by
//! `/analyze-complexity` and is `true` when the report came from the local
//! analyzer instead of the model.
//!
//! ## Documentation Access
//!
//! - **GET** `/api-doc/openapi.json` - Raw OpenAPI specification

pub mod catalogue;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod services;
pub mod types;

pub use error::ApiError;
pub use server::{build_router, ApiServer, AppState};
pub use types::*;
