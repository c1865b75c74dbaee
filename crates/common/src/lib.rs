//! Common types and utilities shared across all crates

pub mod config;
pub mod error;
pub mod json;
pub mod llm;
pub mod telemetry;
pub mod types;

pub use config::*;
pub use error::*;
pub use llm::{GeminiClient, TextGenerator};
pub use telemetry::*;
pub use types::*;
