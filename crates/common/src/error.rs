use strum_macros::Display;
use thiserror::Error;

/// Core error type for configuration and upstream failures
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ToolsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidation { field: String, reason: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ToolsError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error for a single config field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Why an upstream failure is considered temporary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransientKind {
    #[strum(serialize = "service unavailable")]
    ServiceUnavailable,
    #[strum(serialize = "rate limited")]
    RateLimited,
}

/// Outcome of a failed text-generation call.
///
/// `Transient` failures may be substituted by a degraded local answer;
/// `Fatal` ones must be surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    #[error("Upstream model temporarily unavailable ({kind}): {reason}")]
    Transient { kind: TransientKind, reason: String },

    #[error("Upstream model request failed: {reason}")]
    Fatal { reason: String },
}

impl LlmError {
    pub fn transient(kind: TransientKind, reason: impl Into<String>) -> Self {
        Self::Transient {
            kind,
            reason: reason.into(),
        }
    }

    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal {
            reason: reason.into(),
        }
    }

    /// Check if error is retryable
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }

    pub fn transient_kind(&self) -> Option<TransientKind> {
        match self {
            Self::Transient { kind, .. } => Some(*kind),
            Self::Fatal { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolsError>;
pub type LlmResult<T> = std::result::Result<T, LlmError>;
