use ai_tools_analyzer::InferenceStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Result, ToolsError};

/// Environment variable that overrides `gemini.api_key`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Process-wide configuration, loaded once at startup and read-only after.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "default_body_limit")]
    pub request_body_limit_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Character limits applied to request fields before any tool runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_code_chars")]
    pub max_code_chars: usize,
    #[serde(default = "default_max_resume_chars")]
    pub max_resume_chars: usize,
    #[serde(default = "default_max_problem_chars")]
    pub max_problem_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Serve the heuristic report when the model is unavailable.
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
    #[serde(default)]
    pub inference_strategy: InferenceStrategy,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

fn default_body_limit() -> usize {
    10 * 1024 * 1024
}

fn default_gemini_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_code_chars() -> usize {
    50_000
}

fn default_max_resume_chars() -> usize {
    10_000
}

fn default_max_problem_chars() -> usize {
    2_000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_cors_origins(),
            request_body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_url(),
            model: default_gemini_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_code_chars: default_max_code_chars(),
            max_resume_chars: default_max_resume_chars(),
            max_problem_chars: default_max_problem_chars(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fallback_enabled: true,
            inference_strategy: InferenceStrategy::default(),
        }
    }
}

impl SystemConfig {
    /// Parse a TOML document without touching the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SystemConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, apply environment overrides and
    /// validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ToolsError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let mut config: SystemConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Like [`SystemConfig::load`], but falls back to built-in defaults when
    /// the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(GEMINI_API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.gemini.api_key = Some(key);
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ToolsError::validation("server.port", "must be greater than 0"));
        }
        if self.server.request_body_limit_bytes == 0 {
            return Err(ToolsError::validation(
                "server.request_body_limit_bytes",
                "must be greater than 0",
            ));
        }

        let url = url::Url::parse(&self.gemini.base_url).map_err(|e| {
            ToolsError::validation("gemini.base_url", format!("{}: {}", self.gemini.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ToolsError::validation(
                "gemini.base_url",
                format!("unsupported scheme: {}", url.scheme()),
            ));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ToolsError::validation("gemini.model", "must not be empty"));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(ToolsError::validation("gemini.timeout_secs", "must be greater than 0"));
        }

        let limits = [
            ("limits.max_code_chars", self.limits.max_code_chars),
            ("limits.max_resume_chars", self.limits.max_resume_chars),
            ("limits.max_problem_chars", self.limits.max_problem_chars),
        ];
        for (field, value) in limits {
            if value == 0 {
                return Err(ToolsError::validation(field, "must be greater than 0"));
            }
        }

        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Render the effective configuration as TOML, API key omitted.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut redacted = self.clone();
        redacted.gemini.api_key = None;
        toml::to_string_pretty(&redacted)
            .map_err(|e| ToolsError::config(format!("Failed to serialize config: {}", e)))
    }
}
