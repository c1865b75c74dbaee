//! Request and response types for the AI tools API

use ai_tools_common::{ExperienceLevel, ExplanationDepth, LimitsConfig, ProgrammingLanguage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

use crate::error::ApiError;

const DEFAULT_JOB_TITLE: &str = "Software Engineer";

/// Envelope wrapping every response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            is_fallback: None,
        }
    }

    /// Success without a message, as used by the catalogue endpoints.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            is_fallback: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            is_fallback: None,
        }
    }

    pub fn with_fallback(mut self, is_fallback: bool) -> Self {
        self.is_fallback = Some(is_fallback);
        self
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    pub version: String,
    /// Whether a Gemini API key is configured
    pub model_configured: bool,
    /// Timestamp of health check
    pub timestamp: DateTime<Utc>,
}

/// Identifier of one of the seven tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToolId {
    CodeGenerator,
    ResumeAnalyzer,
    InterviewQuestions,
    CodeReviewer,
    ComplexityAnalyzer,
    AlgorithmExplainer,
    RoadmapGenerator,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolInfo {
    pub id: ToolId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub features: Vec<String>,
}

/// Dashboard highlight for a single tool
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolHighlight {
    pub tool: ToolId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    pub code: String,
    pub language: ProgrammingLanguage,
    pub problem_statement: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    #[serde(default)]
    pub problem_statement: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_title: Option<String>,
}

/// Shared by code review and complexity analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeRequest {
    #[serde(default)]
    pub code: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainAlgorithmRequest {
    #[serde(default)]
    pub algorithm_name: String,
    /// simple, detailed or advanced
    pub complexity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    pub domain: String,
    pub experience_level: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub focus_areas: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAtsResumeRequest {
    #[serde(default)]
    pub original_resume: String,
    #[schema(value_type = Object)]
    pub analysis: Option<Value>,
    pub target_job_title: Option<String>,
}

fn require_length(value: &str, label: &str, min: usize, max: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", label)));
    }
    check_length(value, label, min, max)
}

fn check_length(value: &str, label: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ApiError::validation(format!(
            "{} must be between {} and {} characters",
            label, min, max
        )));
    }
    Ok(())
}

fn check_optional_length(
    value: Option<&str>,
    label: &str,
    min: usize,
    max: usize,
) -> Result<(), ApiError> {
    match value {
        Some(v) => check_length(v, label, min, max),
        None => Ok(()),
    }
}

fn check_language(language: Option<&str>) -> Result<(), ApiError> {
    match language {
        Some(l) if ProgrammingLanguage::from_str(l).is_err() => Err(ApiError::validation(
            "Please select a valid programming language",
        )),
        _ => Ok(()),
    }
}

fn parse_or_default<T: FromStr + Default>(value: Option<&str>) -> T {
    value.and_then(|v| T::from_str(v).ok()).unwrap_or_default()
}

fn trimmed_or(value: Option<&str>, default: &str) -> String {
    value.map(str::trim).unwrap_or(default).to_string()
}

impl GenerateCodeRequest {
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        require_length(
            &self.problem_statement,
            "Problem statement",
            10,
            limits.max_problem_chars,
        )?;
        check_language(self.language.as_deref())
    }

    pub fn problem_statement(&self) -> &str {
        self.problem_statement.trim()
    }

    pub fn language(&self) -> ProgrammingLanguage {
        parse_or_default(self.language.as_deref())
    }
}

impl AnalyzeResumeRequest {
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        require_length(&self.resume_text, "Resume text", 50, limits.max_resume_chars)
    }

    pub fn resume_text(&self) -> &str {
        self.resume_text.trim()
    }
}

impl GenerateQuestionsRequest {
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        require_length(&self.resume_text, "Resume text", 50, limits.max_resume_chars)?;
        check_optional_length(self.job_title.as_deref(), "Job title", 2, 100)
    }

    pub fn resume_text(&self) -> &str {
        self.resume_text.trim()
    }

    pub fn job_title(&self) -> String {
        trimmed_or(self.job_title.as_deref(), DEFAULT_JOB_TITLE)
    }
}

impl CodeRequest {
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        require_length(&self.code, "Code", 10, limits.max_code_chars)?;
        check_language(self.language.as_deref())
    }

    pub fn code(&self) -> &str {
        self.code.trim()
    }

    pub fn language(&self) -> ProgrammingLanguage {
        parse_or_default(self.language.as_deref())
    }
}

impl ExplainAlgorithmRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_length(&self.algorithm_name, "Algorithm name", 2, 100)?;
        match self.complexity.as_deref() {
            Some(c) if ExplanationDepth::from_str(c).is_err() => Err(ApiError::validation(
                "Complexity level must be simple, detailed, or advanced",
            )),
            _ => Ok(()),
        }
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm_name.trim()
    }

    pub fn depth(&self) -> ExplanationDepth {
        parse_or_default(self.complexity.as_deref())
    }
}

impl GenerateRoadmapRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_length(&self.domain, "Domain", 2, 100)?;
        if let Some(level) = self.experience_level.as_deref() {
            if ExperienceLevel::from_str(level).is_err() {
                return Err(ApiError::validation(
                    "Experience level must be beginner, intermediate, or advanced",
                ));
            }
        }
        match &self.focus_areas {
            Some(v) if !v.is_array() => Err(ApiError::validation("Focus areas must be an array")),
            _ => Ok(()),
        }
    }

    pub fn domain(&self) -> &str {
        self.domain.trim()
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        parse_or_default(self.experience_level.as_deref())
    }

    /// Focus areas as text; non-string entries are rendered as JSON.
    pub fn focus_areas(&self) -> Vec<String> {
        self.focus_areas
            .as_ref()
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GenerateAtsResumeRequest {
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        require_length(
            &self.original_resume,
            "Original resume",
            50,
            limits.max_resume_chars,
        )?;
        if !self.analysis.as_ref().is_some_and(Value::is_object) {
            return Err(ApiError::validation("Analysis object is required"));
        }
        check_optional_length(self.target_job_title.as_deref(), "Target job title", 2, 100)
    }

    pub fn original_resume(&self) -> &str {
        self.original_resume.trim()
    }

    pub fn analysis(&self) -> &Value {
        self.analysis.as_ref().unwrap_or(&Value::Null)
    }

    pub fn target_job_title(&self) -> String {
        trimmed_or(self.target_job_title.as_deref(), DEFAULT_JOB_TITLE)
    }
}
