//! AI tools service
//!
//! One async operation per tool. Each builds a prompt, calls the configured
//! [`TextGenerator`] and coerces the reply. Unparseable replies degrade to a
//! fixed payload; generator errors propagate, except for complexity analysis,
//! which falls back to the local heuristic analyzer on transient failures.

use ai_tools_analyzer::report::analyze_fallback_with;
use ai_tools_analyzer::AnalysisReport;
use ai_tools_common::json::extract_json_object;
use ai_tools_common::{
    AnalyzerConfig, ExperienceLevel, ExplanationDepth, LlmError, LlmResult, ProgrammingLanguage,
    TextGenerator,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{code_cleanup, degraded, prompts};

/// Result of a complexity analysis request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ComplexityOutcome {
    /// Report produced by the model, passed through as-is
    Model(Value),
    /// Report produced locally by the heuristic analyzer
    Fallback(Box<AnalysisReport>),
}

impl ComplexityOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

pub struct AiToolsService {
    generator: Arc<dyn TextGenerator>,
    analyzer: AnalyzerConfig,
}

impl AiToolsService {
    pub fn new(generator: Arc<dyn TextGenerator>, analyzer: AnalyzerConfig) -> Self {
        Self {
            generator,
            analyzer,
        }
    }

    async fn generate_json(
        &self,
        tool: &'static str,
        prompt: String,
        degraded: impl FnOnce() -> Value,
    ) -> LlmResult<Value> {
        let reply = self.generator.generate(&prompt).await?;
        match extract_json_object(&reply) {
            Some(value) => Ok(value),
            None => {
                warn!(
                    tool,
                    reply_len = reply.len(),
                    "Model reply is not valid JSON, returning degraded payload"
                );
                Ok(degraded())
            }
        }
    }

    #[instrument(skip(self, problem), fields(problem_len = problem.len()))]
    pub async fn generate_code(
        &self,
        problem: &str,
        language: ProgrammingLanguage,
    ) -> LlmResult<String> {
        let reply = self
            .generator
            .generate(&prompts::code_generation(problem, language))
            .await?;
        Ok(code_cleanup::clean_generated_code(
            &reply,
            problem,
            language.as_str(),
        ))
    }

    #[instrument(skip(self, resume), fields(resume_len = resume.len()))]
    pub async fn analyze_resume(&self, resume: &str) -> LlmResult<Value> {
        self.generate_json(
            "resume-analyzer",
            prompts::resume_analysis(resume),
            degraded::resume_analysis,
        )
        .await
    }

    #[instrument(skip(self, resume), fields(resume_len = resume.len()))]
    pub async fn generate_interview_questions(
        &self,
        resume: &str,
        job_title: &str,
    ) -> LlmResult<Value> {
        self.generate_json(
            "interview-questions",
            prompts::interview_questions(resume, job_title),
            degraded::interview_questions,
        )
        .await
    }

    #[instrument(skip(self, code), fields(code_len = code.len()))]
    pub async fn review_code(&self, code: &str, language: ProgrammingLanguage) -> LlmResult<Value> {
        self.generate_json(
            "code-reviewer",
            prompts::code_review(code, language),
            degraded::code_review,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn explain_algorithm(&self, name: &str, depth: ExplanationDepth) -> LlmResult<Value> {
        self.generate_json(
            "algorithm-explainer",
            prompts::algorithm_explanation(name, depth),
            || degraded::algorithm_explanation(name),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn generate_roadmap(
        &self,
        domain: &str,
        level: ExperienceLevel,
        focus_areas: &[String],
    ) -> LlmResult<Value> {
        self.generate_json(
            "roadmap-generator",
            prompts::roadmap(domain, level, focus_areas),
            || degraded::roadmap(domain, level),
        )
        .await
    }

    #[instrument(skip(self, original, analysis), fields(resume_len = original.len()))]
    pub async fn generate_ats_resume(
        &self,
        original: &str,
        analysis: &Value,
        target_job_title: &str,
    ) -> LlmResult<Value> {
        self.generate_json(
            "resume-analyzer",
            prompts::ats_resume(original, analysis, target_job_title),
            || degraded::ats_resume(original),
        )
        .await
    }

    /// Ask the model for a complexity report, falling back to the heuristic
    /// analyzer when the model is temporarily unavailable or its reply is
    /// not JSON. Fatal failures, and every failure when fallback is
    /// disabled, are returned to the caller.
    #[instrument(skip(self, code), fields(code_len = code.len()))]
    pub async fn analyze_complexity(
        &self,
        code: &str,
        language: ProgrammingLanguage,
    ) -> LlmResult<ComplexityOutcome> {
        let fallback_enabled = self.analyzer.fallback_enabled;

        match self
            .generator
            .generate(&prompts::complexity_analysis(code, language))
            .await
        {
            Ok(reply) => match extract_json_object(&reply) {
                Some(report) => Ok(ComplexityOutcome::Model(report)),
                None if fallback_enabled => {
                    warn!("Model complexity reply is not valid JSON, using heuristic analysis");
                    Ok(self.heuristic_report(code, language))
                }
                None => Err(LlmError::fatal("Model complexity reply is not valid JSON")),
            },
            Err(e) if e.is_transient() && fallback_enabled => {
                warn!(error = %e, "Model temporarily unavailable, using heuristic analysis");
                Ok(self.heuristic_report(code, language))
            }
            Err(e) => Err(e),
        }
    }

    /// Run the heuristic analyzer directly, without contacting the model.
    pub fn heuristic_report(&self, code: &str, language: ProgrammingLanguage) -> ComplexityOutcome {
        let report =
            analyze_fallback_with(code, language.as_str(), self.analyzer.inference_strategy);
        info!(
            algorithm_type = %report.algorithm_analysis.algorithm_type,
            "Heuristic complexity analysis complete"
        );
        ComplexityOutcome::Fallback(Box::new(report))
    }
}
