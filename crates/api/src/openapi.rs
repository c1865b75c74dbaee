//! OpenAPI document for the AI tools API, generated with utoipa.

use ai_tools_analyzer::narrative::CodeBreakdownEntry;
use ai_tools_analyzer::{AlgorithmClassification, EfficiencyRating, OptimizationSuggestion};
use ai_tools_analyzer::report::{
    AlgorithmAnalysis, AnalysisReport, RealWorldImplications, SpaceComplexityBreakdown,
    TimeComplexityBreakdown, Visualization,
};
use ai_tools_common::ProgrammingLanguage;
use serde_json::json;

use crate::types::*;

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "AI Tools API",
        description = "Career and developer tools backed by a generative model. \
            Complexity analysis degrades to a local heuristic analyzer when the model is unavailable.",
        version = "1.0.0",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::routes::catalogue::list_tools,
        crate::routes::catalogue::random_tool_highlight,
        crate::routes::development::generate_code,
        crate::routes::development::review_code,
        crate::routes::development::analyze_complexity,
        crate::routes::career::analyze_resume,
        crate::routes::career::generate_questions,
        crate::routes::career::generate_ats_resume,
        crate::routes::education::explain_algorithm,
        crate::routes::education::generate_roadmap,
        crate::server::health_check
    ),
    components(schemas(
        EnvelopeDoc,
        HealthResponse,
        ToolId,
        ToolInfo,
        ToolHighlight,
        GeneratedCode,
        GenerateCodeRequest,
        AnalyzeResumeRequest,
        GenerateQuestionsRequest,
        CodeRequest,
        ExplainAlgorithmRequest,
        GenerateRoadmapRequest,
        GenerateAtsResumeRequest,
        ProgrammingLanguage,
        // Heuristic complexity report
        AnalysisReport,
        TimeComplexityBreakdown,
        SpaceComplexityBreakdown,
        AlgorithmAnalysis,
        AlgorithmClassification,
        EfficiencyRating,
        OptimizationSuggestion,
        CodeBreakdownEntry,
        RealWorldImplications,
        Visualization
    )),
    tags(
        (name = "catalogue", description = "Tool discovery"),
        (name = "development", description = "Code generation, review and complexity analysis"),
        (name = "career", description = "Resume analysis and interview preparation"),
        (name = "education", description = "Algorithm explanations and learning roadmaps"),
        (name = "health", description = "System health and status")
    )
)]
pub struct ApiDoc;

/// Response envelope shared by every endpoint
#[derive(utoipa::ToSchema)]
#[schema(
    title = "Envelope",
    example = json!({
        "success": true,
        "message": "Time complexity analysis completed using fallback analysis (AI service temporarily unavailable)",
        "data": {"overview": "This appears to be a sorting algorithm written in javascript. ..."},
        "isFallback": true
    })
)]
#[allow(dead_code, non_snake_case)]
pub struct EnvelopeDoc {
    /// Whether the request succeeded
    success: bool,
    /// Human-readable outcome, always present on failure
    message: Option<String>,
    /// Tool-specific payload
    #[schema(value_type = Option<Object>)]
    data: Option<serde_json::Value>,
    /// Set on complexity analysis only; true when the heuristic analyzer answered
    isFallback: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_document_lists_every_tool_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/ai-tools",
            "/api/ai-tools/highlight",
            "/api/ai-tools/generate-code",
            "/api/ai-tools/analyze-complexity",
            "/api/ai-tools/generate-roadmap",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
