//! Report assembly
//!
//! [`analyze_fallback`] is the entry point. The report shape mirrors the
//! JSON the AI-backed analysis returns, so clients render either one the
//! same way.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classification::{classify, AlgorithmClassification};
use crate::complexity::{infer_complexity_with, EfficiencyRating, InferenceStrategy};
use crate::narrative::{self, CodeBreakdownEntry, OptimizationSuggestion};
use crate::signals::extract_signals;

/// Phrase every heuristic overview contains. Older clients sniff for it to
/// tell a degraded report from an AI-generated one.
pub const FALLBACK_OVERVIEW_MARKER: &str = "appears to be";

const INPUT_SIZE_EXAMPLES: [&str; 3] = [
    "Small input (n=10): Fast execution",
    "Medium input (n=1000): Moderate performance",
    "Large input (n=100000): May be slow",
];

const TRADEOFFS: [&str; 3] = [
    "Time vs Space complexity tradeoffs",
    "Readability vs Performance",
    "Memory usage vs Speed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overview: String,
    pub time_complexity: TimeComplexityBreakdown,
    pub space_complexity: SpaceComplexityBreakdown,
    pub algorithm_analysis: AlgorithmAnalysis,
    pub code_breakdown: Vec<CodeBreakdownEntry>,
    pub optimization_suggestions: Vec<OptimizationSuggestion>,
    pub real_world_implications: RealWorldImplications,
    pub visualization: Visualization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimeComplexityBreakdown {
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
    pub detailed_analysis: String,
    pub factors: Vec<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SpaceComplexityBreakdown {
    pub auxiliary: String,
    pub total: String,
    pub detailed_analysis: String,
    pub factors: Vec<String>,
    pub memory_usage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmAnalysis {
    pub algorithm_type: AlgorithmClassification,
    pub efficiency: EfficiencyRating,
    pub optimization_opportunities: Vec<OptimizationSuggestion>,
    pub tradeoffs: Vec<String>,
    pub comparison: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RealWorldImplications {
    pub scalability: String,
    pub performance: String,
    pub use_cases: Vec<String>,
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    pub complexity_graph: String,
    pub comparison_chart: String,
}

fn scalability_phrase(efficiency: EfficiencyRating) -> &'static str {
    match efficiency {
        EfficiencyRating::Poor => "does not scale well",
        EfficiencyRating::Excellent => "scales very well",
        EfficiencyRating::Good | EfficiencyRating::Fair => "scales moderately well",
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a heuristic report for `code` using the default inference
/// strategy.
///
/// The caller guarantees `code` is non-empty after trimming. `language` is
/// only echoed into the overview.
pub fn analyze_fallback(code: &str, language: &str) -> AnalysisReport {
    analyze_fallback_with(code, language, InferenceStrategy::default())
}

pub fn analyze_fallback_with(
    code: &str,
    language: &str,
    strategy: InferenceStrategy,
) -> AnalysisReport {
    let signals = extract_signals(code);
    let classification = classify(&signals);
    let estimate = infer_complexity_with(strategy, &signals, classification);
    let (time, space, efficiency) = (estimate.time, estimate.space, estimate.efficiency);

    debug!(
        language,
        lines = signals.line_count,
        loops = signals.loop_construct_count,
        classification = %classification,
        time = %time,
        space = %space,
        efficiency = %efficiency,
        "Heuristic complexity analysis complete"
    );

    let suggestions = narrative::optimization_suggestions(
        classification,
        time,
        signals.has_recursion_signal,
        signals.loop_construct_count,
    );

    AnalysisReport {
        overview: format!(
            "This {FALLBACK_OVERVIEW_MARKER} a {} written in {language}. The code contains {} lines of logic with {} loop structures.",
            classification.to_string().to_lowercase(),
            signals.line_count,
            signals.loop_construct_count,
        ),
        time_complexity: TimeComplexityBreakdown {
            best_case: format!("{time} - Best case scenario"),
            average_case: format!("{time} - Average case scenario"),
            worst_case: format!("{time} - Worst case scenario"),
            detailed_analysis: narrative::detailed_time_narrative(&signals, time),
            factors: owned(&[
                "Input size",
                if signals.has_nested_loops { "Nested iterations" } else { "Single iterations" },
                if signals.has_recursion_signal { "Recursive depth" } else { "Iterative approach" },
            ]),
            examples: owned(&INPUT_SIZE_EXAMPLES),
        },
        space_complexity: SpaceComplexityBreakdown {
            auxiliary: format!("{space} - Additional space required"),
            total: format!("{space} - Total space complexity"),
            detailed_analysis: narrative::detailed_space_narrative(&signals, space),
            factors: owned(&[
                "Input storage",
                if signals.has_recursion_signal { "Call stack" } else { "Variables" },
                "Temporary data structures",
            ]),
            memory_usage: format!(
                "Memory usage is {} with respect to input size.",
                space.growth_word()
            ),
        },
        algorithm_analysis: AlgorithmAnalysis {
            algorithm_type: classification,
            efficiency,
            optimization_opportunities: suggestions.clone(),
            tradeoffs: owned(&TRADEOFFS),
            comparison: format!(
                "This implementation is {} compared to optimized versions of similar algorithms.",
                efficiency.lowercase()
            ),
        },
        code_breakdown: narrative::code_breakdown(time, signals.loop_construct_count),
        optimization_suggestions: suggestions,
        real_world_implications: RealWorldImplications {
            scalability: format!(
                "This algorithm {} with large inputs.",
                scalability_phrase(efficiency)
            ),
            performance: format!(
                "Performance is {} for typical use cases.",
                efficiency.lowercase()
            ),
            use_cases: narrative::use_cases(classification, efficiency),
            limitations: narrative::limitations(efficiency, time),
        },
        visualization: Visualization {
            complexity_graph: format!(
                "The complexity grows {} with input size.",
                time.growth_adverb()
            ),
            comparison_chart: format!(
                "Compared to optimal solutions, this is {} in terms of both time and space complexity.",
                efficiency.lowercase()
            ),
        },
    }
}
