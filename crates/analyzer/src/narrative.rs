//! Narrative and suggestion generation
//!
//! Fixed phrases conditioned on signals, classification and the inferred
//! complexity. All functions are pure.

use serde::{Deserialize, Serialize};

use crate::classification::AlgorithmClassification;
use crate::complexity::{EfficiencyRating, SpaceComplexity, TimeComplexity};
use crate::signals::PatternSignals;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OptimizationSuggestion {
    pub suggestion: String,
    pub impact: String,
    pub implementation: String,
    pub tradeoff: String,
}

impl OptimizationSuggestion {
    fn new(suggestion: &str, impact: &str, implementation: &str, tradeoff: &str) -> Self {
        Self {
            suggestion: suggestion.to_string(),
            impact: impact.to_string(),
            implementation: implementation.to_string(),
            tradeoff: tradeoff.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CodeBreakdownEntry {
    pub line: String,
    pub operation: String,
    pub complexity: String,
    pub explanation: String,
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Step-by-step time narrative. Always ends with the iteration count,
/// floored at one.
pub fn detailed_time_narrative(signals: &PatternSignals, time: TimeComplexity) -> String {
    let mut analysis =
        format!("Based on code analysis, this algorithm has {time} time complexity. ");

    if signals.has_nested_loops {
        analysis.push_str(&format!(
            "Nested loops detected ({} loop structures). ",
            signals.loop_construct_count
        ));
    }
    if signals.has_recursion_signal {
        analysis.push_str("Recursive calls detected. ");
    }
    if signals.mentions_sort {
        analysis.push_str("Sorting algorithm identified. ");
    }
    if signals.mentions_search {
        analysis.push_str("Search algorithm identified. ");
    }

    let passes = signals.loop_construct_count.max(1);
    analysis.push_str(&format!(
        "The algorithm processes the input data through {passes} {}.",
        plural(passes, "iteration")
    ));
    analysis
}

pub fn detailed_space_narrative(signals: &PatternSignals, space: SpaceComplexity) -> String {
    let mut analysis = format!("The algorithm uses {space} space complexity. ");

    if signals.has_recursion_signal {
        analysis.push_str("Recursive call stack contributes to space usage. ");
    }
    if signals.has_dynamic_programming_signal {
        analysis.push_str("Dynamic programming table/memoization requires additional space. ");
    }
    if space == SpaceComplexity::Constant {
        analysis.push_str("Minimal additional space required.");
    } else {
        analysis.push_str("Space usage grows with input size.");
    }
    analysis
}

/// At most three suggestions, in the order nested loops, memoization,
/// built-in sort.
pub fn optimization_suggestions(
    classification: AlgorithmClassification,
    time: TimeComplexity,
    has_recursion_signal: bool,
    loop_construct_count: usize,
) -> Vec<OptimizationSuggestion> {
    let mut suggestions = Vec::with_capacity(3);

    if time == TimeComplexity::Quadratic && loop_construct_count > 1 {
        suggestions.push(OptimizationSuggestion::new(
            "Reduce nested loops",
            "Can improve time complexity from O(n²) to O(n log n)",
            "Use more efficient algorithms or data structures",
            "May increase code complexity",
        ));
    }

    if has_recursion_signal {
        suggestions.push(OptimizationSuggestion::new(
            "Implement memoization",
            "Can reduce time complexity from exponential to polynomial",
            "Cache results of recursive calls",
            "Uses more memory",
        ));
    }

    if classification.is_sorting() {
        suggestions.push(OptimizationSuggestion::new(
            "Use built-in sorting",
            "Leverage optimized language implementations",
            "Use language-specific sort methods",
            "Less control over algorithm",
        ));
    }

    suggestions
}

/// Coarse breakdown: a setup entry, plus a main-logic entry when any loop
/// was found.
pub fn code_breakdown(
    time: TimeComplexity,
    loop_construct_count: usize,
) -> Vec<CodeBreakdownEntry> {
    let mut breakdown = vec![CodeBreakdownEntry {
        line: "1".to_string(),
        operation: "Code initialization".to_string(),
        complexity: TimeComplexity::Constant.to_string(),
        explanation: "Constant time setup operations".to_string(),
    }];

    if loop_construct_count > 0 {
        breakdown.push(CodeBreakdownEntry {
            line: "2".to_string(),
            operation: format!(
                "Main algorithm logic ({loop_construct_count} {})",
                plural(loop_construct_count, "loop")
            ),
            complexity: time.to_string(),
            explanation: format!("Main computational complexity: {time}"),
        });
    }

    breakdown
}

/// Never fewer than three entries.
pub fn use_cases(
    classification: AlgorithmClassification,
    efficiency: EfficiencyRating,
) -> Vec<String> {
    let mut cases: Vec<&str> = Vec::new();

    if efficiency.is_production_grade() {
        cases.extend(["Production applications", "Large-scale data processing"]);
    }

    cases.extend([
        "Small to medium-sized datasets",
        "Prototyping and development",
        "Educational purposes",
    ]);

    if classification.is_sorting() {
        cases.extend(["Data organization", "Database operations"]);
    }
    if classification.is_search() {
        cases.extend(["Information retrieval", "Lookup operations"]);
    }

    cases.into_iter().map(String::from).collect()
}

/// Never fewer than two entries.
pub fn limitations(efficiency: EfficiencyRating, time: TimeComplexity) -> Vec<String> {
    let mut limits: Vec<&str> = Vec::new();

    if efficiency == EfficiencyRating::Poor {
        limits.extend([
            "May be slow for large inputs",
            "Not suitable for production use with large datasets",
        ]);
    }
    if time.scales_poorly() {
        limits.push("Poor scalability with large inputs");
    }

    limits.extend([
        "Memory usage could be optimized",
        "Consider using built-in language functions",
    ]);

    limits.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::extract_signals;

    #[test]
    fn test_time_narrative_mentions_loops_and_sort() {
        let signals = extract_signals("function sort(a) { for (;;) {} for (;;) {} return a; }");
        let text = detailed_time_narrative(&signals, TimeComplexity::Quadratic);
        assert!(text.starts_with("Based on code analysis, this algorithm has O(n²)"));
        assert!(text.contains("Nested loops detected (2 loop structures)."));
        assert!(text.contains("Recursive calls detected."));
        assert!(text.contains("Sorting algorithm identified."));
        assert!(!text.contains("Search algorithm identified."));
        assert!(text.ends_with("through 2 iterations."));
    }

    #[test]
    fn test_time_narrative_floors_iterations_at_one() {
        let signals = extract_signals("let x = 1;");
        let text = detailed_time_narrative(&signals, TimeComplexity::Linear);
        assert!(text.ends_with("through 1 iteration."));
    }

    #[test]
    fn test_space_narrative() {
        let plain = detailed_space_narrative(&extract_signals("x"), SpaceComplexity::Constant);
        assert!(plain.ends_with("Minimal additional space required."));

        let dp = detailed_space_narrative(&extract_signals("memo"), SpaceComplexity::Quadratic);
        assert!(dp.contains("Dynamic programming table/memoization"));
        assert!(dp.ends_with("Space usage grows with input size."));
    }

    #[test]
    fn test_all_three_suggestions_in_order() {
        let suggestions = optimization_suggestions(
            AlgorithmClassification::Sorting,
            TimeComplexity::Quadratic,
            true,
            2,
        );
        let names: Vec<_> = suggestions.iter().map(|s| s.suggestion.as_str()).collect();
        assert_eq!(
            names,
            ["Reduce nested loops", "Implement memoization", "Use built-in sorting"]
        );
    }

    #[test]
    fn test_no_suggestions_for_plain_code() {
        assert!(optimization_suggestions(
            AlgorithmClassification::General,
            TimeComplexity::Linear,
            false,
            0
        )
        .is_empty());
    }

    #[test]
    fn test_quadratic_without_loops_skips_loop_suggestion() {
        let suggestions = optimization_suggestions(
            AlgorithmClassification::DynamicProgramming,
            TimeComplexity::Quadratic,
            false,
            1,
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_code_breakdown_entries() {
        assert_eq!(code_breakdown(TimeComplexity::Linear, 0).len(), 1);

        let two = code_breakdown(TimeComplexity::Quadratic, 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two[1].operation, "Main algorithm logic (1 loop)");
        assert_eq!(two[1].complexity, "O(n²)");
    }

    #[test]
    fn test_use_cases_for_search() {
        let cases = use_cases(AlgorithmClassification::BinarySearch, EfficiencyRating::Excellent);
        assert_eq!(cases.first().map(String::as_str), Some("Production applications"));
        assert!(cases.contains(&"Lookup operations".to_string()));
    }

    #[test]
    fn test_limitations_for_poor_exponential() {
        let limits = limitations(EfficiencyRating::Poor, TimeComplexity::Exponential);
        assert_eq!(limits.len(), 5);
        assert_eq!(limits[2], "Poor scalability with large inputs");
    }
}
