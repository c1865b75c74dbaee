//! Lexical signal extraction
//!
//! Signals are cheap proxies for structure a real parser would see. They are
//! deliberately coarse: a keyword anywhere in the text fires its signal, and
//! nothing here understands scope, comments or string literals.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `for (...)`, `while (...)` and `forEach(...)` call-like shapes.
///
/// Keywords are matched case-sensitively, the parenthesised content is not
/// inspected beyond "no closing paren".
static LOOP_CONSTRUCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"for\s*\([^)]*\)|while\s*\([^)]*\)|forEach\s*\([^)]*\)")
        .expect("loop construct pattern is a valid regex")
});

/// All of these must appear somewhere in the text for the recursion signal
/// to fire. Order and nesting are ignored.
const RECURSION_MARKERS: &[&str] = &["function", "(", ")", "return"];

/// Named keyword signals derived from the vocabulary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Sort,
    BubbleSort,
    DivideAndConquerSort,
    Search,
    BinarySearch,
    DynamicProgramming,
    Tree,
    Graph,
    /// Literal "sort", used by the time narrative.
    SortWord,
    /// Literal "search", used by the time narrative.
    SearchWord,
}

/// How a vocabulary row is matched against lowercased text.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Fires when any term is present.
    Any(&'static [&'static str]),
    /// Fires only when every term is present.
    All(&'static [&'static str]),
}

impl Rule {
    fn matches(&self, haystack: &str) -> bool {
        match self {
            Rule::Any(terms) => terms.iter().any(|t| haystack.contains(t)),
            Rule::All(terms) => terms.iter().all(|t| haystack.contains(t)),
        }
    }
}

/// Pattern vocabulary: keyword signal -> matching rule.
///
/// Matching is case-insensitive substring search, so `quickSort`,
/// `BinarySearchTree` and `memoized` all hit.
pub const VOCABULARY: &[(Keyword, Rule)] = &[
    (Keyword::Sort, Rule::Any(&["sort", "bubble", "quick", "merge"])),
    (Keyword::BubbleSort, Rule::Any(&["bubble"])),
    (Keyword::DivideAndConquerSort, Rule::Any(&["quick", "merge"])),
    (Keyword::Search, Rule::Any(&["search", "find", "indexof"])),
    (Keyword::BinarySearch, Rule::All(&["binary", "search"])),
    (Keyword::DynamicProgramming, Rule::Any(&["memo", "dp", "cache"])),
    (Keyword::Tree, Rule::Any(&["tree", "node", "traverse"])),
    (Keyword::Graph, Rule::Any(&["graph", "bfs", "dfs"])),
    (Keyword::SortWord, Rule::Any(&["sort"])),
    (Keyword::SearchWord, Rule::Any(&["search"])),
];

/// Signals computed once per analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSignals {
    /// Non-blank lines.
    pub line_count: usize,
    pub loop_construct_count: usize,
    pub has_nested_loops: bool,
    pub has_recursion_signal: bool,
    pub has_sort_signal: bool,
    pub has_search_signal: bool,
    pub has_binary_search_signal: bool,
    pub has_dynamic_programming_signal: bool,
    pub has_tree_signal: bool,
    pub has_graph_signal: bool,
    pub mentions_bubble: bool,
    pub mentions_quick_or_merge: bool,
    pub mentions_sort: bool,
    pub mentions_search: bool,
}

/// Keyword signals that fire for `code`, in vocabulary order.
pub fn matched_keywords(code: &str) -> Vec<Keyword> {
    let lowered = code.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|(_, rule)| rule.matches(&lowered))
        .map(|(keyword, _)| *keyword)
        .collect()
}

/// Count non-overlapping loop constructs.
pub fn count_loop_constructs(code: &str) -> usize {
    LOOP_CONSTRUCT.find_iter(code).count()
}

/// Scan `code` and derive every signal. Total over any input.
pub fn extract_signals(code: &str) -> PatternSignals {
    let line_count = code.lines().filter(|line| !line.trim().is_empty()).count();
    let loop_construct_count = count_loop_constructs(code);
    let has_recursion_signal = RECURSION_MARKERS.iter().all(|m| code.contains(m));

    let keywords = matched_keywords(code);
    let has = |k: Keyword| keywords.contains(&k);

    PatternSignals {
        line_count,
        loop_construct_count,
        has_nested_loops: loop_construct_count > 1,
        has_recursion_signal,
        has_sort_signal: has(Keyword::Sort),
        has_search_signal: has(Keyword::Search),
        has_binary_search_signal: has(Keyword::BinarySearch),
        has_dynamic_programming_signal: has(Keyword::DynamicProgramming),
        has_tree_signal: has(Keyword::Tree),
        has_graph_signal: has(Keyword::Graph),
        mentions_bubble: has(Keyword::BubbleSort),
        mentions_quick_or_merge: has(Keyword::DivideAndConquerSort),
        mentions_sort: has(Keyword::SortWord),
        mentions_search: has(Keyword::SearchWord),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_skips_blank_lines() {
        let signals = extract_signals("let a = 1;\n\n   \nlet b = 2;\n");
        assert_eq!(signals.line_count, 2);
    }

    #[test]
    fn test_loop_constructs_counted() {
        let code = "for (let i = 0; i < n; i++) {}\nwhile (x > 0) {}\narr.forEach((v) => v);";
        assert_eq!(count_loop_constructs(code), 3);
    }

    #[test]
    fn test_loop_keyword_is_case_sensitive() {
        assert_eq!(count_loop_constructs("FOR (i in xs) {}"), 0);
        assert_eq!(count_loop_constructs("For(;;){}"), 0);
    }

    #[test]
    fn test_compact_for_loops_counted() {
        let signals = extract_signals("function bubbleSort(tree) { for(;;){for(;;){}} }");
        assert_eq!(signals.loop_construct_count, 2);
        assert!(signals.has_nested_loops);
    }

    #[test]
    fn test_recursion_signal_needs_all_markers() {
        assert!(extract_signals("function f(n) { return n; }").has_recursion_signal);
        assert!(!extract_signals("function f(n) { n; }").has_recursion_signal);
        assert!(!extract_signals("def f(n): return n").has_recursion_signal);
    }

    #[test]
    fn test_vocabulary_is_case_insensitive() {
        let signals = extract_signals("class BinarySearchTree { FindNode() {} }");
        assert!(signals.has_binary_search_signal);
        assert!(signals.has_search_signal);
        assert!(signals.has_tree_signal);
        assert!(!signals.has_graph_signal);
    }

    #[test]
    fn test_binary_search_requires_both_terms() {
        assert!(!extract_signals("binary").has_binary_search_signal);
        assert!(!extract_signals("search").has_binary_search_signal);
        assert!(extract_signals("search ... binary").has_binary_search_signal);
    }

    #[test]
    fn test_sort_flavours() {
        let bubble = extract_signals("bubble(arr)");
        assert!(bubble.has_sort_signal);
        assert!(bubble.mentions_bubble);
        assert!(!bubble.mentions_sort);

        let merge = extract_signals("mergeSort(arr)");
        assert!(merge.mentions_quick_or_merge);
        assert!(merge.mentions_sort);
    }

    #[test]
    fn test_no_signals_for_plain_statement() {
        let signals = extract_signals("let x = 1;");
        assert_eq!(
            signals,
            PatternSignals {
                line_count: 1,
                ..PatternSignals::default()
            }
        );
    }
}
