//! Heuristic time-complexity analyzer
//!
//! Estimates the algorithmic complexity of a block of source text using
//! lexical pattern matching only. There is no parser and no AST: every
//! signal is a substring or regex hit, so results are best-effort and are
//! meant to stand in for the AI-backed analysis when that path is down.
//!
//! The pipeline is:
//!
//! ```text
//! extract_signals -> classify -> infer_complexity -> narrative -> AnalysisReport
//! ```
//!
//! Every stage is a pure function. Nothing is cached between calls.

pub mod classification;
pub mod complexity;
pub mod narrative;
pub mod report;
pub mod signals;

pub use classification::{classify, AlgorithmClassification};
pub use complexity::{
    infer_complexity, infer_complexity_with, ComplexityEstimate, EfficiencyRating,
    InferenceStrategy, SpaceComplexity, TimeComplexity,
};
pub use narrative::OptimizationSuggestion;
pub use report::{analyze_fallback, AnalysisReport, FALLBACK_OVERVIEW_MARKER};
pub use signals::{extract_signals, PatternSignals};
