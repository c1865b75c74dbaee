//! Complexity inference

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::classification::AlgorithmClassification;
use crate::signals::PatternSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TimeComplexity {
    #[serde(rename = "O(1)")]
    #[strum(serialize = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    #[strum(serialize = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    #[strum(serialize = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    #[strum(serialize = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    #[strum(serialize = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(2ⁿ)")]
    #[strum(serialize = "O(2ⁿ)")]
    Exponential,
    #[serde(rename = "O(V+E)")]
    #[strum(serialize = "O(V+E)")]
    VerticesPlusEdges,
}

impl TimeComplexity {
    /// Quadratic and exponential classes.
    pub fn scales_poorly(self) -> bool {
        matches!(self, Self::Quadratic | Self::Exponential)
    }

    /// Adverb describing how running time grows with input size.
    pub fn growth_adverb(self) -> &'static str {
        match self {
            Self::Constant => "constantly",
            Self::Logarithmic => "logarithmically",
            Self::Linear | Self::VerticesPlusEdges => "linearly",
            Self::Linearithmic => "linearithmically",
            Self::Quadratic => "quadratically",
            Self::Exponential => "exponentially",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SpaceComplexity {
    #[serde(rename = "O(1)")]
    #[strum(serialize = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    #[strum(serialize = "O(n)")]
    Linear,
    #[serde(rename = "O(n²)")]
    #[strum(serialize = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(V)")]
    #[strum(serialize = "O(V)")]
    Vertices,
}

impl SpaceComplexity {
    /// Word used in the memory-usage sentence.
    pub fn growth_word(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Linear | Self::Vertices => "linear",
            Self::Quadratic => "quadratic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl EfficiencyRating {
    pub fn lowercase(self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn is_production_grade(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplexityEstimate {
    pub time: TimeComplexity,
    pub space: SpaceComplexity,
    pub efficiency: EfficiencyRating,
}

impl Default for ComplexityEstimate {
    fn default() -> Self {
        Self {
            time: TimeComplexity::Linear,
            space: SpaceComplexity::Constant,
            efficiency: EfficiencyRating::Good,
        }
    }
}

/// How complexity is chosen once signals and classification are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InferenceStrategy {
    /// Re-scan the raw signals with their own precedence
    /// (binary search, sort, loops, recursion, DP, tree/graph).
    ///
    /// Can disagree with the classification, e.g. a tree walk with two
    /// loops is labelled "Tree Traversal" but gets `O(n²)`.
    #[default]
    RawSignals,
    /// Derive complexity from the classification alone so the two always
    /// agree.
    Classification,
}

/// Estimate time/space complexity with the default strategy.
pub fn infer_complexity(
    signals: &PatternSignals,
    classification: AlgorithmClassification,
) -> ComplexityEstimate {
    infer_complexity_with(InferenceStrategy::default(), signals, classification)
}

pub fn infer_complexity_with(
    strategy: InferenceStrategy,
    signals: &PatternSignals,
    classification: AlgorithmClassification,
) -> ComplexityEstimate {
    match strategy {
        InferenceStrategy::RawSignals => from_raw_signals(signals),
        InferenceStrategy::Classification => from_classification(signals, classification),
    }
}

fn sort_estimate(signals: &PatternSignals) -> ComplexityEstimate {
    if signals.mentions_bubble {
        ComplexityEstimate {
            time: TimeComplexity::Quadratic,
            efficiency: EfficiencyRating::Poor,
            ..ComplexityEstimate::default()
        }
    } else {
        // quick/merge and unnamed sorts land on the same class
        ComplexityEstimate {
            time: TimeComplexity::Linearithmic,
            efficiency: EfficiencyRating::Good,
            ..ComplexityEstimate::default()
        }
    }
}

fn from_raw_signals(signals: &PatternSignals) -> ComplexityEstimate {
    let base = ComplexityEstimate::default();

    if signals.has_binary_search_signal {
        ComplexityEstimate {
            time: TimeComplexity::Logarithmic,
            efficiency: EfficiencyRating::Excellent,
            ..base
        }
    } else if signals.has_sort_signal {
        sort_estimate(signals)
    } else if signals.loop_construct_count > 1 {
        ComplexityEstimate {
            time: TimeComplexity::Quadratic,
            efficiency: EfficiencyRating::Fair,
            ..base
        }
    } else if signals.has_recursion_signal {
        ComplexityEstimate {
            time: TimeComplexity::Exponential,
            space: SpaceComplexity::Linear,
            efficiency: EfficiencyRating::Poor,
        }
    } else if signals.has_dynamic_programming_signal {
        ComplexityEstimate {
            time: TimeComplexity::Quadratic,
            space: SpaceComplexity::Quadratic,
            efficiency: EfficiencyRating::Good,
        }
    } else if signals.has_tree_signal || signals.has_graph_signal {
        ComplexityEstimate {
            time: TimeComplexity::VerticesPlusEdges,
            space: SpaceComplexity::Vertices,
            efficiency: EfficiencyRating::Good,
        }
    } else {
        base
    }
}

fn from_classification(
    signals: &PatternSignals,
    classification: AlgorithmClassification,
) -> ComplexityEstimate {
    use AlgorithmClassification::*;

    let base = ComplexityEstimate::default();
    match classification {
        Sorting => sort_estimate(signals),
        BinarySearch => ComplexityEstimate {
            time: TimeComplexity::Logarithmic,
            efficiency: EfficiencyRating::Excellent,
            ..base
        },
        Search | General => base,
        DynamicProgramming => ComplexityEstimate {
            time: TimeComplexity::Quadratic,
            space: SpaceComplexity::Quadratic,
            efficiency: EfficiencyRating::Good,
        },
        TreeTraversal | Graph => ComplexityEstimate {
            time: TimeComplexity::VerticesPlusEdges,
            space: SpaceComplexity::Vertices,
            efficiency: EfficiencyRating::Good,
        },
        Recursive => ComplexityEstimate {
            time: TimeComplexity::Exponential,
            space: SpaceComplexity::Linear,
            efficiency: EfficiencyRating::Poor,
        },
        NestedLoop => ComplexityEstimate {
            time: TimeComplexity::Quadratic,
            efficiency: EfficiencyRating::Fair,
            ..base
        },
    }
}
