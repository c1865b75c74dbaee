use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::signals::PatternSignals;

/// Coarse algorithm family assigned for display.
///
/// Variant order is the classification priority: the first variant whose
/// signal fires wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AlgorithmClassification {
    #[serde(rename = "Sorting Algorithm")]
    #[strum(serialize = "Sorting Algorithm")]
    Sorting,
    #[serde(rename = "Binary Search Algorithm")]
    #[strum(serialize = "Binary Search Algorithm")]
    BinarySearch,
    #[serde(rename = "Search Algorithm")]
    #[strum(serialize = "Search Algorithm")]
    Search,
    #[serde(rename = "Dynamic Programming Algorithm")]
    #[strum(serialize = "Dynamic Programming Algorithm")]
    DynamicProgramming,
    #[serde(rename = "Tree Traversal Algorithm")]
    #[strum(serialize = "Tree Traversal Algorithm")]
    TreeTraversal,
    #[serde(rename = "Graph Algorithm")]
    #[strum(serialize = "Graph Algorithm")]
    Graph,
    #[serde(rename = "Recursive Algorithm")]
    #[strum(serialize = "Recursive Algorithm")]
    Recursive,
    #[serde(rename = "Nested Loop Algorithm")]
    #[strum(serialize = "Nested Loop Algorithm")]
    NestedLoop,
    #[serde(rename = "General Algorithm")]
    #[strum(serialize = "General Algorithm")]
    General,
}

impl AlgorithmClassification {
    pub fn is_sorting(self) -> bool {
        matches!(self, Self::Sorting)
    }

    /// Both plain and binary search.
    pub fn is_search(self) -> bool {
        matches!(self, Self::BinarySearch | Self::Search)
    }
}

/// Pick the classification for a signal set.
///
/// Textual hints such as "sort" outrank structural ones such as nested
/// loops even when both are present.
pub fn classify(signals: &PatternSignals) -> AlgorithmClassification {
    use AlgorithmClassification::*;

    if signals.has_sort_signal {
        Sorting
    } else if signals.has_binary_search_signal {
        BinarySearch
    } else if signals.has_search_signal {
        Search
    } else if signals.has_dynamic_programming_signal {
        DynamicProgramming
    } else if signals.has_tree_signal {
        TreeTraversal
    } else if signals.has_graph_signal {
        Graph
    } else if signals.has_recursion_signal {
        Recursive
    } else if signals.loop_construct_count > 1 {
        NestedLoop
    } else {
        General
    }
}
