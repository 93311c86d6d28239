//! The algorithm catalog: names, descriptions, and name resolution.
//!
//! Each family has an enum whose `FromStr` implementation accepts the
//! canonical kebab-case name plus common spellings (`quicksort`,
//! `Bellman_Ford`, `a*`, `dijkstras-algorithm`). Sorting and searching
//! algorithms dispatch directly; graph algorithms return different result
//! types and are dispatched by the engine layer.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use stepwise_common::step::StepEmitter;
use stepwise_common::types::Value;
use stepwise_common::utils::error::{Error, Result};

use super::algorithms::searching;
use super::algorithms::sorting::{self, Keyed};

/// The family an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmFamily {
    /// In-place sorting of a sequence.
    Sort,
    /// Locating a target in a sequence.
    Search,
    /// Graph traversal, paths, spanning trees, and components.
    Graph,
}

impl AlgorithmFamily {
    /// Lowercase family name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Search => "search",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and maps `_` and spaces to `-`.
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

fn unknown(family: AlgorithmFamily, name: &str) -> Error {
    Error::UnknownAlgorithm {
        family: family.name(),
        name: name.to_string(),
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// A sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    /// Adjacent swaps with early exit.
    Bubble,
    /// Minimum of the unsorted suffix.
    Selection,
    /// Insertion into the sorted prefix.
    Insertion,
    /// Top-down merge sort.
    Merge,
    /// Lomuto quick sort.
    Quick,
    /// Max-heap sort.
    Heap,
    /// Counting sort over non-negative keys.
    Counting,
    /// LSD radix sort over non-negative keys.
    Radix,
    /// Run-based hybrid of insertion and merge sort.
    Tim,
}

impl SortAlgorithm {
    /// Every sorting algorithm, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Tim,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Tim => "tim",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bubble => "Swaps adjacent out-of-order pairs; stops after a pass with no swap",
            Self::Selection => "Swaps the minimum of the unsorted suffix into place",
            Self::Insertion => "Shifts each element left past its larger predecessors",
            Self::Merge => "Recursively sorts both halves and merges them",
            Self::Quick => "Partitions around the last element (Lomuto)",
            Self::Heap => "Builds a max-heap and repeatedly extracts the root",
            Self::Counting => "Counts occurrences of each non-negative key",
            Self::Radix => "Counting passes over decimal digits, least significant first",
            Self::Tim => "Insertion-sorts runs of 32, then merges runs of doubling width",
        }
    }

    /// Returns whether equal keys keep their input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        !matches!(self, Self::Selection | Self::Quick | Self::Heap)
    }

    /// Returns whether the algorithm rejects negative keys.
    #[must_use]
    pub const fn requires_non_negative(self) -> bool {
        matches!(self, Self::Counting | Self::Radix)
    }

    /// Sorts `values` ascending in place.
    pub fn sort<T: Keyed>(self, values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
        match self {
            Self::Bubble => sorting::bubble_sort(values, emitter),
            Self::Selection => sorting::selection_sort(values, emitter),
            Self::Insertion => sorting::insertion_sort(values, emitter),
            Self::Merge => sorting::merge_sort(values, emitter),
            Self::Quick => sorting::quick_sort(values, emitter),
            Self::Heap => sorting::heap_sort(values, emitter),
            Self::Counting => sorting::counting_sort(values, emitter),
            Self::Radix => sorting::radix_sort(values, emitter),
            Self::Tim => sorting::tim_sort(values, emitter),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        let key = normalized.strip_suffix("-sort").unwrap_or(&normalized);
        match key {
            "bubble" | "bubblesort" => Ok(Self::Bubble),
            "selection" | "selectionsort" => Ok(Self::Selection),
            "insertion" | "insertionsort" => Ok(Self::Insertion),
            "merge" | "mergesort" => Ok(Self::Merge),
            "quick" | "quicksort" => Ok(Self::Quick),
            "heap" | "heapsort" => Ok(Self::Heap),
            "counting" | "countingsort" => Ok(Self::Counting),
            "radix" | "radixsort" => Ok(Self::Radix),
            "tim" | "timsort" => Ok(Self::Tim),
            _ => Err(unknown(AlgorithmFamily::Sort, s)),
        }
    }
}

// ============================================================================
// Searching
// ============================================================================

/// A search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Scan every position.
    Linear,
    /// Halve the range.
    Binary,
    /// Jump in blocks of sqrt(n).
    Jump,
    /// Double a bound, then binary search.
    Exponential,
    /// Interpolate the probe position.
    Interpolation,
}

impl SearchAlgorithm {
    /// Every search algorithm, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Binary,
        Self::Jump,
        Self::Exponential,
        Self::Interpolation,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::Jump => "jump",
            Self::Exponential => "exponential",
            Self::Interpolation => "interpolation",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Linear => "Scans every position in order; works on unsorted input",
            Self::Binary => "Halves the candidate range around the middle element",
            Self::Jump => "Jumps ahead in blocks of sqrt(n), then scans one block",
            Self::Exponential => "Doubles a bound, then binary-searches the last interval",
            Self::Interpolation => "Estimates the position from the values at the bounds",
        }
    }

    /// Returns whether the input must be sorted ascending.
    #[must_use]
    pub const fn requires_sorted(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Searches `values` for `target`.
    pub fn search(
        self,
        values: &[Value],
        target: Value,
        emitter: &mut StepEmitter<'_>,
    ) -> Result<Option<usize>> {
        match self {
            Self::Linear => searching::linear_search(values, target, emitter),
            Self::Binary => searching::binary_search(values, target, emitter),
            Self::Jump => searching::jump_search(values, target, emitter),
            Self::Exponential => searching::exponential_search(values, target, emitter),
            Self::Interpolation => searching::interpolation_search(values, target, emitter),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        let key = normalized.strip_suffix("-search").unwrap_or(&normalized);
        match key {
            "linear" | "sequential" => Ok(Self::Linear),
            "binary" => Ok(Self::Binary),
            "jump" => Ok(Self::Jump),
            "exponential" | "galloping" => Ok(Self::Exponential),
            "interpolation" => Ok(Self::Interpolation),
            _ => Err(unknown(AlgorithmFamily::Search, s)),
        }
    }
}

// ============================================================================
// Graph algorithms
// ============================================================================

/// A graph algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphAlgorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Dijkstra's single-source shortest paths.
    Dijkstra,
    /// A* source-to-goal search.
    #[serde(rename = "astar")]
    AStar,
    /// Bellman-Ford shortest paths with negative-cycle detection.
    BellmanFord,
    /// Floyd-Warshall all-pairs shortest paths.
    FloydWarshall,
    /// Kruskal's minimum spanning tree.
    Kruskal,
    /// Prim's minimum spanning tree.
    Prim,
    /// Kahn's topological sort.
    TopologicalSort,
    /// Tarjan's strongly connected components.
    Tarjan,
    /// Kosaraju's strongly connected components.
    Kosaraju,
}

impl GraphAlgorithm {
    /// Every graph algorithm, in catalog order.
    pub const ALL: [Self; 11] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::AStar,
        Self::BellmanFord,
        Self::FloydWarshall,
        Self::Kruskal,
        Self::Prim,
        Self::TopologicalSort,
        Self::Tarjan,
        Self::Kosaraju,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::BellmanFord => "bellman-ford",
            Self::FloydWarshall => "floyd-warshall",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::TopologicalSort => "topological-sort",
            Self::Tarjan => "tarjan",
            Self::Kosaraju => "kosaraju",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bfs => "Visits reachable nodes level by level with a FIFO queue",
            Self::Dfs => "Visits reachable nodes depth-first, in pre-order",
            Self::Dijkstra => "Single-source shortest paths for non-negative weights",
            Self::AStar => "Source-to-goal path ordered by distance plus heuristic",
            Self::BellmanFord => "Single-source shortest paths; detects negative cycles",
            Self::FloydWarshall => "All-pairs shortest paths over a dense matrix",
            Self::Kruskal => "Minimum spanning tree from edges in weight order",
            Self::Prim => "Minimum spanning tree grown from a start node",
            Self::TopologicalSort => "Kahn's in-degree ordering of a directed acyclic graph",
            Self::Tarjan => "Strongly connected components in one DFS with low-links",
            Self::Kosaraju => "Strongly connected components via two DFS passes",
        }
    }

    /// Returns whether a source (or start) node is required.
    #[must_use]
    pub const fn needs_source(self) -> bool {
        matches!(
            self,
            Self::Bfs | Self::Dfs | Self::Dijkstra | Self::AStar | Self::BellmanFord | Self::Prim
        )
    }

    /// Returns whether a goal node is required.
    #[must_use]
    pub const fn needs_goal(self) -> bool {
        matches!(self, Self::AStar)
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        let key = normalized
            .strip_suffix("-algorithm")
            .unwrap_or(&normalized)
            .replace('\'', "");
        match key.as_str() {
            "bfs" | "breadth-first" | "breadth-first-search" => Ok(Self::Bfs),
            "dfs" | "depth-first" | "depth-first-search" => Ok(Self::Dfs),
            "dijkstra" | "dijkstras" => Ok(Self::Dijkstra),
            "astar" | "a-star" | "a*" | "a-search" => Ok(Self::AStar),
            "bellman-ford" | "bellmanford" => Ok(Self::BellmanFord),
            "floyd-warshall" | "floydwarshall" | "floyd" => Ok(Self::FloydWarshall),
            "kruskal" | "kruskals" => Ok(Self::Kruskal),
            "prim" | "prims" => Ok(Self::Prim),
            "topological-sort" | "topological" | "topo" | "toposort" | "kahn" => {
                Ok(Self::TopologicalSort)
            }
            "tarjan" | "tarjans" => Ok(Self::Tarjan),
            "kosaraju" | "kosarajus" => Ok(Self::Kosaraju),
            _ => Err(unknown(AlgorithmFamily::Graph, s)),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Catalog entry for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Family.
    pub family: AlgorithmFamily,
    /// Canonical name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Stability, for sorting algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
}

/// Every algorithm, keyed by canonical name, in family then catalog order.
#[must_use]
pub fn catalog() -> IndexMap<&'static str, AlgorithmInfo> {
    let sorts = SortAlgorithm::ALL.iter().map(|a| AlgorithmInfo {
        family: AlgorithmFamily::Sort,
        name: a.name(),
        description: a.description(),
        stable: Some(a.is_stable()),
    });
    let searches = SearchAlgorithm::ALL.iter().map(|a| AlgorithmInfo {
        family: AlgorithmFamily::Search,
        name: a.name(),
        description: a.description(),
        stable: None,
    });
    let graphs = GraphAlgorithm::ALL.iter().map(|a| AlgorithmInfo {
        family: AlgorithmFamily::Graph,
        name: a.name(),
        description: a.description(),
        stable: None,
    });

    sorts
        .chain(searches)
        .chain(graphs)
        .map(|info| (info.name, info))
        .collect()
}
