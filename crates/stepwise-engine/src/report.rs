//! Run results and reports.

use std::time::Duration;

use serde::{Serialize, Serializer};
use stepwise_adapters::plugins::AlgorithmFamily;
use stepwise_adapters::plugins::algorithms::{
    DistanceMatrix, MstResult, PathResult, ShortestPaths,
};
use stepwise_common::types::{NodeId, Value};

/// Result of a search: an index, or the NOT_FOUND sentinel.
///
/// Serialises as the index, or `-1` when the target is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target sits at this index.
    Found(usize),
    /// The target is absent.
    NotFound,
}

impl SearchOutcome {
    /// Sentinel used when the outcome is flattened to an integer.
    pub const NOT_FOUND: i64 = -1;

    /// The index, if found.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// The index as a signed integer, `-1` when not found.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Found(index) => index as i64,
            Self::NotFound => Self::NOT_FOUND,
        }
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

impl Serialize for SearchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// The final output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum RunResult {
    /// The sorted sequence.
    Sorted(Vec<Value>),
    /// A search result.
    Search(SearchOutcome),
    /// Nodes in visit order (BFS, DFS).
    Visit(Vec<NodeId>),
    /// Single-source distances and predecessors.
    ShortestPaths(ShortestPaths),
    /// A source-to-goal path; `None` if the goal is unreachable.
    Path(Option<PathResult>),
    /// Bellman-Ford found a reachable negative-weight cycle.
    NegativeCycle,
    /// All-pairs distances.
    AllPairs(DistanceMatrix),
    /// A minimum spanning tree or forest.
    SpanningTree(MstResult),
    /// A topological order of every node.
    TopologicalOrder(Vec<NodeId>),
    /// Topological sort found a cycle; no order exists.
    CycleDetected,
    /// Strongly connected components.
    Components(Vec<Vec<NodeId>>),
    /// Cancelled at a step boundary before completion.
    Aborted,
}

impl RunResult {
    /// Returns whether the run was cancelled.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// A completed (or aborted) run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Algorithm family.
    pub family: AlgorithmFamily,
    /// Canonical algorithm name.
    pub algorithm: &'static str,
    /// The outcome.
    pub result: RunResult,
    /// Number of steps delivered to the observer.
    pub steps: u64,
    /// Wall-clock duration, pacing included.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
