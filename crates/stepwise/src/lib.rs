//! # Stepwise
//!
//! Classic sorting, searching and graph algorithms that report every
//! comparison, swap, probe, relaxation and visit as a [`Step`].
//!
//! If you're new here, start with [`Engine`]: it resolves an algorithm by
//! name, runs it on a private copy of your input, and hands each step to an
//! observer. Pacing and cancellation live in [`RunOptions`].
//!
//! ## Algorithms
//!
//! | Family | Algorithms |
//! | ------ | ---------- |
//! | Sort | bubble, selection, insertion, merge, quick, heap, counting, radix, tim |
//! | Search | linear, binary, jump, exponential, interpolation |
//! | Graph | bfs, dfs, dijkstra, astar, bellman-ford, floyd-warshall, kruskal, prim, topological-sort, tarjan, kosaraju |
//!
//! ## Quick Start
//!
//! ```rust
//! use stepwise::{Engine, Graph, NodeId, RunResult, Step};
//!
//! let engine = Engine::new();
//!
//! // Watch a bubble sort
//! let mut swaps = 0;
//! let report = engine.run_sort("bubble", &[3, 1, 2], &mut |step: &Step| {
//!     if matches!(step, Step::Swap { .. }) {
//!         swaps += 1;
//!     }
//! })?;
//! assert_eq!(report.result, RunResult::Sorted(vec![1, 2, 3]));
//! assert_eq!(swaps, 2);
//!
//! // Shortest paths on a small weighted graph
//! let graph = Graph::from_edges(3, true, [(0, 1, 4), (0, 2, 1), (2, 1, 1)])?;
//! let mut steps: Vec<Step> = Vec::new();
//! let report = engine.run_graph_algorithm("dijkstra", &graph, Some(NodeId::new(0)), None, &mut steps)?;
//! if let RunResult::ShortestPaths(paths) = report.result {
//!     assert_eq!(paths.distance(NodeId::new(1)), Some(2));
//! }
//! # Ok::<(), stepwise::Error>(())
//! ```
//!
//! The engines themselves are plain functions in [`algorithms`] and can be
//! driven directly with a [`StepEmitter`].

// Re-export the run contract
pub use stepwise_engine::{
    DATASETS, Dataset, Engine, Heuristic, RunOptions, RunReport, RunResult, SearchOutcome,
    dataset, random_sequence, sample_sequence,
};

// Re-export core types - you'll need these for building inputs and reading steps
pub use stepwise_common::step::{Aborted, CancellationToken, Observer, Step, StepEmitter, StepLog};
pub use stepwise_common::types::{NodeId, Value, Weight};
pub use stepwise_common::utils::error::{Error, Result};
pub use stepwise_core::{Edge, Graph, UnionFind};

// Re-export the catalog and the engines
pub use stepwise_adapters::plugins::algorithms;
pub use stepwise_adapters::plugins::{
    AlgorithmFamily, AlgorithmInfo, GraphAlgorithm, SearchAlgorithm, SortAlgorithm, catalog,
};
