//! Algorithm engines for Stepwise.
//!
//! Every engine takes its input explicitly, reports progress through a
//! [`StepEmitter`](stepwise_common::step::StepEmitter), and returns its
//! result. No engine keeps state between invocations.
//!
//! ## Algorithm Categories
//!
//! - [`sorting`] - Bubble, selection, insertion, merge, quick, heap, counting, radix, tim
//! - [`searching`] - Linear, binary, jump, exponential, interpolation
//! - `traversal` - BFS, DFS
//! - `shortest_path` - Dijkstra, A*, Bellman-Ford, Floyd-Warshall
//! - `mst` - Kruskal, Prim
//! - `components` - Topological sort, Tarjan and Kosaraju SCC
//!
//! ## Usage
//!
//! ```
//! use stepwise_adapters::plugins::algorithms::{dijkstra, sorting};
//! use stepwise_common::step::{Step, StepEmitter};
//! use stepwise_common::NodeId;
//! use stepwise_core::Graph;
//!
//! let mut values = vec![5, 2, 9, 1];
//! sorting::quick_sort(&mut values, &mut StepEmitter::new()).unwrap();
//! assert_eq!(values, vec![1, 2, 5, 9]);
//!
//! let graph = Graph::from_edges(3, true, [(0, 1, 2), (1, 2, 2), (0, 2, 7)]).unwrap();
//! let mut steps: Vec<Step> = Vec::new();
//! let paths = {
//!     let mut emitter = StepEmitter::new().with_observer(&mut steps);
//!     dijkstra(&graph, NodeId::new(0), &mut emitter).unwrap()
//! };
//! assert_eq!(paths.distance(NodeId::new(2)), Some(4));
//! assert!(!steps.is_empty());
//! ```

mod components;
mod mst;
mod shortest_path;
mod traits;
mod traversal;

pub mod searching;
pub mod sorting;

// Core traits
pub use traits::{Frontier, MinScored};

// Traversal algorithms
pub use traversal::{bfs, dfs, dfs_all};

// Component algorithms
pub use components::{TopologicalOrder, is_dag, kosaraju_scc, tarjan_scc, topological_sort};

// Shortest path algorithms
pub use shortest_path::{
    BellmanFordResult, DistanceMatrix, PathResult, ShortestPaths, astar, bellman_ford, dijkstra,
    floyd_warshall, index_distance, zero_heuristic,
};

// Minimum Spanning Tree algorithms
pub use mst::{MstResult, kruskal, prim};
