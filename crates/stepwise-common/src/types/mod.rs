//! Core type definitions for Stepwise.
//!
//! - Identifier types ([`NodeId`])
//! - Scalar types ([`Value`] for sequence elements, [`Weight`] for edges)

mod id;

pub use id::NodeId;

/// A sequence element. Sorting and searching engines operate on these.
pub type Value = i64;

/// An edge weight. Signed so that Bellman-Ford and Floyd-Warshall can see
/// negative edges; Dijkstra, A* and Prim assume non-negative weights.
pub type Weight = i64;
