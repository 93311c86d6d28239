//! # stepwise-core
//!
//! Core layer for Stepwise: the graph data model and its auxiliary structures.
//!
//! This crate depends only on `stepwise-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Directed/undirected weighted graphs over dense node ids
//! - [`index`] - Adjacency index backing the graph
//! - [`union_find`] - Disjoint sets with union-by-rank and path compression

pub mod graph;
pub mod index;
pub mod union_find;

// Re-export commonly used types
pub use graph::{Edge, Graph};
pub use index::adjacency::{Adjacency, Neighbor};
pub use union_find::UnionFind;
