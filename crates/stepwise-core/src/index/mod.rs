//! Index structures for graph connectivity.

pub mod adjacency;
