//! Algorithm plugins for Stepwise.
//!
//! ## Modules
//!
//! - [`algorithms`] - Sorting, searching, and graph engines
//! - [`registry`] - Algorithm names, descriptions, and name resolution

pub mod algorithms;
pub mod registry;

pub use registry::{
    AlgorithmFamily, AlgorithmInfo, GraphAlgorithm, SearchAlgorithm, SortAlgorithm, catalog,
};
