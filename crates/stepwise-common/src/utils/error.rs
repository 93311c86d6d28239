//! Error types for Stepwise.
//!
//! Every engine reports failures through [`Error`]. Input-shape problems are
//! detected before the first step is emitted; [`Error::Aborted`] is the only
//! variant that can appear after steps have been delivered.

use thiserror::Error;

use crate::step::Aborted;
use crate::types::{NodeId, Value};

/// Result type alias used across all Stepwise crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The Stepwise error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input has an invalid shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A node reference falls outside `0..node_count`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// A key-indexed sort received a negative value.
    #[error("value {value} at index {index} is negative; counting and radix sort need non-negative keys")]
    NegativeValue {
        /// Position of the value in the input.
        index: usize,
        /// The negative value.
        value: Value,
    },

    /// A required run parameter was not supplied.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// No algorithm with this name exists in the family.
    #[error("unknown {family} algorithm: {name}")]
    UnknownAlgorithm {
        /// Algorithm family (sort, search, graph).
        family: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// The run was cancelled at a step boundary.
    #[error("run aborted by cancellation")]
    Aborted,
}

impl From<Aborted> for Error {
    fn from(_: Aborted) -> Self {
        Error::Aborted
    }
}

impl Error {
    /// Returns true if this error is a cancellation rather than a failure.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NodeOutOfRange {
            node: NodeId::new(9),
            node_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "node 9 is out of range for a graph with 4 nodes"
        );

        let err = Error::UnknownAlgorithm {
            family: "sort",
            name: "bogo".to_string(),
        };
        assert_eq!(err.to_string(), "unknown sort algorithm: bogo");
    }

    #[test]
    fn test_aborted_conversion() {
        let err: Error = Aborted.into();
        assert!(err.is_aborted());
        assert!(!Error::InvalidInput("x".into()).is_aborted());
    }
}
