//! Step observations and their delivery.
//!
//! Engines never render anything. At each well-defined point of progress they
//! hand a [`Step`] to a [`StepEmitter`], which forwards it to the registered
//! [`Observer`]s, optionally pauses, and checks for cancellation.
//!
//! ## Usage
//!
//! ```
//! use stepwise_common::step::{Step, StepEmitter};
//!
//! let mut log: Vec<Step> = Vec::new();
//! {
//!     let mut emitter = StepEmitter::new().with_observer(&mut log);
//!     emitter.emit(Step::Compare { left: 0, right: 1 }).unwrap();
//! }
//! assert_eq!(log.len(), 1);
//! ```

mod cancel;
mod emitter;
mod log;

pub use cancel::CancellationToken;
pub use emitter::{Aborted, Observer, StepEmitter};
pub use log::StepLog;

use serde::{Deserialize, Serialize};

use crate::types::{NodeId, Value, Weight};

/// One reported unit of algorithm progress.
///
/// Sequence engines (sorting, searching) report positions; graph engines
/// report nodes and edges. A step is emitted once and never retained by the
/// engine that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Two positions were compared.
    Compare {
        /// Left-hand position.
        left: usize,
        /// Right-hand position.
        right: usize,
    },
    /// Two positions exchanged their values.
    Swap {
        /// First position.
        left: usize,
        /// Second position.
        right: usize,
    },
    /// A value was written to a position (shifts, merges, scatter passes).
    Write {
        /// Destination position.
        index: usize,
        /// The key written.
        value: Value,
    },
    /// A search examined a position.
    Probe {
        /// Examined position.
        index: usize,
        /// The value found there.
        value: Value,
    },

    /// A node was discovered (marked visited / entered the frontier).
    Discover {
        /// The node.
        node: NodeId,
    },
    /// All of a node's outgoing edges have been explored.
    Finish {
        /// The node.
        node: NodeId,
    },
    /// An edge led to an undiscovered node.
    TreeEdge {
        /// Edge source.
        source: NodeId,
        /// Edge target.
        target: NodeId,
    },
    /// An edge led back to a node still on the DFS stack.
    BackEdge {
        /// Edge source.
        source: NodeId,
        /// Edge target.
        target: NodeId,
    },
    /// A tentative distance improved through an edge.
    Relax {
        /// Edge source.
        source: NodeId,
        /// Edge target.
        target: NodeId,
        /// Previous tentative distance (`None` = unreached).
        old: Option<Weight>,
        /// New tentative distance.
        new: Weight,
    },
    /// A node's distance became final.
    Settle {
        /// The node.
        node: NodeId,
        /// Its final distance from the source.
        distance: Weight,
    },
    /// An all-pairs entry improved through an intermediate node.
    PairUpdate {
        /// Row (path start).
        from: NodeId,
        /// Column (path end).
        to: NodeId,
        /// Intermediate node.
        via: NodeId,
        /// New distance.
        distance: Weight,
    },
    /// An edge joined the spanning tree.
    AcceptEdge {
        /// Edge source.
        source: NodeId,
        /// Edge target.
        target: NodeId,
        /// Edge weight.
        weight: Weight,
    },
    /// An edge was considered and discarded (it would close a cycle).
    RejectEdge {
        /// Edge source.
        source: NodeId,
        /// Edge target.
        target: NodeId,
        /// Edge weight.
        weight: Weight,
    },
    /// A node was appended to a topological order.
    Order {
        /// The node.
        node: NodeId,
        /// Its position in the order.
        position: usize,
    },
    /// A strongly connected component was completed.
    Component {
        /// Members of the component.
        nodes: Vec<NodeId>,
    },
}

impl Step {
    /// Short name of the step kind, matching its serialized tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Compare { .. } => "compare",
            Step::Swap { .. } => "swap",
            Step::Write { .. } => "write",
            Step::Probe { .. } => "probe",
            Step::Discover { .. } => "discover",
            Step::Finish { .. } => "finish",
            Step::TreeEdge { .. } => "tree_edge",
            Step::BackEdge { .. } => "back_edge",
            Step::Relax { .. } => "relax",
            Step::Settle { .. } => "settle",
            Step::PairUpdate { .. } => "pair_update",
            Step::AcceptEdge { .. } => "accept_edge",
            Step::RejectEdge { .. } => "reject_edge",
            Step::Order { .. } => "order",
            Step::Component { .. } => "component",
        }
    }

    /// Applies a sequence step to a snapshot, reproducing the engine's
    /// in-place mutation. Non-mutating steps leave the snapshot untouched.
    pub fn apply(&self, snapshot: &mut [Value]) {
        match *self {
            Step::Swap { left, right } => snapshot.swap(left, right),
            Step::Write { index, value } => snapshot[index] = value,
            _ => {}
        }
    }
}
