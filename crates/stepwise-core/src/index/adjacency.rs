//! Dense adjacency lists.
//!
//! Nodes are dense (`0..n`), so lists live in a `Vec` indexed by node rather
//! than a map. Each list keeps insertion order, which fixes the order in
//! which traversals explore edges. Most nodes in the graphs we animate have
//! only a handful of edges, so lists are inline `SmallVec`s.

use smallvec::SmallVec;
use stepwise_common::types::{NodeId, Weight};

/// Inline capacity of a node's adjacency list before it spills to the heap.
const INLINE_DEGREE: usize = 4;

/// One adjacency entry: the node at the other end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The adjacent node.
    pub node: NodeId,
    /// Weight of the connecting edge.
    pub weight: Weight,
    /// Position of the connecting edge in the graph's edge list.
    pub edge: usize,
}

/// Per-node adjacency lists for a fixed node count.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    lists: Vec<SmallVec<[Neighbor; INLINE_DEGREE]>>,
    entry_count: usize,
}

impl Adjacency {
    /// Creates empty lists for `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            lists: vec![SmallVec::new(); node_count],
            entry_count: 0,
        }
    }

    /// Appends an entry to `src`'s list.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not below the node count; callers validate first.
    pub fn push(&mut self, src: NodeId, neighbor: Neighbor) {
        self.lists[src.index()].push(neighbor);
        self.entry_count += 1;
    }

    /// Entries of `src` in insertion order. Empty for unknown nodes.
    #[must_use]
    pub fn neighbors(&self, src: NodeId) -> &[Neighbor] {
        self.lists.get(src.index()).map_or(&[], |list| list.as_slice())
    }

    /// Number of entries in `src`'s list.
    #[must_use]
    pub fn degree(&self, src: NodeId) -> usize {
        self.neighbors(src).len()
    }

    /// Number of nodes the index was created for.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of entries across all lists.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}
