//! Weighted graphs over dense node ids.
//!
//! A [`Graph`] has a fixed node count `n` (nodes are `0..n`) and an edge list
//! kept in insertion order. Every edge is validated when it is added, so the
//! engines never see an endpoint outside the graph.
//!
//! Undirected graphs store each edge once in the edge list but index it in
//! both directions, so traversals and shortest-path engines can treat every
//! graph as a set of directed arcs.

use serde::{Deserialize, Serialize};
use stepwise_common::types::{NodeId, Weight};
use stepwise_common::utils::error::{Error, Result};

use crate::index::adjacency::{Adjacency, Neighbor};

/// A stored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node.
    pub source: NodeId,
    /// Destination node.
    pub target: NodeId,
    /// Edge weight (1 for unweighted edges).
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The same edge pointing the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// A directed or undirected weighted graph.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    edges: Vec<Edge>,
    /// Outgoing entries per node (both directions for undirected graphs).
    forward: Adjacency,
    /// Incoming entries per node; the neighbor is the edge's source.
    backward: Adjacency,
}

impl Graph {
    /// Creates a directed graph with `node_count` nodes and no edges.
    #[must_use]
    pub fn directed(node_count: usize) -> Self {
        Self::with_direction(node_count, true)
    }

    /// Creates an undirected graph with `node_count` nodes and no edges.
    #[must_use]
    pub fn undirected(node_count: usize) -> Self {
        Self::with_direction(node_count, false)
    }

    fn with_direction(node_count: usize, directed: bool) -> Self {
        Self {
            directed,
            edges: Vec::new(),
            forward: Adjacency::new(node_count),
            backward: Adjacency::new(node_count),
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] for the first edge whose endpoint is
    /// not below `node_count`.
    pub fn from_edges<I>(node_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32, Weight)>,
    {
        let mut graph = Self::with_direction(node_count, directed);
        for (source, target, weight) in edges {
            graph.add_edge(NodeId::new(source), NodeId::new(target), weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from unweighted `(source, target)` pairs (weight 1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] for an out-of-range endpoint.
    pub fn from_pairs<I>(node_count: usize, directed: bool, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self::from_edges(
            node_count,
            directed,
            pairs.into_iter().map(|(s, t)| (s, t, 1)),
        )
    }

    /// Adds an edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] if either endpoint is outside the
    /// graph; the graph is left unchanged.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> Result<()> {
        self.check_node(source)?;
        self.check_node(target)?;
        self.insert_edge(source, target, weight);
        Ok(())
    }

    /// Appends an edge whose endpoints are already known to be in range.
    fn insert_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        let edge = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
        });

        self.forward.push(
            source,
            Neighbor {
                node: target,
                weight,
                edge,
            },
        );
        self.backward.push(
            target,
            Neighbor {
                node: source,
                weight,
                edge,
            },
        );

        if !self.directed && source != target {
            self.forward.push(
                target,
                Neighbor {
                    node: source,
                    weight,
                    edge,
                },
            );
            self.backward.push(
                source,
                Neighbor {
                    node: target,
                    weight,
                    edge,
                },
            );
        }
    }

    /// Fails with [`Error::NodeOutOfRange`] unless `node` is in the graph.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Returns whether `node` is in `0..node_count`.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.forward.node_count()
    }

    /// Number of stored edges (an undirected edge counts once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.node_count()).map(NodeId::from)
    }

    /// The edge list in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every traversable arc, in edge insertion order.
    ///
    /// For undirected graphs each edge yields both directions, forward first.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.directed;
        self.edges.iter().flat_map(move |&edge| {
            let back = (!directed && edge.source != edge.target).then(|| edge.reversed());
            std::iter::once(edge).chain(back)
        })
    }

    /// Nodes reachable from `node` in one hop, in insertion order.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.forward.neighbors(node)
    }

    /// Nodes with an arc into `node`, in insertion order.
    #[must_use]
    pub fn incoming(&self, node: NodeId) -> &[Neighbor] {
        self.backward.neighbors(node)
    }

    /// Every edge touching `node`, ignoring direction.
    ///
    /// For undirected graphs this equals [`neighbors`](Self::neighbors); for
    /// directed graphs it is the outgoing entries followed by the incoming ones.
    pub fn incident(&self, node: NodeId) -> impl Iterator<Item = Neighbor> + '_ {
        let incoming: &[Neighbor] = if self.directed {
            self.incoming(node)
        } else {
            &[]
        };
        self.neighbors(node)
            .iter()
            .chain(incoming.iter().filter(move |n| n.node != node))
            .copied()
    }

    /// Out-degree of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.forward.degree(node)
    }

    /// In-degree of every node, indexed by node.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        self.nodes().map(|n| self.backward.degree(n)).collect()
    }

    /// The graph with every edge reversed. Undirected graphs are returned as-is.
    #[must_use]
    pub fn transpose(&self) -> Graph {
        let mut transposed = Self::with_direction(self.node_count(), self.directed);
        for edge in &self.edges {
            let edge = if self.directed { edge.reversed() } else { *edge };
            transposed.insert_edge(edge.source, edge.target, edge.weight);
        }
        transposed
    }

    /// Returns whether any edge has a negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(neighbors: &[Neighbor]) -> Vec<u32> {
        neighbors.iter().map(|n| n.node.as_u32()).collect()
    }

    fn diamond() -> Graph {
        //   0 -> 1 -> 3
        //   |         ^
        //   v         |
        //   2 --------+
        Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 4), (1, 3, 2), (2, 3, 1)]).unwrap()
    }

    #[test]
    fn test_directed_adjacency() {
        let g = diamond();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(ids(g.neighbors(NodeId::new(0))), vec![1, 2]);
        assert_eq!(ids(g.incoming(NodeId::new(3))), vec![1, 2]);
        assert!(g.neighbors(NodeId::new(3)).is_empty());
        assert_eq!(g.in_degrees(), vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_undirected_indexes_both_directions() {
        let g = Graph::from_pairs(3, false, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(ids(g.neighbors(NodeId::new(1))), vec![0, 2]);
        assert_eq!(g.arcs().count(), 4);
    }

    #[test]
    fn test_rejects_out_of_range_endpoint() {
        let mut g = Graph::directed(2);
        let err = g.add_edge(NodeId::new(0), NodeId::new(5), 1).unwrap_err();
        assert_eq!(
            err,
            Error::NodeOutOfRange {
                node: NodeId::new(5),
                node_count: 2
            }
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(NodeId::new(0)).is_empty());
    }

    #[test]
    fn test_from_edges_stops_at_first_bad_edge() {
        let result = Graph::from_edges(3, true, [(0, 1, 1), (3, 0, 1)]);
        assert!(matches!(result, Err(Error::NodeOutOfRange { .. })));
    }

    #[test]
    fn test_transpose_reverses_edges() {
        let t = diamond().transpose();
        assert_eq!(ids(t.neighbors(NodeId::new(3))), vec![1, 2]);
        assert!(t.neighbors(NodeId::new(0)).is_empty());
        assert_eq!(t.edges()[0], Edge::new(1u32, 0u32, 1));
    }

    #[test]
    fn test_transpose_twice_restores_graph() {
        let g = diamond();
        let back = g.transpose().transpose();
        assert_eq!(back.edges(), g.edges());
        assert_eq!(back.edge_count(), g.edge_count());
        for node in g.nodes() {
            assert_eq!(ids(back.neighbors(node)), ids(g.neighbors(node)));
            assert_eq!(ids(back.incoming(node)), ids(g.incoming(node)));
        }

        let u = Graph::from_pairs(3, false, [(0, 1), (1, 2)]).unwrap();
        let ut = u.transpose();
        assert_eq!(ids(ut.neighbors(NodeId::new(1))), vec![0, 2]);
        assert_eq!(ut.edges(), u.edges());
    }

    #[test]
    fn test_incident_ignores_direction() {
        let g = diamond();
        let mut touching: Vec<u32> = g.incident(NodeId::new(1)).map(|n| n.node.as_u32()).collect();
        touching.sort_unstable();
        assert_eq!(touching, vec![0, 3]);
    }

    #[test]
    fn test_undirected_self_loop_indexed_once() {
        let g = Graph::from_pairs(1, false, [(0, 0)]).unwrap();
        assert_eq!(g.neighbors(NodeId::new(0)).len(), 1);
        assert_eq!(g.arcs().count(), 1);
    }

    #[test]
    fn test_negative_weight_detection() {
        assert!(!diamond().has_negative_weight());
        let g = Graph::from_edges(2, true, [(0, 1, -3)]).unwrap();
        assert!(g.has_negative_weight());
    }
}
