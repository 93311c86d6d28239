//! Minimum spanning tree algorithms: Kruskal and Prim.
//!
//! Both treat every edge as undirected. On a connected graph they produce
//! spanning trees of equal total weight, though the edge sets may differ when
//! weights tie.

use serde::Serialize;
use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::{NodeId, Weight};
use stepwise_common::utils::error::Result;
use stepwise_core::{Edge, Graph, UnionFind};

use super::traits::Frontier;

/// A spanning tree (or forest) and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MstResult {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Weight,
}

impl MstResult {
    fn accept(&mut self, edge: Edge, emitter: &mut StepEmitter<'_>) -> Result<()> {
        self.total_weight = self.total_weight.saturating_add(edge.weight);
        self.edges.push(edge);
        emitter.emit(Step::AcceptEdge {
            source: edge.source,
            target: edge.target,
            weight: edge.weight,
        })?;
        Ok(())
    }

    /// Number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn reject(edge: Edge, emitter: &mut StepEmitter<'_>) -> Result<()> {
    emitter.emit(Step::RejectEdge {
        source: edge.source,
        target: edge.target,
        weight: edge.weight,
    })?;
    Ok(())
}

// ============================================================================
// Kruskal's Algorithm
// ============================================================================

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are considered in ascending weight order (insertion order among
/// equal weights). An edge is accepted when its endpoints lie in different
/// components and rejected otherwise. The scan stops once `|V| - 1` edges
/// have been accepted; on a disconnected graph the result is a spanning
/// forest.
pub fn kruskal(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<MstResult> {
    let n = graph.node_count();
    let mut result = MstResult::default();
    if n < 2 {
        return Ok(result);
    }

    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(|e| e.weight);

    let mut components = UnionFind::new(n);
    for edge in edges {
        if components.union(edge.source.index(), edge.target.index()) {
            result.accept(edge, emitter)?;
            if result.len() == n - 1 {
                break;
            }
        } else {
            reject(edge, emitter)?;
        }
    }

    Ok(result)
}

// ============================================================================
// Prim's Algorithm
// ============================================================================

/// Computes a minimum spanning tree with Prim's algorithm, growing from
/// `start`.
///
/// The frontier holds candidate edges from the tree to the rest of the graph,
/// lightest first. Candidates whose far end joined the tree in the meantime
/// are rejected when popped. The tree spans the component containing `start`.
pub fn prim(graph: &Graph, start: NodeId, emitter: &mut StepEmitter<'_>) -> Result<MstResult> {
    graph.check_node(start)?;

    let n = graph.node_count();
    let mut result = MstResult::default();
    let mut in_tree = vec![false; n];
    let mut frontier: Frontier<Edge> = Frontier::new();

    in_tree[start.index()] = true;
    push_incident(graph, start, &in_tree, &mut frontier);

    while result.len() + 1 < n {
        let Some((_, edge)) = frontier.pop() else {
            break;
        };
        if in_tree[edge.target.index()] {
            reject(edge, emitter)?;
            continue;
        }
        in_tree[edge.target.index()] = true;
        result.accept(edge, emitter)?;
        push_incident(graph, edge.target, &in_tree, &mut frontier);
    }

    Ok(result)
}

fn push_incident(graph: &Graph, node: NodeId, in_tree: &[bool], frontier: &mut Frontier<Edge>) {
    for neighbor in graph.incident(node) {
        if !in_tree[neighbor.node.index()] {
            frontier.push(
                neighbor.weight,
                Edge::new(node, neighbor.node, neighbor.weight),
            );
        }
    }
}
