//! Ordering and component algorithms on directed graphs: topological sort
//! (Kahn), Tarjan's and Kosaraju's strongly connected components.

use std::collections::VecDeque;

use serde::Serialize;
use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::NodeId;
use stepwise_common::utils::error::{Error, Result};
use stepwise_core::Graph;

use super::traversal::{NodeColor, dfs_all, dfs_from};

// ============================================================================
// Topological Sort
// ============================================================================

/// Outcome of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "order", rename_all = "snake_case")]
pub enum TopologicalOrder {
    /// Every edge `(u, v)` has `u` before `v`.
    Order(Vec<NodeId>),
    /// The graph contains a cycle, so no order exists.
    CycleDetected,
}

impl TopologicalOrder {
    /// The order, or `None` when a cycle was detected.
    #[must_use]
    pub fn order(&self) -> Option<&[NodeId]> {
        match self {
            Self::Order(order) => Some(order),
            Self::CycleDetected => None,
        }
    }
}

/// Orders the nodes of a directed graph with Kahn's algorithm.
///
/// Zero in-degree nodes are seeded in ascending id order. Each dequeued node
/// is reported with a [`Step::Order`] carrying its position, then its
/// out-neighbours lose one in-degree each. If fewer than `|V|` nodes are
/// ordered, the remaining ones lie on or behind a cycle.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for undirected graphs.
pub fn topological_sort(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<TopologicalOrder> {
    if !graph.is_directed() {
        return Err(Error::InvalidInput(
            "topological sort requires a directed graph".to_string(),
        ));
    }

    let mut in_degree = graph.in_degrees();
    let mut queue: VecDeque<NodeId> = graph
        .nodes()
        .filter(|n| in_degree[n.index()] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        emitter.emit(Step::Order {
            node,
            position: order.len(),
        })?;
        order.push(node);

        for neighbor in graph.neighbors(node) {
            let degree = &mut in_degree[neighbor.node.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(neighbor.node);
            }
        }
    }

    if order.len() < graph.node_count() {
        tracing::debug!(
            ordered = order.len(),
            nodes = graph.node_count(),
            "topological sort found a cycle"
        );
        return Ok(TopologicalOrder::CycleDetected);
    }
    Ok(TopologicalOrder::Order(order))
}

/// Returns whether `graph` is a directed acyclic graph.
#[must_use]
pub fn is_dag(graph: &Graph) -> bool {
    matches!(
        topological_sort(graph, &mut StepEmitter::new()),
        Ok(TopologicalOrder::Order(_))
    )
}

// ============================================================================
// Tarjan's Algorithm
// ============================================================================

/// Finds strongly connected components with Tarjan's algorithm.
///
/// A single DFS (explicit stack, roots in ascending id order) assigns each
/// node a discovery index and a low-link. When a node finishes with
/// `low_link == index` it roots a component, which is popped off the node
/// stack down to and including that node.
///
/// # Returns
///
/// Components in completion order (reverse topological order of the
/// condensation), each with its nodes in ascending id order.
pub fn tarjan_scc(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<Vec<Vec<NodeId>>> {
    let n = graph.node_count();
    let mut index: Vec<Option<usize>> = vec![None; n];
    let mut low_link = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<NodeId> = Vec::new();
    let mut next_index = 0;
    let mut components = Vec::new();

    // Call stack entries: (node, next neighbour index)
    let mut call: Vec<(NodeId, usize)> = Vec::new();

    for root in graph.nodes() {
        if index[root.index()].is_some() {
            continue;
        }

        index[root.index()] = Some(next_index);
        low_link[root.index()] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root.index()] = true;
        emitter.emit(Step::Discover { node: root })?;
        call.push((root, 0));

        while let Some((node, next)) = call.last_mut() {
            let node = *node;
            let neighbors = graph.neighbors(node);

            if *next < neighbors.len() {
                let target = neighbors[*next].node;
                *next += 1;

                match index[target.index()] {
                    None => {
                        emitter.emit(Step::TreeEdge {
                            source: node,
                            target,
                        })?;
                        index[target.index()] = Some(next_index);
                        low_link[target.index()] = next_index;
                        next_index += 1;
                        stack.push(target);
                        on_stack[target.index()] = true;
                        emitter.emit(Step::Discover { node: target })?;
                        call.push((target, 0));
                    }
                    Some(target_index) if on_stack[target.index()] => {
                        let low = &mut low_link[node.index()];
                        *low = (*low).min(target_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            call.pop();
            emitter.emit(Step::Finish { node })?;

            if Some(low_link[node.index()]) == index[node.index()] {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    on_stack[member.index()] = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                component.sort_unstable();
                emitter.emit(Step::Component {
                    nodes: component.clone(),
                })?;
                components.push(component);
            }

            if let Some(&(parent, _)) = call.last() {
                let child_low = low_link[node.index()];
                let low = &mut low_link[parent.index()];
                *low = (*low).min(child_low);
            }
        }
    }

    Ok(components)
}

// ============================================================================
// Kosaraju's Algorithm
// ============================================================================

/// Finds strongly connected components with Kosaraju's algorithm.
///
/// The first pass records the DFS finish order over the whole graph. The
/// second pass runs DFS on the transposed graph, taking roots in reverse
/// finish order; each DFS tree of the second pass is one component.
///
/// # Returns
///
/// Components in discovery order (topological order of the condensation),
/// each with its nodes in ascending id order.
pub fn kosaraju_scc(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<Vec<Vec<NodeId>>> {
    let finish_order = dfs_all(graph, emitter)?;
    let transposed = graph.transpose();

    let mut color = vec![NodeColor::White; graph.node_count()];
    let mut members = Vec::new();
    let mut finished = Vec::new();
    let mut components = Vec::new();

    for &root in finish_order.iter().rev() {
        if color[root.index()] != NodeColor::White {
            continue;
        }
        members.clear();
        dfs_from(
            &transposed,
            root,
            &mut color,
            &mut members,
            &mut finished,
            emitter,
        )?;

        let mut component = members.clone();
        component.sort_unstable();
        emitter.emit(Step::Component {
            nodes: component.clone(),
        })?;
        components.push(component);
    }

    Ok(components)
}
