//! Graph traversal algorithms: BFS and DFS.
//!
//! Both traversals explore neighbours in edge insertion order and report
//! progress as [`Step::Discover`], [`Step::TreeEdge`], [`Step::BackEdge`] and
//! [`Step::Finish`] observations.

use std::collections::VecDeque;

use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::NodeId;
use stepwise_common::utils::error::Result;
use stepwise_core::Graph;

// ============================================================================
// BFS Implementation
// ============================================================================

/// Performs breadth-first search from a starting node.
///
/// Each reachable node is discovered exactly once, when it is enqueued. A node
/// is finished once all of its outgoing edges have been examined.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The starting node
/// * `emitter` - Receives the traversal steps
///
/// # Returns
///
/// The reachable nodes in the order they were visited.
pub fn bfs(graph: &Graph, source: NodeId, emitter: &mut StepEmitter<'_>) -> Result<Vec<NodeId>> {
    graph.check_node(source)?;

    let mut discovered = vec![false; graph.node_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    discovered[source.index()] = true;
    queue.push_back(source);
    emitter.emit(Step::Discover { node: source })?;

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for neighbor in graph.neighbors(node) {
            let target = neighbor.node;
            if discovered[target.index()] {
                continue;
            }
            discovered[target.index()] = true;
            emitter.emit(Step::TreeEdge {
                source: node,
                target,
            })?;
            emitter.emit(Step::Discover { node: target })?;
            queue.push_back(target);
        }
        emitter.emit(Step::Finish { node })?;
    }

    Ok(order)
}

// ============================================================================
// DFS Implementation
// ============================================================================

/// Node state during DFS traversal.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeColor {
    /// Not yet discovered
    White,
    /// Discovered but not finished (on stack)
    Gray,
    /// Finished processing
    Black,
}

/// Performs depth-first search from a starting node.
///
/// Uses an explicit stack, visiting nodes in the same order as the recursive
/// formulation.
///
/// # Returns
///
/// The reachable nodes in pre-order (discovery order).
pub fn dfs(graph: &Graph, source: NodeId, emitter: &mut StepEmitter<'_>) -> Result<Vec<NodeId>> {
    graph.check_node(source)?;

    let mut color = vec![NodeColor::White; graph.node_count()];
    let mut pre = Vec::new();
    let mut post = Vec::new();
    dfs_from(graph, source, &mut color, &mut pre, &mut post, emitter)?;
    Ok(pre)
}

/// Performs DFS from every undiscovered node in ascending id order.
///
/// # Returns
///
/// All nodes in post-order (finish order). Reversing it yields a topological
/// order when the graph is acyclic.
pub fn dfs_all(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<Vec<NodeId>> {
    let mut color = vec![NodeColor::White; graph.node_count()];
    let mut pre = Vec::new();
    let mut post = Vec::with_capacity(graph.node_count());

    for node in graph.nodes() {
        if color[node.index()] == NodeColor::White {
            dfs_from(graph, node, &mut color, &mut pre, &mut post, emitter)?;
        }
    }
    Ok(post)
}

/// Explores everything reachable from `start` that is still white.
///
/// Appends discovered nodes to `pre` and finished nodes to `post`. In
/// undirected graphs the edge back to the DFS parent is not a back edge.
pub(crate) fn dfs_from(
    graph: &Graph,
    start: NodeId,
    color: &mut [NodeColor],
    pre: &mut Vec<NodeId>,
    post: &mut Vec<NodeId>,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    // Stack entries: (node, parent, next neighbour index)
    let mut stack: Vec<(NodeId, Option<NodeId>, usize)> = Vec::new();

    color[start.index()] = NodeColor::Gray;
    pre.push(start);
    emitter.emit(Step::Discover { node: start })?;
    stack.push((start, None, 0));

    while let Some((node, parent, idx)) = stack.last_mut() {
        let node = *node;
        let neighbors = graph.neighbors(node);
        if *idx >= neighbors.len() {
            stack.pop();
            color[node.index()] = NodeColor::Black;
            post.push(node);
            emitter.emit(Step::Finish { node })?;
            continue;
        }

        let target = neighbors[*idx].node;
        *idx += 1;
        let parent = *parent;

        match color[target.index()] {
            NodeColor::White => {
                emitter.emit(Step::TreeEdge {
                    source: node,
                    target,
                })?;
                color[target.index()] = NodeColor::Gray;
                pre.push(target);
                emitter.emit(Step::Discover { node: target })?;
                stack.push((target, Some(node), 0));
            }
            NodeColor::Gray => {
                if graph.is_directed() || parent != Some(target) {
                    emitter.emit(Step::BackEdge {
                        source: node,
                        target,
                    })?;
                }
            }
            NodeColor::Black => {}
        }
    }

    Ok(())
}
