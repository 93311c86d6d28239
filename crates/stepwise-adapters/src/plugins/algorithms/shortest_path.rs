//! Shortest path algorithms: Dijkstra, A*, Bellman-Ford, Floyd-Warshall.
//!
//! Distances are `Option<Weight>`, with `None` standing for "unreachable".
//! Sums saturate instead of overflowing. Dijkstra and A* assume non-negative
//! weights; this is not checked.

use serde::Serialize;
use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::{NodeId, Weight};
use stepwise_common::utils::error::Result;
use stepwise_core::Graph;

use super::traits::Frontier;

// ============================================================================
// Result Types
// ============================================================================

/// Single-source shortest path table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![None; node_count];
        distances[source.index()] = Some(0);
        Self {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// The node distances are measured from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, or `None` if it is unreachable or out of range.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Distances indexed by node.
    #[must_use]
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// The node preceding `node` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// The shortest path from the source to `target`, both included.
    ///
    /// Returns `None` when `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Relaxes `source -> target` with `weight`, reporting an improvement.
    fn relax(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
        emitter: &mut StepEmitter<'_>,
    ) -> Result<Option<Weight>> {
        let Some(base) = self.distances[source.index()] else {
            return Ok(None);
        };
        let candidate = base.saturating_add(weight);
        let old = self.distances[target.index()];
        if old.is_some_and(|d| d <= candidate) {
            return Ok(None);
        }
        self.distances[target.index()] = Some(candidate);
        self.predecessors[target.index()] = Some(source);
        emitter.emit(Step::Relax {
            source,
            target,
            old,
            new: candidate,
        })?;
        Ok(Some(candidate))
    }
}

/// A single source-to-goal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Nodes from source to goal, both included.
    pub path: Vec<NodeId>,
    /// Total weight of the path.
    pub cost: Weight,
}

/// Outcome of Bellman-Ford.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "paths", rename_all = "snake_case")]
pub enum BellmanFordResult {
    /// No negative cycle is reachable from the source.
    ShortestPaths(ShortestPaths),
    /// A negative-weight cycle is reachable from the source; distances are
    /// meaningless.
    NegativeCycle,
}

impl BellmanFordResult {
    /// Returns the distance table, if there is one.
    #[must_use]
    pub fn paths(&self) -> Option<&ShortestPaths> {
        match self {
            Self::ShortestPaths(paths) => Some(paths),
            Self::NegativeCycle => None,
        }
    }

    /// Returns whether a negative cycle was detected.
    #[must_use]
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }
}

/// Dense all-pairs distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    node_count: usize,
    cells: Vec<Option<Weight>>,
}

impl DistanceMatrix {
    fn new(node_count: usize) -> Self {
        let mut cells = vec![None; node_count * node_count];
        for i in 0..node_count {
            cells[i * node_count + i] = Some(0);
        }
        Self { node_count, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Shortest distance from `from` to `to`, `None` if unreachable.
    #[must_use]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        if from.index() >= self.node_count || to.index() >= self.node_count {
            return None;
        }
        self.cells[from.index() * self.node_count + to.index()]
    }

    /// Distances from `from` to every node.
    #[must_use]
    pub fn row(&self, from: NodeId) -> &[Option<Weight>] {
        let start = from.index() * self.node_count;
        self.cells.get(start..start + self.node_count).unwrap_or(&[])
    }

    /// Iterates over the rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> {
        self.cells.chunks(self.node_count.max(1))
    }

    /// Returns whether some node reaches itself with negative weight.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.node_count).any(|i| self.cells[i * self.node_count + i].is_some_and(|d| d < 0))
    }

    fn set(&mut self, from: usize, to: usize, distance: Weight) {
        self.cells[from * self.node_count + to] = Some(distance);
    }

    fn cell(&self, from: usize, to: usize) -> Option<Weight> {
        self.cells[from * self.node_count + to]
    }
}

// ============================================================================
// Dijkstra's Algorithm
// ============================================================================

/// Computes shortest paths from `source` with Dijkstra's algorithm.
///
/// Repeatedly settles the frontier node with the smallest tentative distance
/// (oldest entry first on ties) and relaxes its outgoing edges.
///
/// # Returns
///
/// Distances and predecessors for every node reachable from `source`.
pub fn dijkstra(
    graph: &Graph,
    source: NodeId,
    emitter: &mut StepEmitter<'_>,
) -> Result<ShortestPaths> {
    graph.check_node(source)?;

    let mut paths = ShortestPaths::new(graph.node_count(), source);
    let mut settled = vec![false; graph.node_count()];
    let mut frontier = Frontier::new();
    frontier.push(0, source);

    while let Some((distance, node)) = frontier.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        emitter.emit(Step::Settle { node, distance })?;

        for neighbor in graph.neighbors(node) {
            if settled[neighbor.node.index()] {
                continue;
            }
            if let Some(new) = paths.relax(node, neighbor.node, neighbor.weight, emitter)? {
                frontier.push(new, neighbor.node);
            }
        }
    }

    Ok(paths)
}

// ============================================================================
// A* Search
// ============================================================================

/// The `|node - goal|` index-distance heuristic.
///
/// Only meaningful when node ids track position; it is not admissible for
/// arbitrary weights, so A* may return a non-optimal path with it.
pub fn index_distance(goal: NodeId) -> impl Fn(NodeId) -> Weight {
    move |node| (node.index() as Weight - goal.index() as Weight).abs()
}

/// A heuristic that always returns zero, reducing A* to Dijkstra.
pub fn zero_heuristic(_node: NodeId) -> Weight {
    0
}

/// Finds a path from `source` to `goal` with A* search.
///
/// Orders the frontier by `g + h` and stops as soon as the goal is settled.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The starting node
/// * `goal` - The target node
/// * `heuristic` - Estimated remaining cost from a node to `goal`
/// * `emitter` - Receives the search steps
///
/// # Returns
///
/// The path and its cost, or `None` if `goal` is unreachable.
pub fn astar<H>(
    graph: &Graph,
    source: NodeId,
    goal: NodeId,
    heuristic: H,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<PathResult>>
where
    H: Fn(NodeId) -> Weight,
{
    graph.check_node(source)?;
    graph.check_node(goal)?;

    let mut paths = ShortestPaths::new(graph.node_count(), source);
    let mut closed = vec![false; graph.node_count()];
    let mut frontier = Frontier::new();
    frontier.push(heuristic(source), source);

    while let Some((_, node)) = frontier.pop() {
        if closed[node.index()] {
            continue;
        }
        closed[node.index()] = true;
        let g = paths.distance(node).unwrap_or(0);
        emitter.emit(Step::Settle { node, distance: g })?;

        if node == goal {
            let path = paths.path_to(goal).unwrap_or_else(|| vec![goal]);
            return Ok(Some(PathResult { path, cost: g }));
        }

        for neighbor in graph.neighbors(node) {
            if closed[neighbor.node.index()] {
                continue;
            }
            if let Some(new) = paths.relax(node, neighbor.node, neighbor.weight, emitter)? {
                frontier.push(new.saturating_add(heuristic(neighbor.node)), neighbor.node);
            }
        }
    }

    Ok(None)
}

// ============================================================================
// Bellman-Ford Algorithm
// ============================================================================

/// Computes shortest paths from `source` with the Bellman-Ford algorithm.
///
/// Relaxes every arc, in insertion order, exactly `|V| - 1` times, then makes
/// one more pass: if any arc can still be relaxed, a negative-weight cycle is
/// reachable from `source`.
pub fn bellman_ford(
    graph: &Graph,
    source: NodeId,
    emitter: &mut StepEmitter<'_>,
) -> Result<BellmanFordResult> {
    graph.check_node(source)?;

    let mut paths = ShortestPaths::new(graph.node_count(), source);
    for _ in 1..graph.node_count() {
        for arc in graph.arcs() {
            paths.relax(arc.source, arc.target, arc.weight, emitter)?;
        }
    }

    let improvable = graph.arcs().any(|arc| {
        paths.distances[arc.source.index()].is_some_and(|base| {
            let candidate = base.saturating_add(arc.weight);
            paths.distances[arc.target.index()].is_none_or(|d| candidate < d)
        })
    });
    if improvable {
        tracing::debug!(%source, "negative cycle reachable from source");
        return Ok(BellmanFordResult::NegativeCycle);
    }

    Ok(BellmanFordResult::ShortestPaths(paths))
}

// ============================================================================
// Floyd-Warshall Algorithm
// ============================================================================

/// Computes all-pairs shortest paths with the Floyd-Warshall algorithm.
///
/// Each improvement `dist[i][j] = dist[i][k] + dist[k][j]` is reported as a
/// [`Step::PairUpdate`]. Parallel edges keep their lightest weight.
pub fn floyd_warshall(graph: &Graph, emitter: &mut StepEmitter<'_>) -> Result<DistanceMatrix> {
    let n = graph.node_count();
    let mut matrix = DistanceMatrix::new(n);
    for arc in graph.arcs() {
        let (i, j) = (arc.source.index(), arc.target.index());
        if matrix.cell(i, j).is_none_or(|d| arc.weight < d) {
            matrix.set(i, j, arc.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = matrix.cell(i, k) else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = matrix.cell(k, j) else {
                    continue;
                };
                let candidate = ik.saturating_add(kj);
                if matrix.cell(i, j).is_none_or(|d| candidate < d) {
                    matrix.set(i, j, candidate);
                    emitter.emit(Step::PairUpdate {
                        from: NodeId::from(i),
                        to: NodeId::from(j),
                        via: NodeId::from(k),
                        distance: candidate,
                    })?;
                }
            }
        }
    }

    if matrix.has_negative_cycle() {
        tracing::debug!("floyd-warshall found a negative cycle");
    }
    Ok(matrix)
}
