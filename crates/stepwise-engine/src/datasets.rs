//! Bundled sample inputs.
//!
//! One sample graph per graph algorithm, matching the fixed demonstration
//! inputs the algorithms are usually taught with, plus the sorted search
//! example sequence and a random sequence generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use stepwise_adapters::plugins::GraphAlgorithm;
use stepwise_common::types::{NodeId, Value, Weight};
use stepwise_common::utils::error::{Error, Result};
use stepwise_core::Graph;

/// A named sample graph.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dataset {
    /// Dataset name (the canonical name of the algorithm it demonstrates).
    pub name: &'static str,
    /// The algorithm the dataset was drawn up for.
    pub algorithm: GraphAlgorithm,
    /// Whether edges are one-way.
    pub directed: bool,
    /// Number of nodes.
    pub node_count: usize,
    /// `(source, target, weight)` triples.
    pub edges: &'static [(u32, u32, Weight)],
    /// Suggested source node.
    pub source: Option<u32>,
    /// Suggested goal node.
    pub goal: Option<u32>,
}

impl Dataset {
    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] if an edge endpoint is invalid.
    pub fn graph(&self) -> Result<Graph> {
        Graph::from_edges(self.node_count, self.directed, self.edges.iter().copied())
    }

    /// Suggested source node.
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.source.map(NodeId::new)
    }

    /// Suggested goal node.
    #[must_use]
    pub fn goal(&self) -> Option<NodeId> {
        self.goal.map(NodeId::new)
    }
}

const fn sample(
    algorithm: GraphAlgorithm,
    directed: bool,
    node_count: usize,
    edges: &'static [(u32, u32, Weight)],
    source: Option<u32>,
    goal: Option<u32>,
) -> Dataset {
    Dataset {
        name: algorithm.name(),
        algorithm,
        directed,
        node_count,
        edges,
        source,
        goal,
    }
}

/// Every bundled graph, in catalog order.
pub const DATASETS: [Dataset; 11] = [
    sample(
        GraphAlgorithm::Bfs,
        true,
        7,
        &[
            (0, 1, 1),
            (0, 2, 1),
            (1, 2, 1),
            (1, 3, 1),
            (2, 3, 1),
            (2, 4, 1),
            (3, 5, 1),
            (4, 5, 1),
            (5, 6, 1),
        ],
        Some(0),
        None,
    ),
    sample(
        GraphAlgorithm::Dfs,
        true,
        4,
        &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)],
        Some(0),
        None,
    ),
    sample(
        GraphAlgorithm::Dijkstra,
        true,
        4,
        &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)],
        Some(0),
        None,
    ),
    sample(
        GraphAlgorithm::AStar,
        true,
        7,
        &[
            (0, 1, 1),
            (0, 2, 4),
            (1, 2, 2),
            (1, 3, 5),
            (2, 3, 1),
            (2, 4, 2),
            (3, 5, 3),
            (4, 6, 1),
            (5, 6, 1),
        ],
        Some(0),
        Some(6),
    ),
    sample(
        GraphAlgorithm::BellmanFord,
        true,
        7,
        &[
            (0, 1, 3),
            (0, 2, 1),
            (1, 3, 1),
            (1, 4, 2),
            (2, 1, 2),
            (2, 3, 5),
            (2, 5, 10),
            (3, 4, -1),
            (4, 5, 3),
            (4, 6, 4),
        ],
        Some(0),
        None,
    ),
    sample(
        GraphAlgorithm::FloydWarshall,
        true,
        4,
        &[(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)],
        None,
        None,
    ),
    sample(
        GraphAlgorithm::Kruskal,
        false,
        6,
        &[
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (3, 4, 2),
            (4, 5, 6),
        ],
        None,
        None,
    ),
    sample(
        GraphAlgorithm::Prim,
        false,
        6,
        &[
            (0, 1, 2),
            (0, 3, 6),
            (1, 2, 3),
            (1, 4, 1),
            (2, 4, 5),
            (2, 5, 7),
            (3, 4, 4),
            (4, 5, 7),
        ],
        Some(0),
        None,
    ),
    sample(
        GraphAlgorithm::TopologicalSort,
        true,
        5,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)],
        None,
        None,
    ),
    sample(
        GraphAlgorithm::Tarjan,
        true,
        4,
        &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)],
        None,
        None,
    ),
    sample(
        GraphAlgorithm::Kosaraju,
        true,
        4,
        &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)],
        None,
        None,
    ),
];

/// Looks up a dataset by name, accepting the same spellings as
/// [`GraphAlgorithm`]'s `FromStr`.
#[must_use]
pub fn dataset(name: &str) -> Option<&'static Dataset> {
    let algorithm: GraphAlgorithm = name.parse().ok()?;
    DATASETS.iter().find(|d| d.algorithm == algorithm)
}

/// The sorted example sequence used to demonstrate the search algorithms.
#[must_use]
pub fn sample_sequence() -> Vec<Value> {
    vec![2, 5, 5, 8, 12, 16, 23, 38, 56, 72, 91]
}

/// Generates `len` values drawn uniformly from `0..max`.
///
/// With a seed the sequence is reproducible; without one it is seeded from
/// the operating system.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `max` is not positive.
pub fn random_sequence(len: usize, max: Value, seed: Option<u64>) -> Result<Vec<Value>> {
    if max <= 0 {
        return Err(Error::InvalidInput(format!(
            "random value bound must be positive, got {max}"
        )));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok((0..len).map(|_| rng.random_range(0..max)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dataset_builds() {
        for dataset in &DATASETS {
            let graph = dataset.graph().unwrap();
            assert_eq!(graph.node_count(), dataset.node_count, "{}", dataset.name);
            if dataset.algorithm.needs_source() {
                assert!(dataset.source.is_some(), "{}", dataset.name);
            }
            if dataset.algorithm.needs_goal() {
                assert!(dataset.goal.is_some(), "{}", dataset.name);
            }
        }
    }

    #[test]
    fn test_one_dataset_per_graph_algorithm() {
        for algorithm in GraphAlgorithm::ALL {
            assert_eq!(
                dataset(algorithm.name()).map(|d| d.algorithm),
                Some(algorithm)
            );
        }
        assert_eq!(dataset("a-star").map(|d| d.name), Some("astar"));
        assert!(dataset("nope").is_none());
    }

    #[test]
    fn test_sample_sequence_sorted() {
        let values = sample_sequence();
        assert!(values.is_sorted());
        assert_eq!(values[6], 23);
    }

    #[test]
    fn test_random_sequence_seeded() {
        let a = random_sequence(50, 10, Some(7)).unwrap();
        let b = random_sequence(50, 10, Some(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|v| (0..10).contains(v)));
        assert!(random_sequence(3, 0, None).is_err());
    }
}
