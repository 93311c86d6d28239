//! The run contract: resolve an algorithm by name, run it on a private copy
//! of the input, and deliver every step to an observer.

use std::time::Instant;

use stepwise_adapters::plugins::algorithms::{
    self, BellmanFordResult, TopologicalOrder, index_distance, zero_heuristic,
};
use stepwise_adapters::plugins::{AlgorithmFamily, GraphAlgorithm, SearchAlgorithm, SortAlgorithm};
use stepwise_common::step::{Observer, StepEmitter};
use stepwise_common::types::{NodeId, Value};
use stepwise_common::utils::error::{Error, Result};
use stepwise_core::Graph;

use crate::config::{Heuristic, RunOptions};
use crate::report::{RunReport, RunResult, SearchOutcome};

/// Runs algorithms by name.
///
/// An `Engine` only carries [`RunOptions`]; every run owns its input copy,
/// emitter, and auxiliary structures, and nothing outlives the call.
///
/// # Examples
///
/// ```
/// use stepwise_common::step::Step;
/// use stepwise_engine::{Engine, RunResult};
///
/// let engine = Engine::new();
/// let mut steps: Vec<Step> = Vec::new();
/// let report = engine.run_sort("merge", &[3, 1, 2], &mut steps).unwrap();
///
/// assert_eq!(report.result, RunResult::Sorted(vec![1, 2, 3]));
/// assert_eq!(report.steps, steps.len() as u64);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: RunOptions,
}

impl Engine {
    /// Creates an engine with default (unpaced, uncancellable) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given options.
    #[must_use]
    pub fn with_options(options: RunOptions) -> Self {
        Self { options }
    }

    /// Returns the run options.
    #[must_use]
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Sorts a copy of `values` with the named algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for an unrecognised name and
    /// [`Error::NegativeValue`] / [`Error::InvalidInput`] when a key-indexed
    /// sort cannot handle the input. No step is delivered in either case.
    /// Cancellation is reported as [`RunResult::Aborted`], not as an error.
    pub fn run_sort(
        &self,
        name: &str,
        values: &[Value],
        observer: &mut dyn Observer,
    ) -> Result<RunReport> {
        let algorithm: SortAlgorithm = name.parse()?;
        let mut sorted = values.to_vec();

        self.execute(
            AlgorithmFamily::Sort,
            algorithm.name(),
            values.len(),
            observer,
            |emitter| {
                algorithm.sort(&mut sorted, emitter)?;
                Ok(RunResult::Sorted(sorted))
            },
        )
    }

    /// Searches `values` for `target` with the named algorithm.
    ///
    /// Every algorithm except `linear` expects ascending input; this is not
    /// checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for an unrecognised name.
    pub fn run_search(
        &self,
        name: &str,
        values: &[Value],
        target: Value,
        observer: &mut dyn Observer,
    ) -> Result<RunReport> {
        let algorithm: SearchAlgorithm = name.parse()?;

        self.execute(
            AlgorithmFamily::Search,
            algorithm.name(),
            values.len(),
            observer,
            |emitter| {
                let found = algorithm.search(values, target, emitter)?;
                Ok(RunResult::Search(SearchOutcome::from(found)))
            },
        )
    }

    /// Runs the named graph algorithm.
    ///
    /// `source` is required by traversals, single-source shortest paths, A*,
    /// and Prim; `goal` only by A*. Both are ignored by the other algorithms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`], [`Error::MissingParameter`],
    /// [`Error::NodeOutOfRange`], or [`Error::InvalidInput`] (topological
    /// sort of an undirected graph) before any step is delivered.
    pub fn run_graph_algorithm(
        &self,
        name: &str,
        graph: &Graph,
        source: Option<NodeId>,
        goal: Option<NodeId>,
        observer: &mut dyn Observer,
    ) -> Result<RunReport> {
        let algorithm: GraphAlgorithm = name.parse()?;

        let source = if algorithm.needs_source() {
            let source = source.ok_or(Error::MissingParameter("source"))?;
            graph.check_node(source)?;
            source
        } else {
            NodeId::default()
        };
        let goal = if algorithm.needs_goal() {
            let goal = goal.ok_or(Error::MissingParameter("goal"))?;
            graph.check_node(goal)?;
            goal
        } else {
            NodeId::default()
        };
        if algorithm == GraphAlgorithm::TopologicalSort && !graph.is_directed() {
            return Err(Error::InvalidInput(
                "topological sort requires a directed graph".to_string(),
            ));
        }

        let graph = graph.clone();
        let heuristic = self.options.heuristic;

        self.execute(
            AlgorithmFamily::Graph,
            algorithm.name(),
            graph.node_count(),
            observer,
            |emitter| run_graph(algorithm, &graph, source, goal, heuristic, emitter),
        )
    }

    fn execute<F>(
        &self,
        family: AlgorithmFamily,
        algorithm: &'static str,
        input_size: usize,
        observer: &mut dyn Observer,
        run: F,
    ) -> Result<RunReport>
    where
        F: FnOnce(&mut StepEmitter<'_>) -> Result<RunResult>,
    {
        tracing::debug!(%family, algorithm, input_size, "run started");
        let start = Instant::now();

        let mut emitter = self.options.emitter(observer);
        let outcome = run(&mut emitter);
        let steps = emitter.emitted();
        drop(emitter);
        let elapsed = start.elapsed();

        let result = match outcome {
            Ok(result) => {
                tracing::debug!(%family, algorithm, steps, ?elapsed, "run completed");
                result
            }
            Err(Error::Aborted) => {
                tracing::warn!(%family, algorithm, steps, "run aborted");
                RunResult::Aborted
            }
            Err(error) => return Err(error),
        };

        Ok(RunReport {
            family,
            algorithm,
            result,
            steps,
            elapsed,
        })
    }
}

fn run_graph(
    algorithm: GraphAlgorithm,
    graph: &Graph,
    source: NodeId,
    goal: NodeId,
    heuristic: Heuristic,
    emitter: &mut StepEmitter<'_>,
) -> Result<RunResult> {
    Ok(match algorithm {
        GraphAlgorithm::Bfs => RunResult::Visit(algorithms::bfs(graph, source, emitter)?),
        GraphAlgorithm::Dfs => RunResult::Visit(algorithms::dfs(graph, source, emitter)?),
        GraphAlgorithm::Dijkstra => {
            RunResult::ShortestPaths(algorithms::dijkstra(graph, source, emitter)?)
        }
        GraphAlgorithm::AStar => RunResult::Path(match heuristic {
            Heuristic::IndexDistance => {
                algorithms::astar(graph, source, goal, index_distance(goal), emitter)?
            }
            Heuristic::Zero => algorithms::astar(graph, source, goal, zero_heuristic, emitter)?,
        }),
        GraphAlgorithm::BellmanFord => match algorithms::bellman_ford(graph, source, emitter)? {
            BellmanFordResult::ShortestPaths(paths) => RunResult::ShortestPaths(paths),
            BellmanFordResult::NegativeCycle => RunResult::NegativeCycle,
        },
        GraphAlgorithm::FloydWarshall => {
            RunResult::AllPairs(algorithms::floyd_warshall(graph, emitter)?)
        }
        GraphAlgorithm::Kruskal => RunResult::SpanningTree(algorithms::kruskal(graph, emitter)?),
        GraphAlgorithm::Prim => {
            RunResult::SpanningTree(algorithms::prim(graph, source, emitter)?)
        }
        GraphAlgorithm::TopologicalSort => match algorithms::topological_sort(graph, emitter)? {
            TopologicalOrder::Order(order) => RunResult::TopologicalOrder(order),
            TopologicalOrder::CycleDetected => RunResult::CycleDetected,
        },
        GraphAlgorithm::Tarjan => RunResult::Components(algorithms::tarjan_scc(graph, emitter)?),
        GraphAlgorithm::Kosaraju => {
            RunResult::Components(algorithms::kosaraju_scc(graph, emitter)?)
        }
    })
}
