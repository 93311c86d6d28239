//! Integration tests for the run contract.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use stepwise_common::step::{CancellationToken, Step, StepLog};
use stepwise_common::types::{NodeId, Value};
use stepwise_common::utils::error::Error;
use stepwise_core::Graph;
use stepwise_engine::{Engine, RunOptions, RunResult, SearchOutcome, dataset, sample_sequence};

fn n(id: u32) -> NodeId {
    NodeId::new(id)
}

fn run_dataset(name: &str) -> (RunResult, Vec<Step>) {
    let sample = dataset(name).unwrap();
    let graph = sample.graph().unwrap();
    let mut steps: Vec<Step> = Vec::new();
    let report = Engine::new()
        .run_graph_algorithm(name, &graph, sample.source(), sample.goal(), &mut steps)
        .unwrap();
    assert_eq!(report.steps, steps.len() as u64);
    (report.result, steps)
}

// ============================================================================
// Dispatch by name
// ============================================================================

#[test]
fn every_sort_by_name() {
    let input = [5, 3, 9, 0, 3, 7];
    for name in [
        "bubble", "selection", "insertion", "merge", "quick", "heap", "counting", "radix", "tim",
    ] {
        let report = Engine::new()
            .run_sort(name, &input, &mut |_: &Step| {})
            .unwrap();
        assert_eq!(
            report.result,
            RunResult::Sorted(vec![0, 3, 3, 5, 7, 9]),
            "{name}"
        );
    }
}

#[test]
fn search_sample_sequence() {
    let values = sample_sequence();
    for name in ["linear", "binary", "jump", "exponential", "interpolation"] {
        let found = Engine::new()
            .run_search(name, &values, 23, &mut |_: &Step| {})
            .unwrap();
        assert_eq!(
            found.result,
            RunResult::Search(SearchOutcome::Found(6)),
            "{name}"
        );

        let missing = Engine::new()
            .run_search(name, &values, 4, &mut |_: &Step| {})
            .unwrap();
        assert_eq!(
            missing.result,
            RunResult::Search(SearchOutcome::NotFound),
            "{name}"
        );
    }
}

#[test]
fn bundled_graph_results() {
    let (result, _) = run_dataset("bfs");
    assert_eq!(
        result,
        RunResult::Visit(vec![n(0), n(1), n(2), n(3), n(4), n(5), n(6)])
    );

    let (result, _) = run_dataset("dfs");
    assert_eq!(result, RunResult::Visit(vec![n(0), n(1), n(2), n(3)]));

    let RunResult::ShortestPaths(paths) = run_dataset("dijkstra").0 else {
        panic!("dijkstra should produce a distance table");
    };
    assert_eq!(paths.distances(), &[Some(0), Some(1), Some(3), Some(4)]);

    let RunResult::Path(Some(path)) = run_dataset("astar").0 else {
        panic!("astar should reach the goal");
    };
    assert_eq!(path.path, vec![n(0), n(1), n(2), n(4), n(6)]);
    assert_eq!(path.cost, 6);

    let RunResult::ShortestPaths(paths) = run_dataset("bellman-ford").0 else {
        panic!("bellman-ford sample has no negative cycle");
    };
    assert_eq!(paths.distance(n(6)), Some(7));

    let RunResult::AllPairs(matrix) = run_dataset("floyd-warshall").0 else {
        panic!("floyd-warshall should produce a matrix");
    };
    assert_eq!(matrix.get(n(0), n(3)), Some(9));

    let RunResult::SpanningTree(tree) = run_dataset("kruskal").0 else {
        panic!("kruskal should produce a tree");
    };
    assert_eq!(tree.total_weight, 14);

    let RunResult::SpanningTree(tree) = run_dataset("prim").0 else {
        panic!("prim should produce a tree");
    };
    assert_eq!(tree.total_weight, 17);

    let (result, _) = run_dataset("topological-sort");
    assert_eq!(
        result,
        RunResult::TopologicalOrder(vec![n(0), n(1), n(2), n(3), n(4)])
    );

    for name in ["tarjan", "kosaraju"] {
        let RunResult::Components(mut components) = run_dataset(name).0 else {
            panic!("{name} should produce components");
        };
        components.sort();
        assert_eq!(components, vec![vec![n(0), n(1), n(2)], vec![n(3)]]);
    }
}

#[test]
fn structural_outcomes_are_results_not_errors() {
    let cyclic = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, -3), (2, 0, 1)]).unwrap();
    let engine = Engine::new();

    let report = engine
        .run_graph_algorithm("bellman-ford", &cyclic, Some(n(0)), None, &mut |_: &Step| {})
        .unwrap();
    assert_eq!(report.result, RunResult::NegativeCycle);

    let report = engine
        .run_graph_algorithm("topological-sort", &cyclic, None, None, &mut |_: &Step| {})
        .unwrap();
    assert_eq!(report.result, RunResult::CycleDetected);
}

// ============================================================================
// Validation happens before any step
// ============================================================================

#[test]
fn invalid_input_emits_no_steps() {
    let engine = Engine::new();
    let mut steps: Vec<Step> = Vec::new();

    let error = engine.run_sort("counting", &[3, -1, 2], &mut steps).unwrap_err();
    assert_eq!(
        error,
        Error::NegativeValue {
            index: 1,
            value: -1
        }
    );

    let graph = Graph::from_pairs(3, true, [(0, 1)]).unwrap();
    let error = engine
        .run_graph_algorithm("dijkstra", &graph, Some(n(7)), None, &mut steps)
        .unwrap_err();
    assert!(matches!(error, Error::NodeOutOfRange { .. }));

    let error = engine
        .run_graph_algorithm("astar", &graph, Some(n(0)), Some(n(3)), &mut steps)
        .unwrap_err();
    assert!(matches!(error, Error::NodeOutOfRange { .. }));

    let undirected = Graph::from_pairs(2, false, [(0, 1)]).unwrap();
    let error = engine
        .run_graph_algorithm("topological-sort", &undirected, None, None, &mut steps)
        .unwrap_err();
    assert!(matches!(error, Error::InvalidInput(_)));

    assert!(steps.is_empty());
}

#[test]
fn key_indexed_sorts_reject_negative_keys_at_any_length() {
    let inputs: [&[Value]; 2] = [&[-5], &[-5, 1]];
    for name in ["counting", "radix"] {
        for input in inputs {
            let mut steps: Vec<Step> = Vec::new();
            let error = Engine::new().run_sort(name, input, &mut steps).unwrap_err();
            assert_eq!(
                error,
                Error::NegativeValue {
                    index: 0,
                    value: -5
                },
                "{name} on {input:?}"
            );
            assert!(steps.is_empty());
        }
    }
}

#[test]
fn short_sequences_emit_nothing() {
    let inputs: [&[Value]; 2] = [&[], &[42]];
    for input in inputs {
        let mut steps: Vec<Step> = Vec::new();
        let report = Engine::new().run_sort("merge", input, &mut steps).unwrap();
        assert_eq!(report.result, RunResult::Sorted(input.to_vec()));
        assert_eq!(report.steps, 0);
        assert!(steps.is_empty());
    }
}

// ============================================================================
// Cancellation and pacing
// ============================================================================

#[test]
fn pre_cancelled_run_is_aborted() {
    let token = CancellationToken::new();
    token.cancel();
    let engine = Engine::with_options(RunOptions::default().with_cancellation(token));

    let mut steps: Vec<Step> = Vec::new();
    let report = engine.run_sort("bubble", &[3, 2, 1], &mut steps).unwrap();
    assert_eq!(report.result, RunResult::Aborted);
    assert_eq!(report.steps, 0);
    assert!(steps.is_empty());
}

#[test]
fn cancelling_from_observer_stops_at_next_step() {
    let token = CancellationToken::new();
    let engine = Engine::with_options(RunOptions::default().with_cancellation(token.clone()));

    let seen = AtomicUsize::new(0);
    let mut observer = |_: &Step| {
        if seen.fetch_add(1, Ordering::SeqCst) + 1 == 5 {
            token.cancel();
        }
    };
    let input: Vec<Value> = (0..50).rev().collect();
    let report = engine.run_sort("bubble", &input, &mut observer).unwrap();

    assert!(report.result.is_aborted());
    assert_eq!(report.steps, 5);
    assert_eq!(seen.load(Ordering::SeqCst), 5);
}

#[test]
fn cancelling_from_another_thread_during_pacing() {
    let token = CancellationToken::new();
    let engine = Engine::with_options(RunOptions::paced(20).with_cancellation(token.clone()));

    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            token.cancel();
        })
    };

    let log = StepLog::new();
    let mut observer = log.clone();
    let input: Vec<Value> = (0..40).rev().collect();
    let report = engine.run_sort("selection", &input, &mut observer).unwrap();
    canceller.join().unwrap();

    assert!(report.result.is_aborted());
    assert!(report.steps > 0);
    assert!(report.steps < 100);
    assert_eq!(log.len() as u64, report.steps);
}

#[test]
fn pacing_slows_the_run() {
    let engine = Engine::with_options(RunOptions::paced(5));
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    let start = Instant::now();
    let report = engine
        .run_search("linear", &[1, 2, 3, 4], 4, &mut move |_: &Step| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(report.steps, 4);
    assert_eq!(count.load(Ordering::SeqCst), 4);
    assert!(start.elapsed() >= Duration::from_millis(20));
    assert!(report.elapsed >= Duration::from_millis(20));
}
