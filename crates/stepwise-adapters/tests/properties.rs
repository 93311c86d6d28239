//! Property tests for the algorithm engines.

use proptest::prelude::*;

use stepwise_adapters::plugins::algorithms::{
    TopologicalOrder, bellman_ford, dijkstra, is_dag, kosaraju_scc, kruskal, prim, tarjan_scc,
    topological_sort,
};
use stepwise_adapters::plugins::{SearchAlgorithm, SortAlgorithm};
use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::{NodeId, Value, Weight};
use stepwise_core::Graph;

fn arb_edges(
    max_nodes: usize,
    max_weight: Weight,
) -> impl Strategy<Value = (usize, Vec<(u32, u32, Weight)>)> {
    (1..max_nodes).prop_flat_map(move |n| {
        let edge = (0..n as u32, 0..n as u32, 0..=max_weight);
        (Just(n), prop::collection::vec(edge, 0..n * 3))
    })
}

fn connected_undirected(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (2..max_nodes).prop_flat_map(|n| {
        let spine = prop::collection::vec(0..100 as Weight, n - 1);
        let extra = prop::collection::vec((0..n as u32, 0..n as u32, 0..100 as Weight), 0..n * 2);
        (Just(n), spine, extra).prop_map(|(n, spine, extra)| {
            let path = spine
                .into_iter()
                .enumerate()
                .map(|(i, w)| (i as u32, i as u32 + 1, w));
            Graph::from_edges(n, false, path.chain(extra)).unwrap()
        })
    })
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

fn component_sets(mut components: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
    for component in &mut components {
        component.sort_unstable();
    }
    components.sort();
    components
}

proptest! {
    #[test]
    fn sorting_is_a_sorted_permutation(values in prop::collection::vec(0..500 as Value, 0..80)) {
        for algorithm in SortAlgorithm::ALL {
            let mut output = values.clone();
            algorithm.sort(&mut output, &mut StepEmitter::new()).unwrap();
            prop_assert_eq!(&output, &sorted_copy(&values), "{}", algorithm);
        }
    }

    #[test]
    fn comparison_sorts_accept_negative_values(
        values in prop::collection::vec(any::<Value>(), 0..60)
    ) {
        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| !a.requires_non_negative()) {
            let mut output = values.clone();
            algorithm.sort(&mut output, &mut StepEmitter::new()).unwrap();
            prop_assert_eq!(&output, &sorted_copy(&values), "{}", algorithm);
        }
    }

    #[test]
    fn replaying_steps_reproduces_output(values in prop::collection::vec(0..100 as Value, 0..60)) {
        for algorithm in SortAlgorithm::ALL {
            let mut output = values.clone();
            let mut steps: Vec<Step> = Vec::new();
            {
                let mut emitter = StepEmitter::new().with_observer(&mut steps);
                algorithm.sort(&mut output, &mut emitter).unwrap();
            }
            let mut replayed = values.clone();
            for step in &steps {
                step.apply(&mut replayed);
            }
            prop_assert_eq!(&replayed, &output, "{}", algorithm);
        }
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_order(keys in prop::collection::vec(0..8 as Value, 0..80)) {
        let tagged: Vec<(Value, usize)> = keys.iter().copied().zip(0..).collect();
        let mut expected = tagged.clone();
        expected.sort_by_key(|&(k, _)| k);

        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let mut output = tagged.clone();
            algorithm.sort(&mut output, &mut StepEmitter::new()).unwrap();
            prop_assert_eq!(&output, &expected, "{}", algorithm);
        }
    }

    #[test]
    fn search_finds_present_and_rejects_absent(
        values in prop::collection::vec(-1000..1000 as Value, 0..60),
        target in -1000..1000 as Value,
    ) {
        let sorted = sorted_copy(&values);
        let present = sorted.contains(&target);
        for algorithm in SearchAlgorithm::ALL {
            let found = algorithm.search(&sorted, target, &mut StepEmitter::new()).unwrap();
            match found {
                Some(index) => prop_assert_eq!(sorted[index], target, "{}", algorithm),
                None => prop_assert!(!present, "{} missed {}", algorithm, target),
            }
        }
    }

    #[test]
    fn dijkstra_agrees_with_bellman_ford((n, edges) in arb_edges(12, 50)) {
        let graph = Graph::from_edges(n, true, edges).unwrap();
        let source = NodeId::new(0);
        let fast = dijkstra(&graph, source, &mut StepEmitter::new()).unwrap();
        let slow = bellman_ford(&graph, source, &mut StepEmitter::new()).unwrap();
        prop_assert_eq!(fast.distances(), slow.paths().unwrap().distances());
    }

    #[test]
    fn kruskal_and_prim_weigh_the_same(graph in connected_undirected(12)) {
        let k = kruskal(&graph, &mut StepEmitter::new()).unwrap();
        let p = prim(&graph, NodeId::new(0), &mut StepEmitter::new()).unwrap();
        prop_assert_eq!(k.total_weight, p.total_weight);
        prop_assert_eq!(k.len(), graph.node_count() - 1);
        prop_assert_eq!(p.len(), graph.node_count() - 1);
    }

    #[test]
    fn topological_order_respects_edges((n, edges) in arb_edges(12, 1)) {
        let graph = Graph::from_edges(n, true, edges).unwrap();
        match topological_sort(&graph, &mut StepEmitter::new()).unwrap() {
            TopologicalOrder::Order(order) => {
                prop_assert_eq!(order.len(), n);
                let mut position = vec![0; n];
                for (i, node) in order.iter().enumerate() {
                    position[node.index()] = i;
                }
                for edge in graph.edges() {
                    prop_assert!(
                        position[edge.source.index()] < position[edge.target.index()]
                    );
                }
            }
            TopologicalOrder::CycleDetected => {
                let components = tarjan_scc(&graph, &mut StepEmitter::new()).unwrap();
                let self_loop = graph.edges().iter().any(|e| e.source == e.target);
                prop_assert!(self_loop || components.iter().any(|c| c.len() > 1));
                prop_assert!(!is_dag(&graph));
            }
        }
    }

    #[test]
    fn tarjan_and_kosaraju_partition_alike((n, edges) in arb_edges(14, 1)) {
        let graph = Graph::from_edges(n, true, edges).unwrap();
        let tarjan = tarjan_scc(&graph, &mut StepEmitter::new()).unwrap();
        let kosaraju = kosaraju_scc(&graph, &mut StepEmitter::new()).unwrap();
        prop_assert_eq!(tarjan.iter().map(Vec::len).sum::<usize>(), n);
        prop_assert_eq!(component_sets(tarjan), component_sets(kosaraju));
    }
}
