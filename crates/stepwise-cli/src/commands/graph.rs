//! Graph algorithm command.

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, Color};
use stepwise_adapters::plugins::GraphAlgorithm;
use stepwise_common::types::{NodeId, Weight};
use stepwise_core::Graph;
use stepwise_engine::{RunReport, RunResult, dataset};

use super::RunSettings;
use crate::GraphArgs;
use crate::output;

/// Parses an edge given as `u:v` (weight 1) or `u:v:w`.
pub fn parse_edge(s: &str) -> Result<(u32, u32, Weight), String> {
    let parts: Vec<&str> = s.split(':').collect();
    let node = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid node '{part}' in edge '{s}': {e}"))
    };
    match parts[..] {
        [u, v] => Ok((node(u)?, node(v)?, 1)),
        [u, v, w] => {
            let weight = w
                .trim()
                .parse::<Weight>()
                .map_err(|e| format!("invalid weight '{w}' in edge '{s}': {e}"))?;
            Ok((node(u)?, node(v)?, weight))
        }
        _ => Err(format!("expected u:v or u:v:w, got '{s}'")),
    }
}

/// The graph to run on plus the suggested endpoints.
struct Input {
    graph: Graph,
    source: Option<NodeId>,
    goal: Option<NodeId>,
}

fn resolve_input(algorithm: GraphAlgorithm, args: &GraphArgs) -> Result<Input> {
    let mut input = if let Some(node_count) = args.nodes {
        let graph = Graph::from_edges(node_count, !args.undirected, args.edge.iter().copied())?;
        Input {
            graph,
            source: None,
            goal: None,
        }
    } else {
        let name = args.dataset.as_deref().unwrap_or(algorithm.name());
        let sample = dataset(name).ok_or_else(|| anyhow!("unknown dataset: {name}"))?;
        Input {
            graph: sample.graph()?,
            source: sample.source(),
            goal: sample.goal(),
        }
    };

    if let Some(source) = args.source {
        input.source = Some(NodeId::new(source));
    } else if input.source.is_none() && algorithm.needs_source() {
        input.source = Some(NodeId::new(0));
    }
    if let Some(goal) = args.goal {
        input.goal = Some(NodeId::new(goal));
    }
    Ok(input)
}

/// Run the graph command.
pub fn run(args: &GraphArgs, settings: &RunSettings) -> Result<()> {
    let algorithm: GraphAlgorithm = args
        .algorithm
        .parse()
        .with_context(|| format!("cannot run '{}'", args.algorithm))?;
    let input = resolve_input(algorithm, args)?;
    tracing::debug!(
        algorithm = algorithm.name(),
        nodes = input.graph.node_count(),
        edges = input.graph.edge_count(),
        "graph resolved"
    );

    let options = settings.run_options().with_heuristic(args.heuristic);
    let outcome = settings.execute(options, |engine, observer| {
        engine.run_graph_algorithm(
            algorithm.name(),
            &input.graph,
            input.source,
            input.goal,
            observer,
        )
    })?;

    let quiet = settings.quiet;
    outcome.print(settings, |report| render(report, quiet))
}

/// Prints family-specific tables and returns the summary rows.
fn render(report: &RunReport, quiet: bool) -> Vec<(&'static str, String)> {
    match &report.result {
        RunResult::Visit(order) => vec![("Visit order", output::node_path(order))],
        RunResult::ShortestPaths(paths) => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Node", "Distance", "Path"]);
            for (i, distance) in paths.distances().iter().enumerate() {
                let node = NodeId::from(i);
                let path = paths
                    .path_to(node)
                    .map(|p| output::node_path(&p))
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(node).fg(Color::Green),
                    Cell::new(output::distance(*distance)),
                    Cell::new(path),
                ]);
            }
            output::print_table(&table, quiet);
            vec![("Source", paths.source().to_string())]
        }
        RunResult::Path(Some(found)) => vec![
            ("Path", output::node_path(&found.path)),
            ("Cost", found.cost.to_string()),
        ],
        RunResult::Path(None) => vec![("Path", "goal unreachable".to_string())],
        RunResult::NegativeCycle => vec![(
            "Outcome",
            "negative-weight cycle reachable from the source".to_string(),
        )],
        RunResult::AllPairs(matrix) => {
            let n = matrix.node_count();
            let mut table = output::create_table();
            let header: Vec<String> = std::iter::once(String::new())
                .chain((0..n).map(|i| i.to_string()))
                .collect();
            let header: Vec<&str> = header.iter().map(String::as_str).collect();
            output::add_header(&mut table, &header);
            for (i, row) in matrix.rows().enumerate() {
                let mut cells = vec![Cell::new(i).fg(Color::Green)];
                cells.extend(row.iter().map(|d| Cell::new(output::distance(*d))));
                table.add_row(cells);
            }
            output::print_table(&table, quiet);
            let negative = if matrix.has_negative_cycle() { "yes" } else { "no" };
            vec![("Negative cycle", negative.to_string())]
        }
        RunResult::SpanningTree(tree) => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Source", "Target", "Weight"]);
            for edge in &tree.edges {
                table.add_row(vec![
                    Cell::new(edge.source),
                    Cell::new(edge.target),
                    Cell::new(edge.weight),
                ]);
            }
            output::print_table(&table, quiet);
            vec![
                ("Edges", tree.len().to_string()),
                ("Total weight", tree.total_weight.to_string()),
            ]
        }
        RunResult::TopologicalOrder(order) => vec![("Order", output::node_path(order))],
        RunResult::CycleDetected => vec![(
            "Outcome",
            "cycle detected; no topological order".to_string(),
        )],
        RunResult::Components(components) => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["#", "Nodes"]);
            for (i, component) in components.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1).fg(Color::Green),
                    Cell::new(output::node_list(component)),
                ]);
            }
            output::print_table(&table, quiet);
            vec![("Components", components.len().to_string())]
        }
        RunResult::Sorted(_) | RunResult::Search(_) | RunResult::Aborted => Vec::new(),
    }
}
