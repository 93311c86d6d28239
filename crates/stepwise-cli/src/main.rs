//! Stepwise CLI - run the algorithm engines from a terminal.
//!
//! The engines never render anything; this binary owns all I/O. It resolves
//! inputs, drives a run through `stepwise-engine`, and prints the result and
//! (optionally) every step as a table or JSON.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stepwise_common::types::{Value, Weight};
use stepwise_engine::Heuristic;

/// Step-by-step runs of classic sorting, searching and graph algorithms.
#[derive(Parser)]
#[command(name = "stepwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Pause after every step, in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    delay_ms: u64,

    /// Cancel the run after this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Print every emitted step
    #[arg(long, global = true)]
    steps: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List every algorithm by family
    List,

    /// List the bundled sample graphs
    Datasets,

    /// Sort a sequence
    Sort {
        /// Algorithm name (bubble, selection, insertion, merge, quick, heap, counting, radix, tim)
        algorithm: String,

        /// Values to sort (a random sequence when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<Value>,

        #[command(flatten)]
        random: RandomArgs,
    },

    /// Search a sorted sequence for a target
    Search {
        /// Algorithm name (linear, binary, jump, exponential, interpolation)
        algorithm: String,

        /// Value to look for
        #[arg(long, short, allow_negative_numbers = true)]
        target: Value,

        /// Values to search (the bundled sample sequence when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<Value>,

        #[command(flatten)]
        random: RandomArgs,
    },

    /// Run a graph algorithm
    Graph(GraphArgs),
}

/// Random input generation.
#[derive(Args)]
struct RandomArgs {
    /// Generate this many random values instead of reading them
    #[arg(long)]
    random: Option<usize>,

    /// Exclusive upper bound for random values
    #[arg(long, default_value_t = 100)]
    max: Value,

    /// Seed for reproducible random values
    #[arg(long)]
    seed: Option<u64>,
}

/// Graph selection and run parameters.
#[derive(Args)]
struct GraphArgs {
    /// Algorithm name (bfs, dfs, dijkstra, astar, bellman-ford, floyd-warshall,
    /// kruskal, prim, topological-sort, tarjan, kosaraju)
    algorithm: String,

    /// Bundled sample graph to use (defaults to the algorithm's own)
    #[arg(long, conflicts_with_all = ["nodes", "edge"])]
    dataset: Option<String>,

    /// Number of nodes of a custom graph
    #[arg(long, requires = "edge")]
    nodes: Option<usize>,

    /// Edge of a custom graph as `u:v` or `u:v:w` (repeatable)
    #[arg(long, value_parser = commands::graph::parse_edge, requires = "nodes")]
    edge: Vec<(u32, u32, Weight)>,

    /// Treat custom edges as two-way
    #[arg(long, requires = "nodes")]
    undirected: bool,

    /// Source node
    #[arg(long)]
    source: Option<u32>,

    /// Goal node (A* only)
    #[arg(long)]
    goal: Option<u32>,

    /// A* heuristic (index, zero)
    #[arg(long, default_value_t = Heuristic::IndexDistance)]
    heuristic: Heuristic,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout stays clean for JSON output
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let settings = commands::RunSettings {
        format: cli.format,
        quiet: cli.quiet,
        delay_ms: cli.delay_ms,
        timeout_ms: cli.timeout_ms,
        show_steps: cli.steps,
    };

    let result = match cli.command {
        Commands::List => commands::list::run(cli.format, cli.quiet),
        Commands::Datasets => commands::datasets::run(cli.format, cli.quiet),
        Commands::Sort {
            algorithm,
            values,
            random,
        } => commands::sort::run(&algorithm, values, &random, &settings),
        Commands::Search {
            algorithm,
            target,
            values,
            random,
        } => commands::search::run(&algorithm, target, values, &random, &settings),
        Commands::Graph(args) => commands::graph::run(&args, &settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
