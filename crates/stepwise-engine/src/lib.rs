//! # stepwise-engine
//!
//! The in-process run contract for Stepwise: pick an algorithm by name, run
//! it on a private copy of the input, stream its steps to an observer, and
//! get back a [`RunReport`].
//!
//! ## Modules
//!
//! - [`engine`] - The [`Engine`] and its `run_sort` / `run_search` /
//!   `run_graph_algorithm` entry points
//! - [`config`] - Run options (pacing, cancellation, A* heuristic)
//! - [`report`] - Run results and reports
//! - [`datasets`] - Bundled sample graphs and sequences

#![warn(missing_docs)]

pub mod config;
pub mod datasets;
pub mod engine;
pub mod report;

pub use config::{Heuristic, RunOptions};
pub use datasets::{DATASETS, Dataset, dataset, random_sequence, sample_sequence};
pub use engine::Engine;
pub use report::{RunReport, RunResult, SearchOutcome};
