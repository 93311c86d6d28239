//! CLI command implementations.

pub mod datasets;
pub mod graph;
pub mod list;
pub mod search;
pub mod sort;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use stepwise_common::step::{CancellationToken, Observer, Step};
use stepwise_engine::{Engine, RunOptions, RunReport};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Global flags shared by every run command.
pub struct RunSettings {
    pub format: OutputFormat,
    pub quiet: bool,
    pub delay_ms: u64,
    pub timeout_ms: Option<u64>,
    pub show_steps: bool,
}

impl RunSettings {
    /// Builds the run options, arming the timeout timer if one was requested.
    pub fn run_options(&self) -> RunOptions {
        let mut options = RunOptions::default().with_step_delay_ms(self.delay_ms);
        if let Some(timeout_ms) = self.timeout_ms {
            let token = CancellationToken::new();
            let timer = token.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(timeout_ms));
                timer.cancel();
            });
            options = options.with_cancellation(token);
        }
        options
    }

    /// Runs `run` against a configured engine, ticking a spinner on paced runs
    /// and recording steps when `--steps` is set.
    pub fn execute<F>(&self, options: RunOptions, run: F) -> Result<Outcome>
    where
        F: FnOnce(&Engine, &mut dyn Observer) -> stepwise_common::Result<RunReport>,
    {
        let engine = Engine::with_options(options);
        let spinner = if engine.options().is_paced() && !self.quiet {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ProgressStyle::with_template("{spinner} {pos} steps  {msg}")?);
            Some(bar)
        } else {
            None
        };

        let record = self.show_steps;
        let mut steps = Vec::new();
        let mut observer = |step: &Step| {
            if let Some(bar) = &spinner {
                bar.set_message(step.kind());
                bar.inc(1);
            }
            if record {
                steps.push(step.clone());
            }
        };
        let report = run(&engine, &mut observer)?;

        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
        Ok(Outcome { report, steps })
    }
}

/// A finished run plus the steps recorded along the way.
#[derive(Serialize)]
pub struct Outcome {
    #[serde(flatten)]
    pub report: RunReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Outcome {
    /// Prints the outcome. `details` renders the family-specific result in
    /// table mode and returns the summary rows to show after it.
    pub fn print<F>(&self, settings: &RunSettings, details: F) -> Result<()>
    where
        F: FnOnce(&RunReport) -> Vec<(&'static str, String)>,
    {
        let fmt: Format = settings.format.into();
        match fmt {
            Format::Json => output::print_json(self, settings.quiet)?,
            Format::Table => {
                output::print_steps(&self.steps, settings.quiet);

                let mut items = vec![
                    ("Family", self.report.family.to_string()),
                    ("Algorithm", self.report.algorithm.to_string()),
                ];
                if self.report.result.is_aborted() {
                    items.push(("Outcome", "aborted".to_string()));
                } else {
                    items.extend(details(&self.report));
                }
                items.push(("Steps", self.report.steps.to_string()));
                items.push(("Elapsed", format!("{:.2?}", self.report.elapsed)));
                output::print_key_value_table(&items, settings.quiet);
            }
        }

        if self.report.result.is_aborted() {
            output::warning(
                &format!("run cancelled after {} steps", self.report.steps),
                settings.quiet,
            );
        }
        Ok(())
    }
}

/// Joins values with single spaces.
pub fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
