//! Sort command.

use anyhow::Result;
use stepwise_common::types::Value;
use stepwise_engine::{RunResult, random_sequence};

use super::{RunSettings, join_values};
use crate::RandomArgs;

/// Length of the random sequence used when no values are given.
const DEFAULT_LEN: usize = 10;

/// Picks the input: explicit values, `--random N`, or a default random run.
pub(crate) fn resolve_values(values: Vec<Value>, random: &RandomArgs) -> Result<Vec<Value>> {
    match random.random {
        Some(len) => Ok(random_sequence(len, random.max, random.seed)?),
        None if values.is_empty() => Ok(random_sequence(DEFAULT_LEN, random.max, random.seed)?),
        None => Ok(values),
    }
}

/// Run the sort command.
pub fn run(
    algorithm: &str,
    values: Vec<Value>,
    random: &RandomArgs,
    settings: &RunSettings,
) -> Result<()> {
    let input = resolve_values(values, random)?;
    tracing::debug!(algorithm, len = input.len(), "sorting");

    let outcome = settings.execute(settings.run_options(), |engine, observer| {
        engine.run_sort(algorithm, &input, observer)
    })?;

    outcome.print(settings, |report| {
        let mut rows = vec![("Input", join_values(&input))];
        if let RunResult::Sorted(sorted) = &report.result {
            rows.push(("Sorted", join_values(sorted)));
        }
        rows
    })
}
