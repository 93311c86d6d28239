//! Search command.

use anyhow::Result;
use stepwise_common::types::Value;
use stepwise_engine::{RunResult, SearchOutcome, sample_sequence};

use super::{RunSettings, join_values};
use crate::RandomArgs;

/// Run the search command.
///
/// Random input is sorted before the run, since every algorithm except
/// linear search expects ascending values.
pub fn run(
    algorithm: &str,
    target: Value,
    values: Vec<Value>,
    random: &RandomArgs,
    settings: &RunSettings,
) -> Result<()> {
    let input = match random.random {
        Some(_) => {
            let mut values = super::sort::resolve_values(values, random)?;
            values.sort_unstable();
            values
        }
        None if values.is_empty() => sample_sequence(),
        None => values,
    };
    if !input.is_sorted() {
        tracing::warn!(algorithm, "input is not sorted; results may be wrong");
    }

    let outcome = settings.execute(settings.run_options(), |engine, observer| {
        engine.run_search(algorithm, &input, target, observer)
    })?;

    outcome.print(settings, |report| {
        let mut rows = vec![
            ("Input", join_values(&input)),
            ("Target", target.to_string()),
        ];
        if let RunResult::Search(found) = report.result {
            let index = match found {
                SearchOutcome::Found(index) => index.to_string(),
                SearchOutcome::NotFound => format!("not found ({})", SearchOutcome::NOT_FOUND),
            };
            rows.push(("Index", index));
        }
        rows
    })
}
