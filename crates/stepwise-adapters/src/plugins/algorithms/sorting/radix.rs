//! Least-significant-digit radix sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::types::Value;
use stepwise_common::utils::error::Result;

use super::{Keyed, max_non_negative_key, write};

const BASE: Value = 10;

/// Sorts non-negative keys one decimal digit at a time, least significant
/// first.
///
/// Each pass is a stable counting pass over one digit followed by a full
/// write-back, so a run over keys with `d` digits emits `d * n` writes.
///
/// # Errors
///
/// Returns [`Error::NegativeValue`](stepwise_common::utils::error::Error::NegativeValue)
/// before any step if a key is negative.
pub fn radix_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let max = max_non_negative_key(values)?;
    if values.len() < 2 {
        return Ok(());
    }

    let mut exp: Value = 1;
    while max / exp > 0 {
        digit_pass(values, exp, emitter)?;
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(())
}

fn digit_pass<T: Keyed>(values: &mut [T], exp: Value, emitter: &mut StepEmitter<'_>) -> Result<()> {
    let digit = |item: &T| ((item.key() / exp) % BASE) as usize;

    let mut counts = [0usize; BASE as usize];
    for item in values.iter() {
        counts[digit(item)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; values.len()];
    for item in values.iter().rev() {
        let slot = &mut counts[digit(item)];
        *slot -= 1;
        output[*slot] = Some(item.clone());
    }

    for (index, item) in output.into_iter().enumerate() {
        if let Some(item) = item {
            write(values, index, item, emitter)?;
        }
    }
    Ok(())
}
