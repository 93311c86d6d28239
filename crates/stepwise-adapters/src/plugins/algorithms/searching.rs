//! Search engines over integer sequences.
//!
//! Every engine reads its input without mutating it, reports each examined
//! position as a [`Step::Probe`], and returns `Some(index)` of a matching
//! element or `None` when the target is absent. All engines except
//! [`linear_search`] require ascending input; this precondition is not
//! checked, and unsorted input yields unspecified (but memory-safe) results.

use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::Value;
use stepwise_common::utils::error::Result;

fn probe(values: &[Value], index: usize, emitter: &mut StepEmitter<'_>) -> Result<Value> {
    let value = values[index];
    emitter.emit(Step::Probe { index, value })?;
    Ok(value)
}

/// Scans every position in order, returning the first match.
pub fn linear_search(
    values: &[Value],
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    for index in 0..values.len() {
        if probe(values, index, emitter)? == target {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Classic binary search. With duplicates, any matching index may be returned.
pub fn binary_search(
    values: &[Value],
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    binary_search_range(values, 0, values.len(), target, emitter)
}

/// Binary search over the half-open range `values[lo..hi]`.
fn binary_search_range(
    values: &[Value],
    mut lo: usize,
    mut hi: usize,
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let value = probe(values, mid, emitter)?;
        if value == target {
            return Ok(Some(mid));
        }
        if value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Ok(None)
}

/// Jumps ahead in blocks of `floor(sqrt(n))`, probing the last element of each
/// block, then scans the first block whose last element is not below the
/// target.
pub fn jump_search(
    values: &[Value],
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    let n = values.len();
    if n == 0 {
        return Ok(None);
    }
    let block = n.isqrt().max(1);

    let mut start = 0;
    let end = loop {
        let end = (start + block).min(n) - 1;
        if probe(values, end, emitter)? >= target {
            break end;
        }
        start = end + 1;
        if start >= n {
            return Ok(None);
        }
    };

    for index in start..=end {
        let value = probe(values, index, emitter)?;
        if value == target {
            return Ok(Some(index));
        }
        if value > target {
            break;
        }
    }
    Ok(None)
}

/// Doubles a bound from 1 while the bounded element is not above the target,
/// then binary-searches `[bound / 2, min(bound, n))`.
pub fn exponential_search(
    values: &[Value],
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    let n = values.len();
    if n == 0 {
        return Ok(None);
    }
    if probe(values, 0, emitter)? == target {
        return Ok(Some(0));
    }

    let mut bound = 1;
    while bound < n && probe(values, bound, emitter)? <= target {
        bound *= 2;
    }
    binary_search_range(values, bound / 2, bound.min(n), target, emitter)
}

/// Estimates the probe position by linear interpolation between the values at
/// the current bounds.
///
/// Performs well on uniformly distributed input and degrades towards a linear
/// scan on skewed input. Arithmetic is widened to `i128`, so extreme values
/// cannot overflow.
pub fn interpolation_search(
    values: &[Value],
    target: Value,
    emitter: &mut StepEmitter<'_>,
) -> Result<Option<usize>> {
    let n = values.len();
    if n == 0 {
        return Ok(None);
    }

    let (mut lo, mut hi) = (0usize, n - 1);
    while lo <= hi && target >= values[lo] && target <= values[hi] {
        let pos = if values[hi] == values[lo] {
            lo
        } else {
            let offset = (i128::from(target) - i128::from(values[lo])) * (hi - lo) as i128
                / (i128::from(values[hi]) - i128::from(values[lo]));
            lo + offset as usize
        };

        let value = probe(values, pos, emitter)?;
        if value == target {
            return Ok(Some(pos));
        }
        if value < target {
            lo = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            hi = pos - 1;
        }
    }
    Ok(None)
}
