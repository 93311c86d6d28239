//! Top-down merge sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, merge_runs};

/// Sorts by recursively sorting both halves and merging them.
///
/// The split point is `lo + (hi - lo) / 2`. Recursion depth is `log2(n)`.
/// Merged elements are reported as writes; the left element wins ties, so
/// the sort is stable.
pub fn merge_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }
    sort_range(values, 0, n, emitter)
}

fn sort_range<T: Keyed>(
    values: &mut [T],
    lo: usize,
    hi: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(values, lo, mid, emitter)?;
    sort_range(values, mid, hi, emitter)?;
    merge_runs(values, lo, mid, hi, emitter)
}
