//! Quick sort with Lomuto partitioning.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, compare, swap};

/// Sorts by partitioning around the last element of each range.
///
/// Pending ranges live on an explicit stack, so already-sorted input (the
/// worst case for a last-element pivot) cannot exhaust the call stack.
/// Self-swaps are skipped and never reported.
pub fn quick_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    // Inclusive ranges.
    let mut pending = vec![(0, n - 1)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let pivot = partition(values, lo, hi, emitter)?;
        // Left range is processed first.
        if pivot + 1 < hi {
            pending.push((pivot + 1, hi));
        }
        if pivot > lo + 1 {
            pending.push((lo, pivot - 1));
        }
    }
    Ok(())
}

/// Partitions `values[lo..=hi]` around `values[hi]`, returning the pivot's
/// final position.
fn partition<T: Keyed>(
    values: &mut [T],
    lo: usize,
    hi: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<usize> {
    let pivot = values[hi].key();
    let mut store = lo;
    for j in lo..hi {
        compare(emitter, j, hi)?;
        if values[j].key() < pivot {
            if store != j {
                swap(values, store, j, emitter)?;
            }
            store += 1;
        }
    }
    if store != hi {
        swap(values, store, hi, emitter)?;
    }
    Ok(store)
}
