//! Selection sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, compare, swap};

/// Sorts by selecting the minimum of the unsorted suffix for each position.
///
/// Makes exactly `n(n-1)/2` comparisons and at most `n - 1` swaps. The long
/// swaps make it unstable.
pub fn selection_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            compare(emitter, min, j)?;
            if values[j].key() < values[min].key() {
                min = j;
            }
        }
        if min != i {
            swap(values, i, min, emitter)?;
        }
    }
    Ok(())
}
