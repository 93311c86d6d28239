//! Insertion sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, insertion_sort_range};

/// Sorts by inserting each element into the sorted prefix before it.
///
/// Every element is shifted left past all strictly larger predecessors, so
/// equal keys keep their input order. Shifts are reported as
/// [`Step::Write`](stepwise_common::step::Step::Write) steps, followed by a
/// final write placing the element.
pub fn insertion_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }
    insertion_sort_range(values, 0, n, emitter)
}
