//! Heap sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, compare, swap};

/// Sorts by building a max-heap and repeatedly moving its root to the end.
pub fn heap_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    for root in (0..n / 2).rev() {
        sift_down(values, root, n, emitter)?;
    }
    for end in (1..n).rev() {
        swap(values, 0, end, emitter)?;
        sift_down(values, 0, end, emitter)?;
    }
    Ok(())
}

/// Restores the heap property for the subtree at `root` within `values[..len]`.
fn sift_down<T: Keyed>(
    values: &mut [T],
    mut root: usize,
    len: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return Ok(());
        }
        let mut largest = root;

        compare(emitter, largest, left)?;
        if values[left].key() > values[largest].key() {
            largest = left;
        }
        let right = left + 1;
        if right < len {
            compare(emitter, largest, right)?;
            if values[right].key() > values[largest].key() {
                largest = right;
            }
        }

        if largest == root {
            return Ok(());
        }
        swap(values, root, largest, emitter)?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use stepwise_common::step::Step;

    #[test]
    fn test_two_elements() {
        let (output, steps) = run(&[1, 2], heap_sort);
        assert_eq!(output, vec![1, 2]);
        assert_eq!(
            steps,
            vec![
                Step::Compare { left: 0, right: 1 },
                Step::Swap { left: 0, right: 1 },
                Step::Swap { left: 0, right: 1 },
            ]
        );
    }

    #[test]
    fn test_duplicates() {
        let (output, _) = run(&[2, 2, 1, 2, 1], heap_sort);
        assert_eq!(output, vec![1, 1, 2, 2, 2]);
    }
}
