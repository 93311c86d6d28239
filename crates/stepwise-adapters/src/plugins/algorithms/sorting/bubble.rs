//! Bubble sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, compare, swap};

/// Sorts by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass bubbles the largest remaining key to the end. The sort stops
/// after the first pass that makes no swap, so already-sorted input costs a
/// single pass of `n - 1` comparisons and no swaps.
pub fn bubble_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            compare(emitter, j, j + 1)?;
            if values[j].key() > values[j + 1].key() {
                swap(values, j, j + 1, emitter)?;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use stepwise_common::step::Step;

    #[test]
    fn test_sorted_input_single_pass() {
        let input = [1, 2, 3, 4, 5];
        let (output, steps) = run(&input, bubble_sort);
        assert_eq!(output, input);
        assert_eq!(swaps(&steps), 0);
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_reverse_input_swaps_every_pair() {
        let (output, steps) = run(&[4, 3, 2, 1], bubble_sort);
        assert_eq!(output, vec![1, 2, 3, 4]);
        assert_eq!(swaps(&steps), 6);
    }

    #[test]
    fn test_first_steps() {
        let (_, steps) = run(&[2, 1, 3], bubble_sort);
        assert_eq!(
            &steps[..3],
            &[
                Step::Compare { left: 0, right: 1 },
                Step::Swap { left: 0, right: 1 },
                Step::Compare { left: 1, right: 2 },
            ]
        );
    }

    #[test]
    fn test_stable_on_tagged_duplicates() {
        let mut values: Vec<(i64, u8)> = vec![(3, 0), (1, 1), (3, 2), (1, 3)];
        bubble_sort(&mut values, &mut StepEmitter::new()).unwrap();
        assert_eq!(values, vec![(1, 1), (1, 3), (3, 0), (3, 2)]);
    }
}
