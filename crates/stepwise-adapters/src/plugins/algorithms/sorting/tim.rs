//! A simplified Timsort: fixed-size insertion-sorted runs, then bottom-up
//! merges.

use stepwise_common::step::StepEmitter;
use stepwise_common::utils::error::Result;

use super::{Keyed, insertion_sort_range, merge_runs};

/// Length of the runs sorted by insertion before merging begins.
pub const RUN: usize = 32;

/// Sorts runs of [`RUN`] elements with insertion sort, then merges adjacent
/// runs of doubling width. Stable.
pub fn tim_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    for lo in (0..n).step_by(RUN) {
        insertion_sort_range(values, lo, (lo + RUN).min(n), emitter)?;
    }

    let mut width = RUN;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            if mid < hi {
                merge_runs(values, lo, mid, hi, emitter)?;
            }
        }
        width *= 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_spans_several_runs() {
        let input: Vec<i64> = (0..150).map(|i| (i * 37) % 101).collect();
        let (output, steps) = run(&input, tim_sort);
        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(output, expected);
        assert_eq!(replay(&input, &steps), expected);
    }

    #[test]
    fn test_short_input_is_plain_insertion() {
        let input = [4, 2, 3, 1];
        let (_, tim_steps) = run(&input, tim_sort);
        let (_, insertion_steps) = run(&input, super::super::insertion_sort);
        assert_eq!(tim_steps, insertion_steps);
    }

    #[test]
    fn test_stable_across_runs() {
        let mut values: Vec<(i64, usize)> = (0..100).map(|i| ((i % 3) as i64, i)).collect();
        tim_sort(&mut values, &mut StepEmitter::new()).unwrap();
        assert!(
            values
                .windows(2)
                .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
        );
    }
}
