//! Counting sort.

use stepwise_common::step::StepEmitter;
use stepwise_common::types::Value;
use stepwise_common::utils::error::{Error, Result};

use super::{Keyed, max_non_negative_key, write};

/// Largest key span counting sort accepts (`max_key + 1`).
pub const MAX_COUNTING_RANGE: Value = 1 << 24;

/// Sorts non-negative keys by counting occurrences of each key.
///
/// Elements are scattered into a buffer in reverse input order against the
/// prefix sums, which keeps equal keys in input order. The buffer is then
/// written back position by position, one write step each.
///
/// # Errors
///
/// Returns [`Error::NegativeValue`] for a negative key and
/// [`Error::InvalidInput`] when the largest key reaches
/// [`MAX_COUNTING_RANGE`]. Both are detected before any step.
pub fn counting_sort<T: Keyed>(values: &mut [T], emitter: &mut StepEmitter<'_>) -> Result<()> {
    let max = max_non_negative_key(values)?;
    if max >= MAX_COUNTING_RANGE {
        return Err(Error::InvalidInput(format!(
            "counting sort key range {} exceeds {MAX_COUNTING_RANGE}",
            max.saturating_add(1)
        )));
    }

    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    let mut counts = vec![0usize; max as usize + 1];
    for item in values.iter() {
        counts[item.key() as usize] += 1;
    }
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; n];
    for item in values.iter().rev() {
        let slot = &mut counts[item.key() as usize];
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

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use stepwise_common::step::Step;

    #[test]
    fn test_one_write_per_position() {
        let (output, steps) = run(&[3, 0, 2, 3, 1], counting_sort);
        assert_eq!(output, vec![0, 1, 2, 3, 3]);
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|s| matches!(s, Step::Write { .. })));
    }

    #[test]
    fn test_negative_rejected_before_steps() {
        let mut values: Vec<Value> = vec![4, -1, 2];
        let mut steps: Vec<Step> = Vec::new();
        let result = {
            let mut emitter = StepEmitter::new().with_observer(&mut steps);
            counting_sort(&mut values, &mut emitter)
        };
        assert_eq!(
            result,
            Err(Error::NegativeValue {
                index: 1,
                value: -1
            })
        );
        assert!(steps.is_empty());
        assert_eq!(values, vec![4, -1, 2]);
    }

    #[test]
    fn test_range_limit() {
        let mut values: Vec<Value> = vec![MAX_COUNTING_RANGE, 0];
        let result = counting_sort(&mut values, &mut StepEmitter::new());
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let mut values: Vec<Value> = vec![MAX_COUNTING_RANGE - 1, 0];
        counting_sort(&mut values, &mut StepEmitter::new()).unwrap();
        assert_eq!(values, vec![0, MAX_COUNTING_RANGE - 1]);
    }

    #[test]
    fn test_stable() {
        let mut values: Vec<(Value, char)> = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        counting_sort(&mut values, &mut StepEmitter::new()).unwrap();
        assert_eq!(values, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_single_negative_rejected() {
        let mut values: Vec<Value> = vec![-5];
        let result = counting_sort(&mut values, &mut StepEmitter::new());
        assert_eq!(
            result,
            Err(Error::NegativeValue {
                index: 0,
                value: -5
            })
        );
    }
}
