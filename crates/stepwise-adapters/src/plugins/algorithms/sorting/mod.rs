//! Sorting engines.
//!
//! All engines sort ascending in place, compare keys with `<`, and return
//! immediately (zero steps) for sequences shorter than two elements. Every
//! mutation is applied first and then reported, so replaying the emitted
//! [`Step::Swap`] and [`Step::Write`] steps over the input keys reproduces
//! the output exactly (see [`Step::apply`]).
//!
//! Engines are generic over [`Keyed`] elements. Plain `i64` values are their
//! own key; `(key, tag)` pairs sort by `key` alone, which makes stability
//! observable.
//!
//! | Engine | Stable | Notes |
//! | ------ | ------ | ----- |
//! | [`bubble_sort`] | yes | stops after a pass with no swap |
//! | [`selection_sort`] | no | one swap per position at most |
//! | [`insertion_sort`] | yes | shifts larger predecessors right |
//! | [`merge_sort`] | yes | top-down, left element wins ties |
//! | [`quick_sort`] | no | Lomuto, last element as pivot |
//! | [`heap_sort`] | no | bottom-up max-heap |
//! | [`counting_sort`] | yes | non-negative keys, O(n + max) |
//! | [`radix_sort`] | yes | LSD, base 10, non-negative keys |
//! | [`tim_sort`] | yes | insertion-sorted runs of [`RUN`], then merges |

mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;
mod tim;

pub use bubble::bubble_sort;
pub use counting::{MAX_COUNTING_RANGE, counting_sort};
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use tim::{RUN, tim_sort};

use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::Value;
use stepwise_common::utils::error::{Error, Result};

/// An element that sorts by an integer key.
pub trait Keyed: Clone {
    /// The sort key.
    fn key(&self) -> Value;
}

impl Keyed for Value {
    fn key(&self) -> Value {
        *self
    }
}

impl<T: Clone> Keyed for (Value, T) {
    fn key(&self) -> Value {
        self.0
    }
}

/// Reports a comparison between two positions.
fn compare(emitter: &mut StepEmitter<'_>, left: usize, right: usize) -> Result<()> {
    emitter.emit(Step::Compare { left, right })?;
    Ok(())
}

/// Swaps two positions and reports it.
fn swap<T: Keyed>(
    values: &mut [T],
    left: usize,
    right: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    values.swap(left, right);
    emitter.emit(Step::Swap { left, right })?;
    Ok(())
}

/// Stores `item` at `index` and reports it.
fn write<T: Keyed>(
    values: &mut [T],
    index: usize,
    item: T,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    let value = item.key();
    values[index] = item;
    emitter.emit(Step::Write { index, value })?;
    Ok(())
}

/// Largest key, after checking that no key is negative.
///
/// Runs before any mutation so that key-indexed sorts fail cleanly.
fn max_non_negative_key<T: Keyed>(values: &[T]) -> Result<Value> {
    let mut max = 0;
    for (index, item) in values.iter().enumerate() {
        let value = item.key();
        if value < 0 {
            return Err(Error::NegativeValue { index, value });
        }
        max = max.max(value);
    }
    Ok(max)
}

/// Stable merge of the sorted halves `values[lo..mid]` and `values[mid..hi]`.
///
/// Left elements win ties. Right-half elements that remain after the left
/// half is exhausted are already in place and are not rewritten.
fn merge_runs<T: Keyed>(
    values: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    let left: Vec<T> = values[lo..mid].to_vec();
    let right: Vec<T> = values[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        compare(emitter, lo + i, mid + j)?;
        if left[i].key() <= right[j].key() {
            write(values, k, left[i].clone(), emitter)?;
            i += 1;
        } else {
            write(values, k, right[j].clone(), emitter)?;
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        write(values, k, left[i].clone(), emitter)?;
        i += 1;
        k += 1;
    }
    Ok(())
}

/// Insertion sort over `values[lo..hi]`.
fn insertion_sort_range<T: Keyed>(
    values: &mut [T],
    lo: usize,
    hi: usize,
    emitter: &mut StepEmitter<'_>,
) -> Result<()> {
    for i in lo + 1..hi {
        let item = values[i].clone();
        let key = item.key();
        let mut j = i;

        while j > lo {
            compare(emitter, j - 1, j)?;
            if values[j - 1].key() <= key {
                break;
            }
            let shifted = values[j - 1].clone();
            write(values, j, shifted, emitter)?;
            j -= 1;
        }

        if j != i {
            write(values, j, item, emitter)?;
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::plugins::registry::SortAlgorithm;

    type Engine = fn(&mut [Value], &mut StepEmitter<'_>) -> Result<()>;

    const ENGINES: [(&str, Engine); 9] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
        ("heap", heap_sort),
        ("counting", counting_sort),
        ("radix", radix_sort),
        ("tim", tim_sort),
    ];

    #[test]
    fn test_every_engine_sorts_and_replays() {
        let mut expected = MIXED.to_vec();
        expected.sort_unstable();

        for (name, engine) in ENGINES {
            let (output, steps) = run(&MIXED, engine);
            assert_eq!(output, expected, "{name} output");
            assert_eq!(replay(&MIXED, &steps), expected, "{name} replay");
        }
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let mut sorted = MIXED.to_vec();
        sorted.sort_unstable();

        for algorithm in SortAlgorithm::ALL {
            let mut values = sorted.clone();
            let mut steps: Vec<Step> = Vec::new();
            {
                let mut emitter = StepEmitter::new().with_observer(&mut steps);
                algorithm.sort(&mut values, &mut emitter).unwrap();
            }
            let name = algorithm.name();
            assert_eq!(values, sorted, "{name} output");
            assert_eq!(replay(&sorted, &steps), sorted, "{name} replay");
            if algorithm == SortAlgorithm::Bubble {
                assert_eq!(swaps(&steps), 0, "{name} swapped sorted input");
            }
        }
    }

    #[test]
    fn test_short_inputs_emit_nothing() {
        for (name, engine) in ENGINES {
            for input in [&[][..], &[7][..]] {
                let (output, steps) = run(input, engine);
                assert_eq!(output, input, "{name}");
                assert!(steps.is_empty(), "{name} emitted for len {}", input.len());
            }
        }
    }

    #[test]
    fn test_max_non_negative_key() {
        assert_eq!(max_non_negative_key::<Value>(&[3, 0, 9]), Ok(9));
        assert_eq!(max_non_negative_key::<Value>(&[]), Ok(0));
        assert_eq!(
            max_non_negative_key::<Value>(&[3, -2]),
            Err(Error::NegativeValue {
                index: 1,
                value: -2
            })
        );
    }

    #[test]
    fn test_tagged_keys_sort_by_key_only() {
        let mut values: Vec<(Value, char)> = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        merge_sort(&mut values, &mut StepEmitter::new()).unwrap();
        assert_eq!(values, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
