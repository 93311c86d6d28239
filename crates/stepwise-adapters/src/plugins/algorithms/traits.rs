//! Shared building blocks for the graph engines.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use stepwise_common::types::Weight;

/// A heap entry ordered so that `BinaryHeap` pops the smallest score first.
///
/// Equal scores pop in insertion order (`seq`), which makes every
/// priority-driven engine deterministic.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<T> {
    /// Priority; smaller pops first.
    pub score: Weight,
    /// Insertion sequence number, the tie-breaker.
    pub seq: u64,
    /// Payload.
    pub item: T,
}

impl<T> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl<T> Eq for MinScored<T> {}

impl<T> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A min-priority frontier with FIFO tie-breaking.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<MinScored<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Adds `item` with priority `score`.
    pub fn push(&mut self, score: Weight, item: T) {
        self.heap.push(MinScored {
            score,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Removes the entry with the smallest score (oldest among equals).
    pub fn pop(&mut self) -> Option<(Weight, T)> {
        self.heap.pop().map(|entry| (entry.score, entry.item))
    }

    /// Number of queued entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_first() {
        let mut frontier = Frontier::new();
        frontier.push(5, 'a');
        frontier.push(1, 'b');
        frontier.push(3, 'c');
        assert_eq!(frontier.pop(), Some((1, 'b')));
        assert_eq!(frontier.pop(), Some((3, 'c')));
        assert_eq!(frontier.pop(), Some((5, 'a')));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for item in ['x', 'y', 'z'] {
            frontier.push(2, item);
        }
        frontier.push(-1, 'w');
        assert_eq!(frontier.len(), 4);
        let order: Vec<char> = std::iter::from_fn(|| frontier.pop().map(|(_, c)| c)).collect();
        assert_eq!(order, vec!['w', 'x', 'y', 'z']);
        assert!(frontier.is_empty());
    }
}
