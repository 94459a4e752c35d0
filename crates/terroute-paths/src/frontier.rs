//! The open set of an A* search.
//!
//! Entries are stored in a min-heap keyed by `(estimate, seq)`. Lower
//! estimates are popped first; ties are broken by insertion order, so runs
//! over identical input pop identical sequences.
//!
//! A cell may be present several times. Whenever a cheaper route to a cell is
//! found a fresh entry is pushed, and the older ones are left in place and
//! skipped at pop time by comparing them against the [`Ledger`](crate::Ledger).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use terroute_core::Cell;

/// One candidate in the [`Frontier`].
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    /// `cost + heuristic(cell, target)`.
    pub estimate: f64,
    /// Monotonically increasing counter assigned at insertion.
    pub seq: u64,
    pub cell: Cell,
    /// Accumulated cost to `cell` at the time of the push.
    pub cost: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority queue of [`FrontierEntry`] values, smallest `(estimate, seq)`
/// first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Push `cell` reached at accumulated `cost` with total `estimate`.
    /// Returns the sequence number assigned to the entry.
    ///
    /// Never checks whether `cell` is already queued.
    pub fn push(&mut self, cell: Cell, cost: f64, estimate: f64) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            estimate,
            seq,
            cell,
            cost,
        }));
        seq
    }

    /// Pop the entry with the smallest `(estimate, seq)`.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Peek at the entry [`pop_min`](Self::pop_min) would return.
    pub fn peek_min(&self) -> Option<&FrontierEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    /// Whether the frontier holds no entries, stale or not.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes so far.
    pub fn pushes(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: i32) -> Cell {
        Cell::new(0, col)
    }

    #[test]
    fn pops_lowest_estimate_first() {
        let mut f = Frontier::new();
        f.push(c(0), 0.0, 3.0);
        f.push(c(1), 0.0, 1.0);
        f.push(c(2), 0.0, 2.0);

        assert_eq!(f.pop_min().map(|e| e.cell), Some(c(1)));
        assert_eq!(f.pop_min().map(|e| e.cell), Some(c(2)));
        assert_eq!(f.pop_min().map(|e| e.cell), Some(c(0)));
        assert!(f.pop_min().is_none());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut f = Frontier::new();
        f.push(c(7), 0.0, 5.0);
        f.push(c(3), 0.0, 5.0);
        f.push(c(9), 0.0, 5.0);

        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).map(|e| e.cell).collect();
        assert_eq!(order, vec![c(7), c(3), c(9)]);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut f = Frontier::new();
        assert_eq!(f.push(c(0), 0.0, 1.0), 0);
        assert_eq!(f.push(c(0), 0.0, 1.0), 1);
        assert_eq!(f.pushes(), 2);
        f.pop_min();
        assert_eq!(f.push(c(0), 0.0, 1.0), 2);
    }

    #[test]
    fn duplicates_for_one_cell_are_kept() {
        let mut f = Frontier::new();
        f.push(c(4), 10.0, 12.0);
        f.push(c(4), 6.0, 8.0);
        assert_eq!(f.len(), 2);

        let first = f.pop_min().unwrap();
        assert_eq!(first.cost, 6.0);
        let stale = f.pop_min().unwrap();
        assert_eq!(stale.cell, c(4));
        assert_eq!(stale.cost, 10.0);
    }

    #[test]
    fn peek_and_empty() {
        let mut f = Frontier::with_capacity(4);
        assert!(f.is_empty());
        assert!(f.peek_min().is_none());
        f.push(c(1), 0.0, 0.5);
        assert_eq!(f.peek_min().map(|e| e.seq), Some(0));
        assert!(!f.is_empty());
    }
}
