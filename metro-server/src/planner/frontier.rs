//! Min-priority frontier for weighted search.
//!
//! A thin wrapper over `BinaryHeap` that pops the lowest priority first.
//! There is no decrease-key: the same payload may be pushed again with a
//! better priority, and consumers skip the stale entries when they surface.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so the max-heap yields the smallest priority.
#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over `(payload, priority)` pairs.
///
/// Ties between equal priorities are broken arbitrarily.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert `payload` with `priority`.
    pub fn push(&mut self, payload: T, priority: f64) {
        self.heap.push(Entry { priority, payload });
    }

    /// Remove and return the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|e| (e.payload, e.priority))
    }

    /// Number of pending entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is pending.
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
    fn pops_in_ascending_priority() {
        let mut frontier = Frontier::new();
        frontier.push("c", 3.0);
        frontier.push("a", 0.5);
        frontier.push("b", 2.0);

        assert_eq!(frontier.pop(), Some(("a", 0.5)));
        assert_eq!(frontier.pop(), Some(("b", 2.0)));
        assert_eq!(frontier.pop(), Some(("c", 3.0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn same_payload_can_be_pushed_twice() {
        let mut frontier = Frontier::new();
        frontier.push("x", 9.0);
        frontier.push("x", 4.0);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some(("x", 4.0)));
        assert_eq!(frontier.pop(), Some(("x", 9.0)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn zero_priority_comes_first() {
        let mut frontier = Frontier::default();
        frontier.push(1, 0.0);
        frontier.push(2, 1e-9);
        assert_eq!(frontier.pop(), Some((1, 0.0)));
    }
}
