//! Unsorted array priority queue
//!
//! A linear-scan [`MinPriorityQueue`] that keeps (element, priority) pairs in
//! insertion order. Lookups compare elements with `PartialEq` and every
//! operation except `add`'s append scans the whole array.
//!
//! It exists as a baseline: property tests use it as a reference model for
//! [`IndexedMinHeap`](crate::indexed::IndexedMinHeap), and the benchmarks
//! compare against it.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(n)       |
//! | `contains`        | O(n)       |
//! | `peek_min`        | O(n)       |
//! | `remove_min`      | O(n)       |
//! | `change_priority` | O(n)       |

use crate::traits::{HeapError, MinPriorityQueue, Priority};

/// A min-priority queue backed by an unordered vector
///
/// Among equal priorities, the earliest inserted element is returned first.
#[derive(Debug, Clone)]
pub struct UnsortedMinPQ<E, P> {
    entries: Vec<(E, P)>,
}

impl<E: PartialEq, P: Priority> UnsortedMinPQ<E, P> {
    /// Position of the first entry with the minimum priority
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, (_, priority)) in self.entries.iter().enumerate() {
            match best {
                Some(current) if self.entries[current].1 <= *priority => {}
                _ => best = Some(index),
            }
        }
        best
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.entries.iter().position(|(e, _)| e == element)
    }
}

impl<E: PartialEq, P: Priority> MinPriorityQueue<E, P> for UnsortedMinPQ<E, P> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, element: E, priority: P) -> Result<(), HeapError> {
        if self.position(&element).is_some() {
            return Err(HeapError::DuplicateElement);
        }
        if !priority.is_comparable() {
            return Err(HeapError::IncomparablePriority);
        }
        self.entries.push((element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    fn peek_min(&self) -> Result<&E, HeapError> {
        self.min_index()
            .map(|index| &self.entries[index].0)
            .ok_or(HeapError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E, HeapError> {
        let index = self.min_index().ok_or(HeapError::EmptyQueue)?;
        Ok(self.entries.remove(index).0)
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), HeapError> {
        let index = self.position(element).ok_or(HeapError::NotFound)?;
        if !priority.is_comparable() {
            return Err(HeapError::IncomparablePriority);
        }
        self.entries[index].1 = priority;
        Ok(())
    }
}

impl<E: PartialEq, P: Priority> Default for UnsortedMinPQ<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
