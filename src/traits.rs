//! Common traits for mutable-priority min-queues
//!
//! This module provides the interface shared by every priority queue in the crate:
//!
//! - [`MinPriorityQueue`]: the queue operations (`add`, `contains`, `peek_min`,
//!   `remove_min`, `change_priority`, ...)
//! - [`Priority`]: the bound on priority values
//! - [`HeapError`]: the error returned when a precondition is violated
//!
//! Elements are identities: each element may be present at most once, and its
//! priority is a separate, mutable ordering key. This differs from
//! `std::collections::BinaryHeap`, where the stored value is its own key and
//! cannot be located once pushed.

use thiserror::Error;

/// Error type for priority queue operations
///
/// Every variant is a caller error. A failed operation leaves the queue
/// exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `add` was called with an element that is already present
    #[error("element is already present in the queue")]
    DuplicateElement,
    /// `change_priority` was called with an element that is not present
    #[error("element is not present in the queue")]
    NotFound,
    /// `peek_min` or `remove_min` was called on an empty queue
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The priority does not compare equal to itself (e.g. `f64::NAN`)
    #[error("priority is not comparable (NaN)")]
    IncomparablePriority,
}

/// Trait for types usable as priorities.
///
/// Floating point priorities are the common case, so only a partial order is
/// required. Values for which [`is_comparable`](Priority::is_comparable) is false
/// are rejected at the queue boundary and never stored.
pub trait Priority: PartialOrd + Clone {
    /// Returns false for values outside the total order, such as NaN.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl<P> Priority for P where P: PartialOrd + Clone {}

/// Base trait for min-priority queues with in-place priority change
///
/// # Example
///
/// ```rust
/// use indexed_minpq::{HeapError, MinPriorityQueue};
/// use indexed_minpq::indexed::IndexedMinHeap;
///
/// let mut pq: IndexedMinHeap<&str, f64> = IndexedMinHeap::new();
/// pq.add("a", 5.0).unwrap();
/// pq.add("b", 1.0).unwrap();
/// pq.change_priority(&"a", 0.0).unwrap();
///
/// assert_eq!(pq.remove_min(), Ok("a"));
/// assert_eq!(pq.add("b", 2.0), Err(HeapError::DuplicateElement));
/// ```
pub trait MinPriorityQueue<E, P: Priority> {
    /// Creates a new empty queue
    fn new() -> Self
    where
        Self: Sized;

    /// Creates a queue holding every (element, priority) pair
    ///
    /// Equivalent to calling [`add`](MinPriorityQueue::add) for each pair in
    /// iteration order. Priorities need not be unique; elements must be.
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateElement` if the same element appears twice,
    /// or `HeapError::IncomparablePriority` for a NaN priority.
    fn from_priorities<I>(pairs: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (E, P)>,
        Self: Sized,
    {
        let mut queue = Self::new();
        for (element, priority) in pairs {
            queue.add(element, priority)?;
        }
        Ok(queue)
    }

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `element` with the given priority
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateElement` if `element` is already present,
    /// or `HeapError::IncomparablePriority` for a NaN priority.
    fn add(&mut self, element: E, priority: P) -> Result<(), HeapError>;

    /// Returns true if `element` is present
    fn contains(&self, element: &E) -> bool;

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if the queue is empty.
    fn peek_min(&self) -> Result<&E, HeapError>;

    /// Removes and returns the element with the minimum priority
    ///
    /// Among equal priorities the choice is deterministic for a given
    /// implementation and sequence of operations, but is not FIFO or LIFO.
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if the queue is empty.
    fn remove_min(&mut self) -> Result<E, HeapError>;

    /// Replaces the priority of `element`
    ///
    /// The new priority may be smaller, larger or equal to the old one.
    ///
    /// # Errors
    /// Returns `HeapError::NotFound` if `element` is absent, or
    /// `HeapError::IncomparablePriority` for a NaN priority.
    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), HeapError>;
}
