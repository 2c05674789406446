//! Mutable-Priority Min-Queues for Rust
//!
//! This crate provides min-priority queues whose elements can be looked up and
//! re-prioritised in place, the primitive needed by graph search, scheduling and
//! greedy algorithms.
//!
//! # Implementations
//!
//! - **Indexed Min-Heap** ([`indexed::IndexedMinHeap`]): binary heap plus an
//!   element-to-position hash index. O(log n) add, remove-min and change-priority;
//!   O(1) contains and peek.
//! - **Unsorted Array** ([`unsorted::UnsortedMinPQ`]): linear-scan baseline with the
//!   same interface. O(n) for everything but the append.
//!
//! Both implement [`MinPriorityQueue`]. Elements are unique identities; adding an
//! element twice is an error ([`HeapError::DuplicateElement`]), not a merge.
//!
//! # Cargo Features
//!
//! - `debug-invariants`: re-verify the heap order and the element index after
//!   every mutation of an [`indexed::IndexedMinHeap`]. Costs O(n) per operation.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use indexed_minpq::MinPriorityQueue;
//! use indexed_minpq::indexed::IndexedMinHeap;
//!
//! let priorities = HashMap::from([("x", 2.0), ("y", 0.5), ("z", 2.0)]);
//! let mut pq: IndexedMinHeap<&str, f64> = MinPriorityQueue::from_priorities(priorities).unwrap();
//!
//! assert_eq!(pq.len(), 3);
//! assert_eq!(pq.remove_min(), Ok("y"));
//! pq.change_priority("z", 1.0).unwrap();
//! assert_eq!(pq.remove_min(), Ok("z"));
//! ```

pub mod indexed;
pub mod traits;
pub mod unsorted;

// Re-export the main trait for convenience
pub use traits::{HeapError, MinPriorityQueue, Priority};
