//! Indexed Binary Min-Heap
//!
//! A binary min-heap over (element, priority) records, paired with a hash map
//! from each element to its current position in the heap array. The map turns
//! `contains` into an O(1) lookup and lets `change_priority` find a record
//! without scanning, so priority changes cost O(log n) instead of O(n).
//!
//! The array uses zero-based indices: `parent(i) = (i - 1) / 2` and the
//! children of `i` are `2i + 1` and `2i + 2`.
//!
//! Every positional exchange goes through a single swap primitive that
//! rewrites both elements' map entries, so the array and the map never
//! disagree about where an element lives.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity        |
//! |-------------------|-------------------|
//! | `add`             | O(log n)          |
//! | `contains`        | O(1) expected     |
//! | `peek_min`        | O(1)              |
//! | `remove_min`      | O(log n)          |
//! | `change_priority` | O(log n)          |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::indexed::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.add("a", 5.0).unwrap();
//! heap.add("b", 1.0).unwrap();
//! heap.add("c", 3.0).unwrap();
//! assert_eq!(heap.peek_min(), Ok(&"b"));
//!
//! heap.change_priority(&"a", 0.0).unwrap();
//! assert_eq!(heap.remove_min(), Ok("a"));
//! assert_eq!(heap.remove_min(), Ok("b"));
//! assert_eq!(heap.remove_min(), Ok("c"));
//! assert!(heap.remove_min().is_err());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;
use thiserror::Error;

use crate::traits::{HeapError, MinPriorityQueue, Priority};

/// Hasher used by the index map unless another is supplied
pub type DefaultHashBuilder = BuildHasherDefault<FxHasher>;

/// Describes which structural invariant of an [`IndexedMinHeap`] is broken
///
/// Returned by [`IndexedMinHeap::check_invariants`]. A correctly functioning
/// heap never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A record has a smaller priority than its parent
    #[error("priority at position {index} is smaller than its parent at position {parent}")]
    HeapOrder { index: usize, parent: usize },
    /// A stored priority is outside the total order (NaN)
    #[error("priority at position {index} is not comparable")]
    IncomparablePriority { index: usize },
    /// The index map does not point back at the record's position
    #[error("element at position {index} is indexed at {recorded:?}")]
    StalePosition {
        index: usize,
        recorded: Option<usize>,
    },
    /// The heap array and the index map disagree on the number of elements
    #[error("heap holds {entries} records but the index map holds {positions}")]
    SizeMismatch { entries: usize, positions: usize },
}

/// A single (element, priority) record in the heap array
#[derive(Debug, Clone)]
struct Entry<E, P> {
    element: E,
    priority: P,
}

/// Parent position of a non-root `index`
#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Left child position of `index`; the right child is one past it
#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// A binary min-heap with an element-to-position index
///
/// Elements must be hashable and are stored twice (once in the heap array and
/// once as a map key), hence the `Clone` bound. Each element may be present
/// at most once.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<E, P, S = DefaultHashBuilder> {
    /// Heap-ordered records
    entries: Vec<Entry<E, P>>,
    /// Current position of every element in `entries`
    positions: HashMap<E, usize, S>,
}

impl<E, P> IndexedMinHeap<E, P> {
    /// Creates a new empty heap using the default hasher
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<E, P, S> IndexedMinHeap<E, P, S> {
    /// Creates an empty heap whose index map uses `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty heap with room for `capacity` elements whose index
    /// map uses `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the element with the minimum priority without removing it
    pub fn peek_min(&self) -> Result<&E, HeapError> {
        self.peek_min_with_priority().map(|(element, _)| element)
    }

    /// Returns the minimum element together with its priority
    pub fn peek_min_with_priority(&self) -> Result<(&E, &P), HeapError> {
        self.entries
            .first()
            .map(|entry| (&entry.element, &entry.priority))
            .ok_or(HeapError::EmptyQueue)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        log::debug!("clearing indexed heap of {} records", self.entries.len());
        self.entries.clear();
        self.positions.clear();
    }
}

impl<E, P, S> IndexedMinHeap<E, P, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Returns true if `element` is present
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Returns the current priority of `element`, if present
    pub fn priority<Q>(&self, element: &Q) -> Option<&P>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(element)
            .map(|&index| &self.entries[index].priority)
    }
}

impl<E, P, S> IndexedMinHeap<E, P, S>
where
    E: Hash + Eq + Clone,
    P: Priority,
    S: BuildHasher,
{
    /// Inserts `element` with the given priority
    ///
    /// # Errors
    /// `DuplicateElement` if the element is already present,
    /// `IncomparablePriority` if `priority` is NaN. The heap is unchanged on error.
    pub fn add(&mut self, element: E, priority: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&element) {
            log::trace!(
                "rejected add: element already present ({} records)",
                self.entries.len()
            );
            return Err(HeapError::DuplicateElement);
        }
        if !priority.is_comparable() {
            log::trace!("rejected add: incomparable priority");
            return Err(HeapError::IncomparablePriority);
        }

        let index = self.entries.len();
        self.positions.insert(element.clone(), index);
        self.entries.push(Entry { element, priority });
        self.sift_up(index);

        #[cfg(any(test, feature = "debug-invariants"))]
        self.assert_invariants();

        Ok(())
    }

    /// Removes and returns the element with the minimum priority
    pub fn remove_min(&mut self) -> Result<E, HeapError> {
        self.remove_min_with_priority().map(|(element, _)| element)
    }

    /// Removes the minimum element and returns it together with its priority
    ///
    /// The last record is moved into the root and sifted down. When both
    /// children tie, the left one is preferred.
    pub fn remove_min_with_priority(&mut self) -> Result<(E, P), HeapError> {
        if self.entries.is_empty() {
            log::trace!("rejected remove_min: queue is empty");
            return Err(HeapError::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let Some(Entry { element, priority }) = self.entries.pop() else {
            return Err(HeapError::EmptyQueue);
        };
        self.positions.remove(&element);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        #[cfg(any(test, feature = "debug-invariants"))]
        self.assert_invariants();

        Ok((element, priority))
    }

    /// Replaces the priority of `element` and restores heap order
    ///
    /// A smaller priority sifts the record up, a larger one sifts it down, and
    /// an equal one leaves it in place.
    ///
    /// # Errors
    /// `NotFound` if the element is absent,
    /// `IncomparablePriority` if `priority` is NaN. The heap is unchanged on error.
    pub fn change_priority<Q>(&mut self, element: &Q, priority: P) -> Result<(), HeapError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&index) = self.positions.get(element) else {
            log::trace!("rejected change_priority: element not present");
            return Err(HeapError::NotFound);
        };
        if !priority.is_comparable() {
            log::trace!("rejected change_priority: incomparable priority");
            return Err(HeapError::IncomparablePriority);
        }

        let old = std::mem::replace(&mut self.entries[index].priority, priority);
        match self.entries[index].priority.partial_cmp(&old) {
            Some(Ordering::Less) => self.sift_up(index),
            Some(Ordering::Greater) => self.sift_down(index),
            _ => {}
        }

        #[cfg(any(test, feature = "debug-invariants"))]
        self.assert_invariants();

        Ok(())
    }

    /// Consumes the heap, returning every (element, priority) pair in removal order
    pub fn into_sorted_vec(mut self) -> Vec<(E, P)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(pair) = self.remove_min_with_priority() {
            sorted.push(pair);
        }
        sorted
    }

    /// Verifies the heap property and the consistency of the index map
    ///
    /// Runs in O(n). Checks that both structures hold the same number of
    /// elements, that no record is smaller than its parent, and that every
    /// element's map entry points at its own position (which also rules out
    /// an element occupying two positions).
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.entries.len() != self.positions.len() {
            return Err(InvariantViolation::SizeMismatch {
                entries: self.entries.len(),
                positions: self.positions.len(),
            });
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.priority.is_comparable() {
                return Err(InvariantViolation::IncomparablePriority { index });
            }
            if index > 0 {
                let parent = parent(index);
                if entry.priority < self.entries[parent].priority {
                    return Err(InvariantViolation::HeapOrder { index, parent });
                }
            }
            let recorded = self.positions.get(&entry.element).copied();
            if recorded != Some(index) {
                return Err(InvariantViolation::StalePosition { index, recorded });
            }
        }

        Ok(())
    }

    #[cfg(any(test, feature = "debug-invariants"))]
    fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("indexed heap invariant violated: {violation}");
        }
    }

    /// Exchanges the records at `a` and `b`, updating both map entries
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.record_position(a);
        self.record_position(b);
    }

    fn record_position(&mut self, index: usize) {
        if let Some(slot) = self.positions.get_mut(&self.entries[index].element) {
            *slot = index;
        }
    }

    /// Move the record at `index` up while it is smaller than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the record at `index` down while a child is smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<E, P, S> MinPriorityQueue<E, P> for IndexedMinHeap<E, P, S>
where
    E: Hash + Eq + Clone,
    P: Priority,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        Self::with_hasher(S::default())
    }

    fn from_priorities<I>(pairs: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (E, P)>,
        Self: Sized,
    {
        let pairs = pairs.into_iter();
        let mut heap = Self::with_capacity_and_hasher(pairs.size_hint().0, S::default());
        for (element, priority) in pairs {
            heap.add(element, priority)?;
        }
        log::debug!("built indexed heap from {} pairs", heap.len());
        Ok(heap)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, element: E, priority: P) -> Result<(), HeapError> {
        IndexedMinHeap::add(self, element, priority)
    }

    fn contains(&self, element: &E) -> bool {
        IndexedMinHeap::contains(self, element)
    }

    fn peek_min(&self) -> Result<&E, HeapError> {
        IndexedMinHeap::peek_min(self)
    }

    fn remove_min(&mut self) -> Result<E, HeapError> {
        IndexedMinHeap::remove_min(self)
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), HeapError> {
        IndexedMinHeap::change_priority(self, element, priority)
    }
}

impl<E, P, S: Default> Default for IndexedMinHeap<E, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}
