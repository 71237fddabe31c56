//! Array-backed binary min-heap
//!
//! [`PQHeap`] keeps its elements in a single owned slot buffer laid out as an
//! implicit binary tree (see [`crate::index`]). The slot at index 0 always
//! holds an element of minimum priority.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `enqueue`  | O(log n) amortized |
//! | `dequeue`  | O(log n)           |
//! | `peek`     | O(1)               |
//! | `clear`    | O(1)               |
//!
//! Ordering among equal priorities is unspecified.
//!
//! # Example
//!
//! ```rust
//! use pqheap::{DataPoint, PQHeap};
//!
//! let mut pq = PQHeap::new();
//! pq.enqueue(DataPoint::new("R", 4)).unwrap();
//! pq.enqueue(DataPoint::new("T", 1)).unwrap();
//! pq.enqueue(DataPoint::new("B", 3)).unwrap();
//!
//! assert_eq!(pq.peek().unwrap().label, "T");
//! assert_eq!(pq.dequeue().unwrap(), DataPoint::new("T", 1));
//! assert_eq!(pq.size(), 2);
//! ```

use crate::element::DataPoint;
use crate::index;
use crate::traits::{Heap, HeapError};

/// Number of slots allocated by [`PQHeap::new`]
pub const INITIAL_CAPACITY: usize = 10;

/// A binary min-heap priority queue over [`DataPoint`]s
///
/// Storage is a boxed slice whose length is the capacity; live elements fill
/// `[0, count)`. When full, the buffer is replaced by one twice as large.
/// [`PQHeap::clear`] only resets the count: stale slots are overwritten by
/// later insertions.
#[derive(Debug)]
pub struct PQHeap<T, P: Ord> {
    slots: Box<[Option<DataPoint<T, P>>]>,
    count: usize,
}

fn alloc_slots<T, P>(capacity: usize) -> Box<[Option<DataPoint<T, P>>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T, P: Ord> PQHeap<T, P> {
    /// Creates an empty queue with [`INITIAL_CAPACITY`] slots
    pub fn new() -> Self {
        Self {
            slots: alloc_slots(INITIAL_CAPACITY),
            count: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements before growing
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity { len: 0, capacity });
        }
        Ok(Self {
            slots: alloc_slots(capacity),
            count: 0,
        })
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts `elem`, growing storage first if every slot is in use
    pub fn enqueue(&mut self, elem: DataPoint<T, P>) -> Result<(), HeapError> {
        if self.count >= self.capacity() {
            self.grow();
        }

        self.slots[self.count] = Some(elem);
        self.count += 1;
        self.sift_up(self.count - 1)?;
        self.after_mutation()
    }

    /// Returns the element with the smallest priority
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&DataPoint<T, P>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        self.slot(0)
    }

    /// Removes and returns the element with the smallest priority
    ///
    /// The last element takes over the root slot and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<DataPoint<T, P>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        let last = self.count - 1;
        self.swap_elements(0, last)?;
        let front = self.slots[last].take().ok_or(HeapError::InvalidIndex {
            index: last,
            count: self.count,
        })?;
        self.count = last;

        if self.count > 1 {
            self.sift_down(0)?;
        }
        self.after_mutation()?;
        Ok(front)
    }

    /// Empties the queue while keeping the allocated capacity
    pub fn clear(&mut self) {
        log::trace!("clearing {} elements", self.count);
        self.count = 0;
    }

    /// Iterates over the live elements in storage order
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint<T, P>> {
        self.slots[..self.count].iter().flatten()
    }

    /// Copies the live elements in storage order
    pub fn snapshot(&self) -> Vec<DataPoint<T, P>>
    where
        T: Clone,
        P: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Replaces the queue's storage with `contents` laid out as given
    ///
    /// The new buffer has `capacity` slots. The contents must already satisfy
    /// the heap property; they are checked before being adopted, so on any
    /// error the queue is left unchanged.
    ///
    /// # Errors
    /// - [`HeapError::InvalidCapacity`] if `capacity` is zero or smaller than
    ///   `contents.len()`
    /// - [`HeapError::HeapOrderViolated`] if `contents` is not a valid heap
    pub fn load_snapshot(
        &mut self,
        contents: Vec<DataPoint<T, P>>,
        capacity: usize,
    ) -> Result<(), HeapError> {
        let len = contents.len();
        if len > capacity || capacity == 0 {
            return Err(HeapError::InvalidCapacity { len, capacity });
        }

        let mut slots = alloc_slots(capacity);
        for (slot, elem) in slots.iter_mut().zip(contents) {
            *slot = Some(elem);
        }
        let loaded = Self { slots, count: len };
        loaded.check_invariant()?;

        log::trace!("loaded {} elements into {} slots", len, capacity);
        *self = loaded;
        Ok(())
    }

    /// Verifies the count fits the storage and every parent is no greater
    /// than its children
    ///
    /// # Errors
    /// - [`HeapError::CapacityExceeded`] if more elements are live than slots exist
    /// - [`HeapError::HeapOrderViolated`] naming the first offending pair
    pub fn check_invariant(&self) -> Result<(), HeapError> {
        if self.count > self.capacity() {
            log::warn!(
                "heap holds {} elements but only {} slots",
                self.count,
                self.capacity()
            );
            return Err(HeapError::CapacityExceeded {
                count: self.count,
                capacity: self.capacity(),
            });
        }

        for child in 1..self.count {
            let Some(parent) = index::parent(child) else {
                continue;
            };
            if self.priority_at(parent)? > self.priority_at(child)? {
                log::warn!("heap order violated between {} and {}", parent, child);
                return Err(HeapError::HeapOrderViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Drains the queue in non-decreasing priority order
    pub fn into_sorted_vec(mut self) -> Result<Vec<DataPoint<T, P>>, HeapError> {
        let mut sorted = Vec::with_capacity(self.count);
        while !self.is_empty() {
            sorted.push(self.dequeue()?);
        }
        Ok(sorted)
    }

    /// Doubles the slot buffer, moving live elements across in index order
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        let mut slots = alloc_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.count].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
        log::debug!("grew heap storage from {} to {} slots", old_capacity, new_capacity);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) -> Result<(), HeapError> {
        while let Some(parent) = index::parent(index) {
            if self.priority_at(index)? < self.priority_at(parent)? {
                self.swap_elements(index, parent)?;
                index = parent;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) -> Result<(), HeapError> {
        loop {
            let children = [
                index::left_child(index, self.count),
                index::right_child(index, self.count),
            ];
            let mut smallest = index;
            for child in children.into_iter().flatten() {
                if self.priority_at(child)? < self.priority_at(smallest)? {
                    smallest = child;
                }
            }

            if smallest == index {
                return Ok(());
            }
            self.swap_elements(index, smallest)?;
            index = smallest;
        }
    }

    fn swap_elements(&mut self, a: usize, b: usize) -> Result<(), HeapError> {
        self.validate_index(a)?;
        self.validate_index(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    fn validate_index(&self, index: usize) -> Result<(), HeapError> {
        if index < self.count {
            Ok(())
        } else {
            Err(HeapError::InvalidIndex {
                index,
                count: self.count,
            })
        }
    }

    fn slot(&self, index: usize) -> Result<&DataPoint<T, P>, HeapError> {
        self.validate_index(index)?;
        self.slots[index].as_ref().ok_or(HeapError::InvalidIndex {
            index,
            count: self.count,
        })
    }

    fn priority_at(&self, index: usize) -> Result<&P, HeapError> {
        self.slot(index).map(|dp| &dp.priority)
    }

    #[inline]
    fn after_mutation(&self) -> Result<(), HeapError> {
        if cfg!(feature = "checked-invariants") {
            self.check_invariant()
        } else {
            Ok(())
        }
    }
}

impl<T, P: Ord> Heap<T, P> for PQHeap<T, P> {
    fn new() -> Self {
        PQHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        self.enqueue(DataPoint::new(item, priority))
    }

    fn peek(&self) -> Result<(&P, &T), HeapError> {
        PQHeap::peek(self).map(|dp| (&dp.priority, &dp.label))
    }

    fn pop(&mut self) -> Result<(P, T), HeapError> {
        self.dequeue().map(DataPoint::into_parts)
    }

    fn clear(&mut self) {
        PQHeap::clear(self)
    }
}

impl<T, P: Ord> Default for PQHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
