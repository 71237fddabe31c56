//! Common traits for priority queues
//!
//! This module provides the error channel shared by every fallible queue
//! operation ([`HeapError`]) and the [`Heap`] trait, a small (priority, item)
//! interface that generic code and test harnesses can be written against.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `dequeue` was called on an empty queue
    #[error("cannot access front element of empty queue")]
    EmptyQueue,
    /// An exchange or access addressed a slot outside the live range
    #[error("invalid index {index} (queue holds {count} elements)")]
    InvalidIndex { index: usize, count: usize },
    /// A parent has a greater priority than one of its children
    #[error("heap elements out of order: indexes {parent} and {child}")]
    HeapOrderViolated { parent: usize, child: usize },
    /// More live elements than allocated slots
    #[error("too many elements ({count}) for capacity {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },
    /// A requested capacity is zero or cannot hold the supplied contents
    #[error("invalid capacity {capacity} for {len} elements")]
    InvalidCapacity { len: usize, capacity: usize },
}

/// Base trait for priority queues
///
/// This trait mirrors the shape of Rust's `BinaryHeap` API but keeps the
/// ordering key separate from the payload, and it reports failures through
/// [`HeapError`] rather than `Option`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap`, implementations are min-heaps.
///
/// # Example
///
/// ```rust
/// use pqheap::Heap;
/// use pqheap::pqheap::PQHeap;
///
/// let mut heap: PQHeap<&str, i32> = Heap::new();
/// heap.push(3, "three").unwrap();
/// heap.push(1, "one").unwrap();
/// heap.push(2, "two").unwrap();
///
/// assert_eq!(Heap::peek(&heap), Ok((&1, &"one")));
/// assert_eq!(Heap::pop(&mut heap), Ok((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n), amortized over storage growth.
    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError>;

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the heap holds no elements.
    fn peek(&self) -> Result<(&P, &T), HeapError>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the heap holds no elements.
    fn pop(&mut self) -> Result<(P, T), HeapError>;

    /// Removes every element
    fn clear(&mut self);
}
