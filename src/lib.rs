//! Array-backed binary min-heap priority queue
//!
//! This crate provides [`PQHeap`], a priority queue of labelled elements
//! ([`DataPoint`]) that always gives access to the element with the smallest
//! priority value.
//!
//! # Features
//!
//! - **Amortized doubling**: storage grows by doubling when full and never shrinks
//! - **Checked structure**: every exchange validates its indices, and
//!   [`PQHeap::check_invariant`] confirms heap order on demand
//! - **Diagnostics**: [`PQHeap::snapshot`] and [`PQHeap::load_snapshot`] expose
//!   the internal layout for tests
//! - **`checked-invariants` feature**: re-verify heap order after every mutation
//!
//! Errors from every fallible operation are reported as [`HeapError`].
//! Ordering among equal priorities is unspecified.
//!
//! # Example
//!
//! ```rust
//! use pqheap::{DataPoint, HeapError, PQHeap};
//!
//! let mut pq = PQHeap::new();
//! for (label, priority) in [("R", 4), ("A", 5), ("B", 3), ("T", 1)] {
//!     pq.enqueue(DataPoint::new(label, priority)).unwrap();
//! }
//!
//! assert_eq!(pq.dequeue().unwrap().label, "T");
//! assert_eq!(pq.dequeue().unwrap().label, "B");
//! pq.clear();
//! assert_eq!(pq.dequeue(), Err(HeapError::EmptyQueue));
//! ```

pub mod element;
pub mod index;
pub mod pqheap;
pub mod traits;

pub use element::DataPoint;
pub use pqheap::{PQHeap, INITIAL_CAPACITY};
pub use traits::{Heap, HeapError};
