//! Generic tests written against the `Heap` trait
//!
//! These exercise the trait interface with various edge cases so any queue
//! implementing it can be checked the same way.

use pqheap::{Heap, HeapError, PQHeap};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(HeapError::EmptyQueue));
    assert_eq!(heap.pop(), Err(HeapError::EmptyQueue));
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "five").unwrap();
    heap.push(1, "one").unwrap();
    heap.push(10, "ten").unwrap();
    heap.push(3, "three").unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Ok((&1, &"one")));

    assert_eq!(heap.pop(), Ok((1, "one")));
    assert_eq!(heap.pop(), Ok((3, "three")));
    assert_eq!(heap.pop(), Ok((5, "five")));
    assert_eq!(heap.pop(), Ok((10, "ten")));
    assert_eq!(heap.pop(), Err(HeapError::EmptyQueue));
    assert!(heap.is_empty());
}

/// Test that a drained heap keeps working
fn test_reuse_after_drain<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for round in 0..3 {
        for i in (0..20).rev() {
            heap.push(i + round, i).unwrap();
        }
        for i in 0..20 {
            assert_eq!(heap.pop().map(|(p, _)| p), Ok(i + round));
        }
        assert_eq!(heap.pop(), Err(HeapError::EmptyQueue));
    }
}

/// Test clear then refill
fn test_clear<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in 0..50 {
        heap.push(i, i).unwrap();
    }
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), Err(HeapError::EmptyQueue));

    heap.push(42, 0).unwrap();
    heap.push(41, 1).unwrap();
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Ok((41, 1)));
    assert_eq!(heap.pop(), Ok((42, 0)));
}

/// Test negative and extreme priorities
fn test_extreme_priorities<H: Heap<u8, i64>>() {
    let mut heap = H::new();
    heap.push(i64::MAX, 1).unwrap();
    heap.push(0, 2).unwrap();
    heap.push(i64::MIN, 3).unwrap();
    heap.push(-1, 4).unwrap();

    assert_eq!(heap.pop(), Ok((i64::MIN, 3)));
    assert_eq!(heap.pop(), Ok((-1, 4)));
    assert_eq!(heap.pop(), Ok((0, 2)));
    assert_eq!(heap.pop(), Ok((i64::MAX, 1)));
}

/// Test interleaved push and pop keep the minimum on top
fn test_interleaved<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    heap.push(10, 10).unwrap();
    heap.push(5, 5).unwrap();
    assert_eq!(heap.pop(), Ok((5, 5)));
    heap.push(7, 7).unwrap();
    heap.push(12, 12).unwrap();
    assert_eq!(heap.peek(), Ok((&7, &7)));
    heap.push(1, 1).unwrap();
    assert_eq!(heap.pop(), Ok((1, 1)));
    assert_eq!(heap.pop(), Ok((7, 7)));
    assert_eq!(heap.pop(), Ok((10, 10)));
    assert_eq!(heap.pop(), Ok((12, 12)));
}

#[test]
fn test_pqheap_empty() {
    test_empty_heap::<PQHeap<String, i32>>();
}

#[test]
fn test_pqheap_basic() {
    test_basic_operations::<PQHeap<&'static str, i32>>();
}

#[test]
fn test_pqheap_reuse_after_drain() {
    test_reuse_after_drain::<PQHeap<i32, i32>>();
}

#[test]
fn test_pqheap_clear() {
    test_clear::<PQHeap<i32, i32>>();
}

#[test]
fn test_pqheap_extreme_priorities() {
    test_extreme_priorities::<PQHeap<u8, i64>>();
}

#[test]
fn test_pqheap_interleaved() {
    test_interleaved::<PQHeap<i32, i32>>();
}
