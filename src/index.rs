//! Index arithmetic for an implicit binary tree stored in an array
//!
//! The root lives at index 0; the children of `i` live at `2i + 1` and
//! `2i + 2`. Child lookups take the live element count so that slots past the
//! end of the heap read as absent.

/// Parent of `child`, or `None` for the root
#[inline]
pub fn parent(child: usize) -> Option<usize> {
    if child == 0 {
        None
    } else {
        Some((child - 1) / 2)
    }
}

/// Left child of `parent` if it lies inside `[0, count)`
#[inline]
pub fn left_child(parent: usize, count: usize) -> Option<usize> {
    parent
        .checked_mul(2)
        .and_then(|i| i.checked_add(1))
        .filter(|&i| i < count)
}

/// Right child of `parent` if it lies inside `[0, count)`
#[inline]
pub fn right_child(parent: usize, count: usize) -> Option<usize> {
    parent
        .checked_mul(2)
        .and_then(|i| i.checked_add(2))
        .filter(|&i| i < count)
}
