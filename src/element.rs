//! Queue elements
//!
//! A [`DataPoint`] pairs an opaque label with a priority. The queue only ever
//! compares priorities; labels are carried through untouched.

use std::fmt;

/// A labelled value stored in the queue
///
/// Lower priorities are more urgent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPoint<T, P> {
    pub label: T,
    pub priority: P,
}

impl<T, P> DataPoint<T, P> {
    pub fn new(label: T, priority: P) -> Self {
        Self { label, priority }
    }

    /// Splits the element into `(priority, label)`
    pub fn into_parts(self) -> (P, T) {
        (self.priority, self.label)
    }
}

impl<T, P> From<(T, P)> for DataPoint<T, P> {
    fn from((label, priority): (T, P)) -> Self {
        Self { label, priority }
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for DataPoint<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.priority)
    }
}
