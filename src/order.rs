//! Canonical orderings
//!
//! [`maxheap`] and [`minheap`] are the two predicates most heaps need.
//! [`HeapOrder`] selects one of them as a plain configuration value, which is
//! handy when the ordering comes from a setting rather than from code.

use std::fmt;

/// Default comparator type: a plain function pointer
///
/// Heaps built with [`maxheap`], [`minheap`] or a [`HeapOrder`] all share this
/// type, so they can be stored, compared and merged interchangeably.
pub type OrderFn<T> = fn(&T, &T) -> bool;

/// Max-heap predicate: `a` has priority when it is greater than `b`
#[inline]
pub fn maxheap<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

/// Min-heap predicate: `a` has priority when it is less than `b`
#[inline]
pub fn minheap<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Which canonical predicate a heap is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// Largest element first
    #[default]
    Max,
    /// Smallest element first
    Min,
}

impl HeapOrder {
    /// Returns the predicate implementing this ordering
    pub fn comparator<T: PartialOrd>(self) -> OrderFn<T> {
        match self {
            HeapOrder::Max => maxheap::<T>,
            HeapOrder::Min => minheap::<T>,
        }
    }

    /// Returns the opposite ordering
    pub fn reverse(self) -> Self {
        match self {
            HeapOrder::Max => HeapOrder::Min,
            HeapOrder::Min => HeapOrder::Max,
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "max"),
            HeapOrder::Min => write!(f, "min"),
        }
    }
}
