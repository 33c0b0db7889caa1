//! Common traits for the priority heap
//!
//! This module provides the two seams of the crate:
//!
//! - [`Comparator`]: the ordering capability a heap is parameterized by
//! - [`Heap`]: the base container interface, so helpers and tests can be
//!   written once against any heap
//!
//! Unlike `std::collections::BinaryHeap`, which relies on `Ord`, ordering here
//! is a strict "has priority over" predicate supplied at construction time.

/// Strict priority predicate used to order a heap
///
/// `has_priority(a, b)` returns true when `a` must be extracted before `b`.
/// The predicate must be strict: for equal elements it returns false in both
/// directions, and equal elements are never moved past each other.
///
/// Any `Fn(&T, &T) -> bool` is a comparator, which includes the canonical
/// [`maxheap`](crate::order::maxheap) and [`minheap`](crate::order::minheap)
/// functions as well as closures:
///
/// ```rust
/// use priority_heap::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len() > b.len();
/// assert!(by_len.has_priority(&"three", &"one"));
/// assert!(!by_len.has_priority(&"two", &"one"));
/// ```
pub trait Comparator<T> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Base trait for priority heap data structures
///
/// This trait mirrors the simple API of Rust's `BinaryHeap`:
/// - `insert` adds an element
/// - `pop` removes and returns the highest-priority element
/// - `peek` returns the highest-priority element without removing it
///
/// Which element is "highest priority" is decided by the heap's
/// [`Comparator`], so the same trait covers min-heaps, max-heaps and custom
/// orderings.
///
/// # Example
///
/// ```rust
/// use priority_heap::{Heap, PriorityHeap};
///
/// fn top_two<H: Heap<i32>>(heap: &mut H) -> (Option<i32>, Option<i32>) {
///     (heap.pop(), heap.pop())
/// }
///
/// let mut heap = PriorityHeap::new();
/// heap.insert(3);
/// heap.insert(9);
/// heap.insert(4);
/// assert_eq!(top_two(&mut heap), (Some(9), Some(4)));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` when the heap is empty; this never panics.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Returns true if `value` is stored anywhere in the heap
    ///
    /// # Time Complexity
    /// O(n), the scan does not use heap order.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;
}
