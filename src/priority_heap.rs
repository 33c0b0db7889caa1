//! Comparator-driven binary heap
//!
//! A binary heap stored in a `Vec`, read as a complete binary tree through
//! index arithmetic: the parent of `i` is `(i - 1) / 2` and its children are
//! `2i + 1` and `2i + 2`. The ordering is a strict [`Comparator`] chosen at
//! construction time, so the same type serves as a max-heap (the default), a
//! min-heap, or any custom priority order.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `contains` | O(n)       |
//! | `merge`    | O(m log n) |
//!
//! # Example
//!
//! ```rust
//! use priority_heap::PriorityHeap;
//!
//! let mut heap = PriorityHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;

use crate::order::{maxheap, minheap, HeapOrder, OrderFn};
use crate::traits::{Comparator, Heap};

/// A binary heap ordered by a comparator
///
/// `C` defaults to a plain function pointer, which is what [`new`],
/// [`min_heap`], [`max_heap`] and [`with_order`] produce. Use
/// [`with_comparator`] to order by a closure instead.
///
/// The heap owns its elements; they leave it only through `pop` or one of the
/// drain operations.
///
/// [`new`]: PriorityHeap::new
/// [`min_heap`]: PriorityHeap::min_heap
/// [`max_heap`]: PriorityHeap::max_heap
/// [`with_order`]: PriorityHeap::with_order
/// [`with_comparator`]: PriorityHeap::with_comparator
#[derive(Clone)]
pub struct PriorityHeap<T, C = OrderFn<T>> {
    /// Backing storage, heap-ordered by `comparator`
    pub(crate) data: Vec<T>,
    pub(crate) comparator: C,
}

impl<T: PartialOrd> PriorityHeap<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::max_heap()
    }

    /// Creates an empty heap that yields the largest element first
    pub fn max_heap() -> Self {
        Self::with_comparator(maxheap::<T> as OrderFn<T>)
    }

    /// Creates an empty heap that yields the smallest element first
    pub fn min_heap() -> Self {
        Self::with_comparator(minheap::<T> as OrderFn<T>)
    }

    /// Creates an empty heap ordered by one of the canonical predicates
    pub fn with_order(order: HeapOrder) -> Self {
        Self::with_comparator(order.comparator())
    }

    /// Creates an empty max-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, maxheap::<T> as OrderFn<T>)
    }
}

impl<T, C> PriorityHeap<T, C> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns true if `value` is stored anywhere in the heap
    ///
    /// This is a linear scan over the backing storage.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing storage in heap (not priority) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap (not priority) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in heap (not priority) order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Comparator<T>> PriorityHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    ///
    /// ```rust
    /// use priority_heap::PriorityHeap;
    ///
    /// // Shortest string first
    /// let mut heap = PriorityHeap::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
    /// heap.insert("three");
    /// heap.insert("a");
    /// heap.insert("to");
    /// assert_eq!(heap.pop(), Some("a"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty heap ordered by `comparator` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Inserts `value`, sifting it up past every ancestor it has priority over
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // The last element takes the root's slot and is sifted down from there
        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }

    /// Returns true if no element has priority over its parent
    ///
    /// Always true between public operations; used by tests and proofs.
    #[doc(hidden)]
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self
                .comparator
                .has_priority(&self.data[i], &self.data[parent])
        })
    }

    /// Move element at index up while it has priority over its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .comparator
                .has_priority(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child has priority over it
    ///
    /// The left child is considered first; the right child only takes over
    /// when it strictly beats the current best, so ties never move.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len
                && self
                    .comparator
                    .has_priority(&self.data[left], &self.data[best])
            {
                best = left;
            }
            if right < len
                && self
                    .comparator
                    .has_priority(&self.data[right], &self.data[best])
            {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> Heap<T> for PriorityHeap<T, C> {
    fn is_empty(&self) -> bool {
        PriorityHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        PriorityHeap::insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        PriorityHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        PriorityHeap::pop(self)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        PriorityHeap::contains(self, value)
    }
}

impl<T: PartialOrd> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
