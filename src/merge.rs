//! Combining heaps
//!
//! Anything merged into a heap is one of three things: another heap, a
//! sequence of values, or a single value. [`MergeSource`] names those cases
//! so the choice is made at compile time.
//!
//! - `a.merge(src)` and `a += src` insert every element of `src` into `a`
//! - `a.merged(src)` and `&a + src` build a new heap and leave `a` untouched
//!
//! A heap source is only read, never drained, so both forms require
//! `T: Clone` when merging from a heap.
//!
//! # Example
//!
//! ```rust
//! use priority_heap::{MergeSource, PriorityHeap};
//!
//! let mut a = PriorityHeap::new();
//! a.insert(3);
//!
//! let mut b = PriorityHeap::new();
//! b.insert(5);
//!
//! let joined = &a + &b;
//! assert_eq!(joined.len(), 2);
//! assert_eq!((a.len(), b.len()), (1, 1));
//!
//! a += vec![1, 9];
//! a += MergeSource::Scalar(4);
//! assert_eq!(a.into_sorted_vec(), vec![9, 4, 3, 1]);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

use log::trace;

use crate::order::OrderFn;
use crate::priority_heap::PriorityHeap;
use crate::traits::Comparator;

/// Something whose elements can be merged into a heap
///
/// `D` is the comparator type of a heap source. Named merges take a source
/// with the destination's comparator type; `+=` and `+` with a `&PriorityHeap`
/// accept any comparator, since every element is re-inserted.
pub enum MergeSource<'a, T, D = OrderFn<T>> {
    /// Every element stored in another heap, which is left unmodified
    Heap(&'a PriorityHeap<T, D>),
    /// Every element of a sequence
    Sequence(Vec<T>),
    /// A single element
    Scalar(T),
}

impl<T: fmt::Debug, D> fmt::Debug for MergeSource<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSource::Heap(heap) => f.debug_tuple("Heap").field(heap).finish(),
            MergeSource::Sequence(values) => f.debug_tuple("Sequence").field(values).finish(),
            MergeSource::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

impl<'a, T, D> From<&'a PriorityHeap<T, D>> for MergeSource<'a, T, D> {
    fn from(heap: &'a PriorityHeap<T, D>) -> Self {
        MergeSource::Heap(heap)
    }
}

impl<T, D> From<Vec<T>> for MergeSource<'_, T, D> {
    fn from(values: Vec<T>) -> Self {
        MergeSource::Sequence(values)
    }
}

impl<T: Clone, C: Comparator<T>> PriorityHeap<T, C> {
    /// Inserts every element of `source` into this heap
    pub fn merge(&mut self, source: MergeSource<'_, T, C>) {
        match source {
            MergeSource::Heap(other) => self.merge_heap(other),
            MergeSource::Sequence(values) => {
                trace!("merging {} elements from sequence", values.len());
                self.extend(values);
            }
            MergeSource::Scalar(value) => self.insert(value),
        }
    }

    /// Inserts a copy of every element of `other`, whatever its ordering
    fn merge_heap<D>(&mut self, other: &PriorityHeap<T, D>) {
        trace!("merging {} elements from heap", other.len());
        self.data.reserve(other.len());
        for value in other.iter() {
            self.insert(value.clone());
        }
    }
}

impl<T: Clone, C: Comparator<T> + Clone> PriorityHeap<T, C> {
    /// Returns a new heap holding this heap's elements and those of `source`
    ///
    /// The new heap is ordered by this heap's comparator.
    pub fn merged(&self, source: MergeSource<'_, T, C>) -> Self {
        let mut result = self.clone();
        result.merge(source);
        result
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Copy + 'a, C: Comparator<T>> Extend<&'a T> for PriorityHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = PriorityHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Clone, C: Comparator<T>, D> AddAssign<&PriorityHeap<T, D>> for PriorityHeap<T, C> {
    fn add_assign(&mut self, other: &PriorityHeap<T, D>) {
        self.merge_heap(other);
    }
}

impl<T: Clone, C: Comparator<T>> AddAssign<Vec<T>> for PriorityHeap<T, C> {
    fn add_assign(&mut self, values: Vec<T>) {
        self.merge(MergeSource::Sequence(values));
    }
}

impl<T: Clone, C: Comparator<T>> AddAssign<MergeSource<'_, T, C>> for PriorityHeap<T, C> {
    fn add_assign(&mut self, source: MergeSource<'_, T, C>) {
        self.merge(source);
    }
}

impl<T: Clone, C: Comparator<T> + Clone, D> Add<&PriorityHeap<T, D>> for &PriorityHeap<T, C> {
    type Output = PriorityHeap<T, C>;

    fn add(self, other: &PriorityHeap<T, D>) -> Self::Output {
        let mut result = self.clone();
        result.merge_heap(other);
        result
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Add<Vec<T>> for &PriorityHeap<T, C> {
    type Output = PriorityHeap<T, C>;

    fn add(self, values: Vec<T>) -> Self::Output {
        self.merged(MergeSource::Sequence(values))
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Add<MergeSource<'_, T, C>> for &PriorityHeap<T, C> {
    type Output = PriorityHeap<T, C>;

    fn add(self, source: MergeSource<'_, T, C>) -> Self::Output {
        self.merged(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_of(values: &[i32]) -> PriorityHeap<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_add_heap() {
        let a = heap_of(&[3]);
        let b = heap_of(&[5]);

        let mut joined = &a + &b;

        assert_eq!(a.as_slice(), &[3]);
        assert_eq!(b.as_slice(), &[5]);
        assert_eq!(joined.pop(), Some(5));
        assert_eq!(joined.pop(), Some(3));
        assert_eq!(joined.pop(), None);
    }

    #[test]
    fn test_add_sequence() {
        let a = heap_of(&[3]);
        let mut joined = &a + vec![5];

        assert_eq!(a.len(), 1);
        assert_eq!(joined.pop(), Some(5));
        assert_eq!(joined.pop(), Some(3));
        assert!(joined.is_empty());
    }

    #[test]
    fn test_add_scalar() {
        let a = heap_of(&[3]);
        let mut joined = &a + MergeSource::Scalar(5);

        assert_eq!(a.len(), 1);
        assert_eq!(joined.pop(), Some(5));
        assert_eq!(joined.pop(), Some(3));
    }

    #[test]
    fn test_add_assign_heap_leaves_source() {
        let mut a = heap_of(&[3]);
        let b = heap_of(&[5]);

        a += &b;

        assert_eq!(b.len(), 1);
        assert_eq!(a.len(), 2);
        assert_eq!(a.pop(), Some(5));
        assert_eq!(a.pop(), Some(3));
    }

    #[test]
    fn test_add_assign_sequence_and_scalar() {
        let mut a = heap_of(&[3]);
        a += vec![5, 1];
        a += MergeSource::Scalar(4);

        assert_eq!(a.len(), 4);
        assert!(a.is_valid());
        assert_eq!(a.pop(), Some(5));
    }

    #[test]
    fn test_merged_keeps_left_comparator() {
        let mut a = PriorityHeap::min_heap();
        a.insert(3);
        let b = heap_of(&[5, 1]);

        let mut joined = &a + &b;
        assert_eq!(joined.pop(), Some(1));
        assert_eq!(joined.pop(), Some(3));
        assert_eq!(joined.pop(), Some(5));
    }

    #[test]
    fn test_merge_across_comparator_types() {
        let mut by_abs = PriorityHeap::with_comparator(|a: &i32, b: &i32| a.abs() > b.abs());
        by_abs.insert(-2);
        let plain = heap_of(&[-7, 4]);

        by_abs += &plain;
        assert_eq!(by_abs.pop(), Some(-7));
        assert_eq!(by_abs.pop(), Some(4));
        assert_eq!(by_abs.pop(), Some(-2));
    }

    #[test]
    fn test_add_closure_ordered_heap_into_plain_heap() {
        let mut by_abs = PriorityHeap::with_comparator(|a: &i32, b: &i32| a.abs() > b.abs());
        by_abs.insert(-9);
        by_abs.insert(2);
        let plain = heap_of(&[5]);

        let mut joined = &plain + &by_abs;
        assert_eq!(by_abs.len(), 2);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.pop(), Some(5));
        assert_eq!(joined.pop(), Some(2));
        assert_eq!(joined.pop(), Some(-9));
    }

    #[test]
    fn test_debug_source_over_closure_heap() {
        let mut by_abs = PriorityHeap::with_comparator(|a: &i32, b: &i32| a.abs() > b.abs());
        by_abs.insert(-3);
        let source: MergeSource<'_, i32, _> = MergeSource::Heap(&by_abs);

        assert_eq!(
            format!("{:?}", source),
            "Heap(PriorityHeap { data: [-3], .. })"
        );
        assert_eq!(
            format!("{:?}", MergeSource::<i32>::Scalar(4)),
            "Scalar(4)"
        );
        assert_eq!(
            format!("{:?}", MergeSource::<i32>::Sequence(vec![1, 2])),
            "Sequence([1, 2])"
        );
    }

    #[test]
    fn test_merge_from_conversions() {
        let source = heap_of(&[2, 8]);
        let mut heap = PriorityHeap::new();
        heap.merge(MergeSource::from(&source));
        heap.merge(MergeSource::from(vec![5]));
        assert_eq!(heap.into_sorted_vec(), vec![8, 5, 2]);
    }

    #[test]
    fn test_extend_by_reference() {
        let mut heap: PriorityHeap<i32> = PriorityHeap::new();
        heap.extend(&[4, 9, 1]);
        assert_eq!(heap.peek(), Some(&9));
    }
}
