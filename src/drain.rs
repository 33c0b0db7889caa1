//! Selective extraction
//!
//! Draining pops elements in priority order into a `Vec`, optionally
//! filtering them and optionally stopping early.
//!
//! - **Full drain** (no `until`): every element is popped. Elements rejected
//!   by the filter are discarded, and the heap is empty afterwards.
//! - **Until drain**: elements are popped while `until` holds for the current
//!   top. Elements rejected by the filter are put back into the heap once the
//!   drain stops, so nothing is lost.
//!
//! The two modes treat filtered-out elements differently on purpose: an
//! until drain takes a prefix of the heap and must leave the rest intact,
//! while a full drain consumes the heap.
//!
//! # Example
//!
//! ```rust
//! use priority_heap::PriorityHeap;
//!
//! let mut heap: PriorityHeap<i32> = [3, 1, 5, 2, 6, 4].into_iter().collect();
//!
//! let evens_above_three = heap.drain_until_filtered(|v| *v > 3, |v| v % 2 == 0);
//! assert_eq!(evens_above_three, vec![6, 4]);
//!
//! // 5 was filtered out, so it went back into the heap
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.len(), 3);
//! ```

use log::trace;

use crate::priority_heap::PriorityHeap;
use crate::traits::Comparator;

/// Predicate over a single element, as taken by [`PriorityHeap::drain`]
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

impl<T, C: Comparator<T>> PriorityHeap<T, C> {
    /// Drains elements in priority order
    ///
    /// With `until`, pops while `until` holds for the top element and puts
    /// filtered-out elements back afterwards. Without it, pops everything and
    /// discards filtered-out elements. Draining an empty heap returns an
    /// empty `Vec` in either mode.
    ///
    /// ```rust
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap: PriorityHeap<i32> = [3, 1, 5, 2, 6, 4].into_iter().collect();
    /// assert_eq!(heap.drain(Some(&|v: &i32| *v > 3), None), vec![6, 5, 4]);
    /// assert_eq!(heap.drain(None, None), vec![3, 2, 1]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain(
        &mut self,
        until: Option<Predicate<'_, T>>,
        filter: Option<Predicate<'_, T>>,
    ) -> Vec<T> {
        match until {
            Some(until) => self.drain_prefix(until, filter),
            None => self.drain_everything(filter),
        }
    }

    /// Pops every element, returning them in priority order
    pub fn drain_all(&mut self) -> Vec<T> {
        self.drain_everything(None::<fn(&T) -> bool>)
    }

    /// Pops every element, keeping those that pass `filter` and discarding the rest
    pub fn drain_filtered<F>(&mut self, filter: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.drain_everything(Some(filter))
    }

    /// Pops elements while `until` holds for the top element
    pub fn drain_until<U>(&mut self, until: U) -> Vec<T>
    where
        U: FnMut(&T) -> bool,
    {
        self.drain_prefix(until, None::<fn(&T) -> bool>)
    }

    /// Pops elements while `until` holds for the top element, returning those
    /// that pass `filter`
    ///
    /// Popped elements that fail `filter` are re-inserted once the drain
    /// stops.
    pub fn drain_until_filtered<U, F>(&mut self, until: U, filter: F) -> Vec<T>
    where
        U: FnMut(&T) -> bool,
        F: FnMut(&T) -> bool,
    {
        self.drain_prefix(until, Some(filter))
    }

    /// Consumes the heap, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_all()
    }

    fn drain_prefix<U, F>(&mut self, mut until: U, mut filter: Option<F>) -> Vec<T>
    where
        U: FnMut(&T) -> bool,
        F: FnMut(&T) -> bool,
    {
        let mut drained = Vec::new();
        let mut kept = Vec::new();

        while self.peek().is_some_and(&mut until) {
            let Some(value) = self.pop() else {
                break;
            };
            if filter.as_mut().map_or(true, |filter| filter(&value)) {
                drained.push(value);
            } else {
                kept.push(value);
            }
        }

        trace!(
            "until drain took {} elements, reinserting {}",
            drained.len(),
            kept.len()
        );
        for value in kept {
            self.insert(value);
        }

        drained
    }

    fn drain_everything<F>(&mut self, mut filter: Option<F>) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let total = self.len();
        let mut drained = Vec::with_capacity(total);

        while let Some(value) = self.pop() {
            if filter.as_mut().map_or(true, |filter| filter(&value)) {
                drained.push(value);
            }
        }

        trace!(
            "full drain took {} elements, discarded {}",
            drained.len(),
            total - drained.len()
        );
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_VALUES: [i32; 6] = [3, 1, 5, 2, 6, 4];

    fn default_heap() -> PriorityHeap<i32> {
        DEFAULT_VALUES.into_iter().collect()
    }

    fn is_even(v: &i32) -> bool {
        v % 2 == 0
    }

    #[test]
    fn test_drain_all() {
        let mut heap = default_heap();
        assert_eq!(heap.drain_all(), vec![6, 5, 4, 3, 2, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_drain_filtered_discards() {
        let mut heap = default_heap();
        assert_eq!(heap.drain_filtered(is_even), vec![6, 4, 2]);
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_drain_until() {
        let mut heap = default_heap();
        assert_eq!(heap.drain_until(|v| *v > 3), vec![6, 5, 4]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Some(3));
    }

    #[test]
    fn test_drain_until_filtered_reinserts() {
        let mut heap = default_heap();
        assert_eq!(heap.drain_until_filtered(|v| *v > 3, is_even), vec![6, 4]);
        assert_eq!(heap.len(), 4);
        assert!(heap.is_valid());
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(3));
    }

    #[test]
    fn test_drain_until_on_empty_heap() {
        let mut heap: PriorityHeap<i32> = PriorityHeap::new();
        assert!(heap.drain_until(|_| true).is_empty());
        assert!(heap.drain(Some(&|_: &i32| true), Some(&is_even)).is_empty());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_drain_until_everything_matches() {
        let mut heap = default_heap();
        assert_eq!(heap.drain_until(|_| true), vec![6, 5, 4, 3, 2, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_drain_until_nothing_matches() {
        let mut heap = default_heap();
        assert!(heap.drain_until(|v| *v > 100).is_empty());
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn test_drain_dyn_entry_point() {
        let mut heap = default_heap();
        let drained = heap.drain(None, Some(&is_even));
        assert_eq!(drained, vec![6, 4, 2]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_drain_min_heap() {
        let mut heap: PriorityHeap<i32> = PriorityHeap::min_heap();
        heap.extend(DEFAULT_VALUES);
        assert_eq!(heap.drain_until(|v| *v < 3), vec![1, 2]);
        assert_eq!(heap.into_sorted_vec(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_until_stops_at_first_failure() {
        // 5 fails `until`, so smaller values that would pass are not reached
        let mut heap = default_heap();
        assert_eq!(heap.drain_until(|v| *v != 5), vec![6]);
        assert_eq!(heap.peek(), Some(&5));
    }
}
