//! Comparator-driven priority heap for Rust
//!
//! This crate provides [`PriorityHeap`], an array-backed binary heap whose
//! ordering is a strict "has priority over" predicate chosen at construction
//! time, together with operations for combining heaps and selectively
//! draining them.
//!
//! # Features
//!
//! - **Configurable ordering**: max-heap by default, min-heap via
//!   [`minheap`] or [`HeapOrder::Min`], or any `Fn(&T, &T) -> bool`
//! - **Merging**: `+` builds a new heap, `+=` merges in place, from another
//!   heap, a sequence, or a single value (see [`MergeSource`])
//! - **Selective draining**: pop everything, pop a priority-ordered prefix
//!   while a predicate holds, and filter either way
//!
//! # Example
//!
//! ```rust
//! use priority_heap::{minheap, PriorityHeap};
//!
//! let mut heap = PriorityHeap::with_comparator(minheap::<u32>);
//! heap.insert(5);
//! heap.insert(3);
//! heap += vec![8, 1];
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.drain_until(|v| *v < 6), vec![3, 5]);
//! assert_eq!(heap.len(), 1);
//! ```
//!
//! The heap has no internal synchronization; share it across threads behind
//! a single lock such as `Mutex<PriorityHeap<T>>`.

pub mod drain;
pub mod merge;
pub mod order;
pub mod priority_heap;
pub mod traits;

// Re-export the main types for convenience
pub use drain::Predicate;
pub use merge::MergeSource;
pub use order::{maxheap, minheap, HeapOrder, OrderFn};
pub use priority_heap::PriorityHeap;
pub use traits::{Comparator, Heap};
