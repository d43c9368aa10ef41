//! Arena-backed Fibonacci heap
//!
//! A mergeable min-priority queue with handle-based key decrease and
//! arbitrary deletion, for search algorithms that keep revising the cost of
//! entries already queued.
//!
//! # Features
//!
//! - O(1) insert and find-min
//! - Union that splices root rings after moving the smaller heap's nodes,
//!   keeping the handles of both heaps valid
//! - O(1) amortized key decrease through stable handles
//! - O(log n) amortized extract-min and delete
//! - Keys ordered by an injected [`KeyOrder`] strategy, so each heap carries
//!   its own ordering and its own deletion sentinel
//! - Nodes stored in a generational arena: stale handles are reported as
//!   [`HeapError::InvalidHandle`] instead of touching freed memory
//!
//! # Example
//!
//! ```rust
//! use fibheap::{FibHeap, HeapError};
//!
//! let mut heap = FibHeap::new();
//! let far = heap.insert(50, "far");
//! heap.insert(20, "near");
//!
//! heap.replace_key(&far, 10).unwrap();
//! assert_eq!(heap.min(), Some(&"far"));
//! assert_eq!(heap.replace_key(&far, 99), Err(HeapError::KeyIncreased));
//!
//! assert_eq!(heap.extract_min(), Some("far"));
//! assert_eq!(heap.replace_key(&far, 1), Err(HeapError::InvalidHandle));
//! ```

pub mod cost_key;
pub mod fibonacci;
pub mod order;
pub mod rank;
mod ring;
mod storage;
pub mod traits;

pub use cost_key::CostKey;
pub use fibonacci::{Drain, FibHandle, FibHeap};
pub use order::{FnOrder, KeyOrder, MinSentinel, NaturalOrder, ReverseOrder};
pub use traits::{DecreaseKeyHeap, Heap, HeapError, HeapResult};
