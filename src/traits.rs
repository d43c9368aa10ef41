//! Common traits and the error type for heap operations
//!
//! This module provides a two-tier trait surface:
//!
//! - [`Heap`]: push/peek/pop/merge, no handles
//! - [`DecreaseKeyHeap`]: adds handle-returning insertion and `decrease_key`
//!
//! Generic clients such as shortest-path searches can be written against these
//! traits and stay independent of the concrete heap.

use thiserror::Error;

/// Result alias for heap operations.
pub type HeapResult<T> = Result<T, HeapError>;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The new key compares greater than the node's current key. Only
    /// decreases (or equal keys) are accepted in place.
    #[error("new key compares greater than the current key")]
    KeyIncreased,
    /// The handle does not address a live node of this heap: the node was
    /// already extracted or deleted, or the handle came from another heap.
    #[error("handle is no longer valid (element was removed or belongs to another heap)")]
    InvalidHandle,
    /// The heap's minimum sentinel compares greater than the key of the node
    /// being deleted, so the ordering contract is broken.
    #[error("minimum sentinel compares greater than a stored key")]
    SentinelNotMinimal,
    /// A structural invariant does not hold.
    #[error("heap structure corrupted: {0}")]
    Corrupted(String),
}

/// A handle to an element in the heap, used for decrease_key operations
///
/// This is an opaque type that identifies a specific element in the heap.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// These heaps store (key, item) pairs to separate the ordering key from the
/// data, and are min-heaps with respect to the heap's key ordering.
///
/// # Example
///
/// ```rust
/// use fibheap::{FibHeap, Heap};
///
/// let mut heap: FibHeap<i32, &str> = FibHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(Heap::pop(&mut heap), Some((1, "one")));
/// ```
pub trait Heap<K, T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given key
    fn push(&mut self, key: K, item: T);

    /// Returns the minimum key and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&K, &T)>;

    /// Removes and returns the minimum key and associated item
    fn pop(&mut self) -> Option<(K, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with `decrease_key` support
///
/// # Example
///
/// ```rust
/// use fibheap::{DecreaseKeyHeap, FibHeap, Heap};
///
/// let mut heap: FibHeap<i32, &str> = FibHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<K, T>: Heap<K, T> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element with the given key, returning a handle
    fn push_with_handle(&mut self, key: K, item: T) -> Self::Handle;

    /// Lowers the key of the element identified by the handle
    ///
    /// # Errors
    /// Returns [`HeapError::KeyIncreased`] if the new key compares greater than
    /// the current key, and [`HeapError::InvalidHandle`] if the element is gone.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> HeapResult<()>;
}
