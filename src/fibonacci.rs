//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) insert and find-min
//! - union by root-ring splice, after relocating the smaller heap's nodes
//! - O(1) amortized decrease-key
//! - O(log n) amortized extract-min and delete
//!
//! The structure is a forest of heap-ordered trees whose roots form a circular
//! doubly-linked ring. The heap keeps a link to the minimum root. Insertion
//! just adds a root; all restructuring is deferred to extract-min, which merges
//! roots of equal degree until every degree is unique. Decreasing a key cuts
//! the node loose from its parent, and a parent that loses a second child is
//! cut as well (cascading cut). The mark bit records that first loss.
//!
//! Nodes live in a per-heap [`NodeArena`]; links are arena keys rather than
//! pointers. Keys are compared only through the heap's [`KeyOrder`].

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use rustc_hash::FxHashMap;
use slotmap::SecondaryMap;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::order::{KeyOrder, MinSentinel, NaturalOrder};
use crate::rank::{self, checked_increment, saturating_decrement};
use crate::ring;
use crate::storage::{Node, NodeArena, NodeKey};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError, HeapResult};

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(1);

fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Handle to an element in a Fibonacci heap
///
/// Returned by [`FibHeap::insert`] and valid until that element is extracted
/// or deleted, including across unions: the merged heap accepts handles issued
/// by either input. Using a handle with an unrelated heap, or after its element
/// is gone, yields [`HeapError::InvalidHandle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FibHandle {
    heap: u64,
    node: NodeKey,
}

impl Handle for FibHandle {}

/// Where the nodes of an absorbed heap went: the heap id their handles must
/// be resolved against next, and the slot each live node moved to.
#[derive(Debug, Clone)]
struct Redirect {
    to: u64,
    moved: SecondaryMap<NodeKey, NodeKey>,
}

/// Fibonacci Heap
///
/// Generic over the key type `K`, the payload `T` and the ordering strategy
/// `C`. Every heap carries its own ordering and its own minimum sentinel, the
/// key that [`delete_node`](FibHeap::delete_node) forces onto a node to bring
/// it to the top before extracting it.
///
/// # Example
///
/// ```rust
/// use fibheap::FibHeap;
///
/// let mut heap = FibHeap::new();
/// let five = heap.insert(5, 'a');
/// heap.insert(3, 'b');
/// heap.replace_key(&five, 1).unwrap();
/// assert_eq!(heap.peek(), Some((&1, &'a')));
/// assert_eq!(heap.extract_min(), Some('a'));
/// assert_eq!(heap.extract_min(), Some('b'));
/// assert!(heap.is_empty());
/// ```
pub struct FibHeap<K, T, C = NaturalOrder> {
    nodes: NodeArena<K, T>,
    /// Entry into the root ring
    root: Option<NodeKey>,
    min: Option<NodeKey>,
    order: C,
    sentinel: K,
    id: u64,
    /// Heaps merged into this one, keyed by the id their handles carry
    redirects: FxHashMap<u64, Redirect>,
}

impl<K: Ord + MinSentinel, T> FibHeap<K, T, NaturalOrder> {
    /// Creates an empty min-heap ordered by `K`'s `Ord`, with
    /// [`MinSentinel::min_sentinel`] as the deletion sentinel.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder, K::min_sentinel())
    }

    /// Like [`new`](Self::new), with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_order_and_capacity(NaturalOrder, K::min_sentinel(), capacity)
    }
}

impl<K: Ord + MinSentinel, T> Default for FibHeap<K, T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, C> FibHeap<K, T, C> {
    /// Creates an empty heap ordered by `order`.
    ///
    /// `sentinel` must compare less than or equal to every key ever stored in
    /// the heap; [`delete_node`](Self::delete_node) relies on it.
    pub fn with_order(order: C, sentinel: K) -> Self {
        Self::from_parts(NodeArena::default(), order, sentinel)
    }

    /// Like [`with_order`](Self::with_order), with room for `capacity` nodes.
    pub fn with_order_and_capacity(order: C, sentinel: K, capacity: usize) -> Self {
        Self::from_parts(NodeArena::with_capacity(capacity), order, sentinel)
    }

    fn from_parts(nodes: NodeArena<K, T>, order: C, sentinel: K) -> Self {
        Self {
            nodes,
            root: None,
            min: None,
            order,
            sentinel,
            id: next_heap_id(),
            redirects: FxHashMap::default(),
        }
    }

    /// Returns true if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// The ordering strategy this heap was built with.
    pub fn order(&self) -> &C {
        &self.order
    }

    /// The key `delete_node` uses to force a node to the top.
    pub fn min_sentinel(&self) -> &K {
        &self.sentinel
    }

    /// Payload of the minimum element.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn min(&self) -> Option<&T> {
        self.min.map(|min| &self.nodes[min].item)
    }

    /// Key of the minimum element.
    pub fn min_key(&self) -> Option<&K> {
        self.min.map(|min| &self.nodes[min].key)
    }

    /// Key and payload of the minimum element.
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.min.map(|min| {
            let node = &self.nodes[min];
            (&node.key, &node.item)
        })
    }

    /// Whether `handle` still addresses an element of this heap.
    pub fn contains(&self, handle: &FibHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Key and payload of the element addressed by `handle`.
    pub fn get(&self, handle: &FibHandle) -> Option<(&K, &T)> {
        let node = self.nodes.get(self.resolve(handle).ok()?)?;
        Some((&node.key, &node.item))
    }

    /// Replaces the payload of an element, leaving its key and position
    /// unchanged. Returns the old payload.
    pub fn replace_data(&mut self, handle: &FibHandle, item: T) -> HeapResult<T> {
        let node = self.resolve(handle)?;
        let node = self.nodes.get_mut(node).ok_or(HeapError::InvalidHandle)?;
        Ok(mem::replace(&mut node.item, item))
    }

    /// Removes every element, leaving an empty heap that can be reused.
    ///
    /// Outstanding handles become invalid.
    pub fn clear(&mut self) {
        trace!(released = self.len(), "clearing heap");
        self.nodes.clear();
        self.redirects.clear();
        self.root = None;
        self.min = None;
    }

    /// Releases the heap and every element still in it.
    pub fn destroy(self) {
        drop(self)
    }

    fn handle(&self, node: NodeKey) -> FibHandle {
        FibHandle {
            heap: self.id,
            node,
        }
    }

    /// Maps a handle to its node, following union redirects until the
    /// handle's heap id is this heap's own.
    fn resolve(&self, handle: &FibHandle) -> HeapResult<NodeKey> {
        let (mut heap, mut node) = (handle.heap, Some(handle.node));
        while heap != self.id {
            let Some(redirect) = self.redirects.get(&heap) else {
                node = None;
                break;
            };
            node = node.and_then(|old| redirect.moved.get(old).copied());
            heap = redirect.to;
        }

        match node {
            Some(node) if self.nodes.contains(node) => Ok(node),
            _ => {
                debug!(?handle, heap = self.id, "rejected stale or foreign handle");
                Err(HeapError::InvalidHandle)
            }
        }
    }

    /// Splices a singleton node into the root ring.
    fn insert_root(&mut self, node: NodeKey) {
        match self.root {
            None => {
                ring::make_circular(&mut self.nodes, node);
                self.root = Some(node);
            }
            Some(root) => ring::insert_after(&mut self.nodes, root, node),
        }
    }

    fn remove_root(&mut self, node: NodeKey) {
        debug_assert!(self.nodes[node].links.parent.is_none());
        self.root = ring::remove(&mut self.nodes, node);
    }

    /// Makes `node` (a detached singleton) a child of `parent`.
    fn link(&mut self, node: NodeKey, parent: NodeKey) {
        match self.nodes[parent].links.child {
            None => self.nodes[parent].links.child = Some(node),
            Some(child) => ring::insert_before(&mut self.nodes, child, node),
        }
        let parent_node = &mut self.nodes[parent];
        parent_node.degree = checked_increment(parent_node.degree);

        let child = &mut self.nodes[node];
        child.links.parent = Some(parent);
        child.marked = false;
    }

    /// Moves `node` from `parent`'s child ring to the root ring.
    fn cut(&mut self, node: NodeKey, parent: NodeKey) {
        ring::remove(&mut self.nodes, node);
        let parent_node = &mut self.nodes[parent];
        parent_node.degree = saturating_decrement(parent_node.degree);
        self.insert_root(node);

        let node = &mut self.nodes[node];
        node.links.parent = None;
        node.marked = false;
    }

    /// Walks up from `node`, marking the first unmarked non-root ancestor and
    /// cutting every marked one on the way.
    fn cascading_cut(&mut self, mut node: NodeKey) {
        let mut cuts = 0usize;
        while let Some(parent) = self.nodes[node].links.parent {
            if !self.nodes[node].marked {
                self.nodes[node].marked = true;
                break;
            }
            self.cut(node, parent);
            cuts += 1;
            node = parent;
        }
        if cuts > 0 {
            trace!(cuts, "cascading cut");
        }
    }

    /// Detaches the minimum node, leaving `min` and the root ring to be
    /// rebuilt by the caller.
    fn unlink_min(&mut self, z: NodeKey) -> Node<K, T> {
        let first_child = self.nodes[z].links.child.take();
        if let Some(first) = first_child {
            let children: SmallVec<[NodeKey; 16]> =
                ring::iter(&self.nodes, Some(first)).collect();
            for child in children {
                let node = &mut self.nodes[child];
                node.links.parent = None;
                node.marked = false;
            }
            // z is a root, so the root ring is not empty
            if let Some(root) = self.root {
                ring::splice(&mut self.nodes, root, first);
            }
            self.nodes[z].degree = 0;
        }

        self.remove_root(z);
        // z was resolved from `min`, so its slot is live
        let Some(node) = self.nodes.free(z) else {
            unreachable!("minimum node missing from arena")
        };
        node
    }
}

impl<K, T, C: KeyOrder<K>> FibHeap<K, T, C> {
    #[inline]
    fn compare(&self, a: NodeKey, b: NodeKey) -> Ordering {
        self.order.compare(&self.nodes[a].key, &self.nodes[b].key)
    }

    /// Inserts `item` with priority `key` and returns a handle to it.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, key: K, item: T) -> FibHandle {
        let node = self.nodes.alloc(key, item);
        self.insert_root(node);

        match self.min {
            Some(min) if self.compare(node, min) != Ordering::Less => {}
            _ => self.min = Some(node),
        }

        self.handle(node)
    }

    /// Removes the minimum element and returns its payload.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Option<T> {
        self.pop().map(|(_, item)| item)
    }

    /// Removes the minimum element and returns its key and payload.
    pub fn pop(&mut self) -> Option<(K, T)> {
        let z = self.min?;
        let node = self.unlink_min(z);

        if self.is_empty() {
            debug_assert!(self.root.is_none());
            self.min = None;
            // no live node is left for an old handle to reach
            self.redirects.clear();
        } else {
            self.min = self.root;
            self.consolidate();
        }

        Some((node.key, node.item))
    }

    /// Links roots of equal degree until every root degree is unique, then
    /// rebuilds the root ring and finds the new minimum.
    fn consolidate(&mut self) {
        let mut buckets: SmallVec<[Option<NodeKey>; 64]> =
            smallvec![None; rank::max_degree(self.len()) + 1];
        let mut roots = 0usize;
        let mut links = 0usize;

        while let Some(w) = self.root {
            self.remove_root(w);
            roots += 1;

            let mut x = w;
            let mut d = usize::from(self.nodes[x].degree);
            loop {
                if d >= buckets.len() {
                    buckets.resize(d + 1, None);
                }
                let Some(mut y) = buckets[d].take() else {
                    break;
                };
                if self.compare(x, y) == Ordering::Greater {
                    mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                links += 1;
                d += 1;
            }
            buckets[d] = Some(x);
        }

        self.min = None;
        for x in buckets.into_iter().flatten() {
            self.insert_root(x);
            match self.min {
                Some(min) if self.compare(x, min) != Ordering::Less => {}
                _ => self.min = Some(x),
            }
        }

        trace!(roots, links, len = self.len(), "consolidated root ring");
    }

    /// Replaces the key and payload of an element, returning the old payload.
    ///
    /// Only decreases are supported in place: if `key` compares greater than
    /// the current key the call is rejected with [`HeapError::KeyIncreased`]
    /// and nothing changes. To raise a key, delete the element and insert it
    /// again.
    ///
    /// A node given a key equal to its parent's, or equal to the current
    /// minimum, is still cut and still becomes the minimum. That way the
    /// element just updated is the one the next extraction returns.
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn replace_key_data(&mut self, handle: &FibHandle, key: K, item: T) -> HeapResult<T> {
        let node = self.resolve(handle)?;
        self.check_decrease(node, &key)?;
        let old = mem::replace(&mut self.nodes[node].item, item);
        self.decrease(node, key);
        Ok(old)
    }

    /// Replaces the key of an element, returning the old key.
    ///
    /// Same rules as [`replace_key_data`](Self::replace_key_data).
    pub fn replace_key(&mut self, handle: &FibHandle, key: K) -> HeapResult<K> {
        let node = self.resolve(handle)?;
        self.check_decrease(node, &key)?;
        Ok(self.decrease(node, key))
    }

    fn check_decrease(&self, node: NodeKey, key: &K) -> HeapResult<()> {
        if self.order.compare(key, &self.nodes[node].key) == Ordering::Greater {
            debug!("rejected key increase");
            return Err(HeapError::KeyIncreased);
        }
        Ok(())
    }

    /// Stores a key that compares less than or equal to the node's current
    /// one and restores heap order. Returns the old key.
    fn decrease(&mut self, node: NodeKey, key: K) -> K {
        let unchanged = self.order.compare(&key, &self.nodes[node].key) == Ordering::Equal;
        let old = mem::replace(&mut self.nodes[node].key, key);
        if !unchanged {
            self.restore_order(node);
        }
        old
    }

    /// Cuts `node` from its parent if it no longer sorts after it, and makes
    /// it the minimum if it sorts at or before the current one.
    fn restore_order(&mut self, node: NodeKey) {
        if let Some(parent) = self.nodes[node].links.parent {
            if self.compare(node, parent) != Ordering::Greater {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
        }

        match self.min {
            Some(min) if self.compare(node, min) == Ordering::Greater => {}
            _ => self.min = Some(node),
        }
    }

    /// Merges two heaps into one, consuming both.
    ///
    /// The result keeps `self`'s ordering and sentinel. Handles issued by
    /// either heap stay valid on the result.
    ///
    /// # Time Complexity
    /// O(1) ring splice, after moving the smaller heap's nodes into the larger
    /// heap's arena in O(min(n, m)).
    pub fn union(mut self, other: Self) -> Self {
        self.absorb(other);
        self
    }

    /// Moves every element of `other` into this heap. In-place form of
    /// [`union`](Self::union).
    pub fn absorb(&mut self, mut other: Self) {
        if other.is_empty() {
            // every handle other issued is already stale
            return;
        }
        let swapped = self.len() < other.len();
        if swapped {
            // keep the larger arena in place; ordering and sentinel stay put
            mem::swap(&mut self.nodes, &mut other.nodes);
            mem::swap(&mut self.root, &mut other.root);
            mem::swap(&mut self.min, &mut other.min);
            mem::swap(&mut self.id, &mut other.id);
            mem::swap(&mut self.redirects, &mut other.redirects);
            if other.is_empty() {
                return;
            }
        }

        let mut moved = SecondaryMap::with_capacity(other.len());
        let mut adopted: Vec<NodeKey> = Vec::with_capacity(other.len());
        for (old, node) in other.nodes.drain() {
            let new = self.nodes.adopt(node);
            moved.insert(old, new);
            adopted.push(new);
        }

        let relink = |key: NodeKey| moved[key];
        for &node in &adopted {
            let links = &mut self.nodes[node].links;
            links.parent = links.parent.map(relink);
            links.child = links.child.map(relink);
            links.left = relink(links.left);
            links.right = relink(links.right);
        }

        let (Some(other_root), Some(other_min)) = (other.root, other.min) else {
            unreachable!("non-empty heap without a root ring")
        };
        let (other_root, other_min) = (moved[other_root], moved[other_min]);

        if let Some(root) = self.root {
            ring::splice(&mut self.nodes, root, other_root);
        }
        // on equal minimums the left input's node wins, wherever it now lives
        let other_wins = match self.min {
            None => true,
            Some(min) => match self.compare(other_min, min) {
                Ordering::Less => true,
                Ordering::Equal => swapped,
                Ordering::Greater => false,
            },
        };
        if other_wins {
            self.min = Some(other_min);
        }

        self.redirects.extend(other.redirects.drain());
        self.redirects.insert(
            other.id,
            Redirect {
                to: self.id,
                moved,
            },
        );

        trace!(
            relocated = adopted.len(),
            len = self.len(),
            redirects = self.redirects.len(),
            "absorbed heap"
        );
    }

    /// Removes and yields elements in key order. Elements not yet yielded when
    /// the iterator is dropped are removed as well.
    pub fn drain(&mut self) -> Drain<'_, K, T, C> {
        Drain { heap: self }
    }

    /// Walks every ring and checks the structural invariants: ring links are
    /// mutual, parent links match the ring a node sits in, degrees match child
    /// counts, children do not sort before their parent, roots are unmarked,
    /// every node is reachable exactly once and `min` is a smallest root.
    pub fn check_invariants(&self) -> HeapResult<()> {
        let fail = |what: &str| Err(HeapError::Corrupted(what.to_owned()));

        if self.root.is_none() != self.is_empty() || self.min.is_none() != self.is_empty() {
            return fail("root or min presence disagrees with element count");
        }

        let mut seen = 0usize;
        let mut stack: Vec<(NodeKey, Option<NodeKey>)> = match self.checked_ring(self.root) {
            Ok(roots) => roots.into_iter().map(|root| (root, None)).collect(),
            Err(what) => return fail(what),
        };

        if let Some(min) = self.min {
            if !stack.iter().any(|&(root, _)| root == min) {
                return fail("min is not in the root ring");
            }
            if stack.iter().any(|&(root, _)| self.compare(root, min) == Ordering::Less) {
                return fail("a root sorts before min");
            }
        }

        while let Some((key, parent)) = stack.pop() {
            seen += 1;
            if seen > self.len() {
                return fail("rings reach more nodes than the heap holds");
            }
            let Some(node) = self.nodes.get(key) else {
                return fail("link to a freed slot");
            };
            if node.links.parent != parent {
                return fail("parent link does not match the ring the node is in");
            }
            let (Some(right), Some(left)) =
                (self.nodes.get(node.links.right), self.nodes.get(node.links.left))
            else {
                return fail("link to a freed slot");
            };
            if right.links.left != key || left.links.right != key {
                return fail("ring links are not mutual");
            }
            match parent {
                None if node.marked => return fail("root is marked"),
                Some(parent) if self.compare(key, parent) == Ordering::Less => {
                    return fail("child sorts before its parent");
                }
                _ => {}
            }

            let children = match self.checked_ring(node.links.child) {
                Ok(children) => children,
                Err(what) => return fail(what),
            };
            if children.len() != usize::from(node.degree) {
                return fail("degree does not match child count");
            }
            stack.extend(children.into_iter().map(|child| (child, Some(key))));
        }

        if seen != self.len() {
            return fail("some nodes are unreachable from the root ring");
        }
        Ok(())
    }

    /// Members of the ring holding `start`, walked with checked lookups so a
    /// dangling or unterminated ring is reported rather than followed.
    fn checked_ring(&self, start: Option<NodeKey>) -> Result<Vec<NodeKey>, &'static str> {
        let mut members = Vec::new();
        let Some(start) = start else {
            return Ok(members);
        };
        let mut current = start;
        loop {
            let node = self.nodes.get(current).ok_or("link to a freed slot")?;
            members.push(current);
            if members.len() > self.len() {
                return Err("ring does not close");
            }
            current = node.links.right;
            if current == start {
                return Ok(members);
            }
        }
    }
}

impl<K: Clone, T, C: KeyOrder<K>> FibHeap<K, T, C> {
    /// Removes the element addressed by `handle` and returns its payload.
    ///
    /// The node's key is replaced by the heap's minimum sentinel, which
    /// brings it to the top, and the minimum is extracted.
    ///
    /// # Errors
    /// [`HeapError::SentinelNotMinimal`] if the sentinel compares greater than
    /// the node's key or the current minimum; the heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete_node(&mut self, handle: &FibHandle) -> HeapResult<T> {
        let node = self.resolve(handle)?;
        let below = |key: &K| self.order.compare(&self.sentinel, key) != Ordering::Greater;
        if !below(&self.nodes[node].key) || !self.min_key().map_or(true, below) {
            return Err(HeapError::SentinelNotMinimal);
        }

        self.nodes[node].key = self.sentinel.clone();
        // Even when the old key already equalled the sentinel the node must
        // be cut and made the minimum, so skip decrease()'s equal-key shortcut.
        self.restore_order(node);
        debug_assert_eq!(self.min, Some(node));

        let (_, item) = self.pop().ok_or(HeapError::InvalidHandle)?;
        Ok(item)
    }
}

/// Draining iterator returned by [`FibHeap::drain`].
pub struct Drain<'a, K, T, C> {
    heap: &'a mut FibHeap<K, T, C>,
}

impl<K, T, C: KeyOrder<K>> Iterator for Drain<'_, K, T, C> {
    type Item = (K, T);

    fn next(&mut self) -> Option<(K, T)> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<K, T, C: KeyOrder<K>> ExactSizeIterator for Drain<'_, K, T, C> {}

impl<K, T, C> Drop for Drain<'_, K, T, C> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl<K, T, C: KeyOrder<K>> Extend<(K, T)> for FibHeap<K, T, C> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, item) in iter {
            self.insert(key, item);
        }
    }
}

impl<K: fmt::Debug, T, C> fmt::Debug for FibHeap<K, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibHeap")
            .field("len", &self.len())
            .field("min_key", &self.min_key())
            .finish_non_exhaustive()
    }
}

impl<K, T, C: KeyOrder<K>> Heap<K, T> for FibHeap<K, T, C> {
    fn is_empty(&self) -> bool {
        FibHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibHeap::len(self)
    }

    fn push(&mut self, key: K, item: T) {
        self.insert(key, item);
    }

    fn peek(&self) -> Option<(&K, &T)> {
        FibHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(K, T)> {
        FibHeap::pop(self)
    }

    fn merge(&mut self, other: Self) {
        self.absorb(other);
    }
}

impl<K, T, C: KeyOrder<K>> DecreaseKeyHeap<K, T> for FibHeap<K, T, C> {
    type Handle = FibHandle;

    fn push_with_handle(&mut self, key: K, item: T) -> FibHandle {
        self.insert(key, item)
    }

    fn decrease_key(&mut self, handle: &FibHandle, new_key: K) -> HeapResult<()> {
        self.replace_key(handle, new_key).map(|_| ())
    }
}
