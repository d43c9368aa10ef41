//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`]: contiguous storage addressed by generational
//! keys. Ring links are plain [`NodeKey`]s, a parent link is a non-owning
//! back-reference, and removing a node returns its slot to the map's free list.
//! Because keys carry a generation, a key whose node has been removed no
//! longer resolves, which is what makes stale handles detectable.

use std::ops::{Index, IndexMut};

use slotmap::{new_key_type, SlotMap};

use crate::rank::Rank;
use crate::ring::{Linked, Links};

new_key_type! {
    /// Key of a node slot in a heap's arena
    pub struct NodeKey;
}

/// A heap node: key, payload, ring links, degree and mark bit.
#[derive(Debug)]
pub(crate) struct Node<K, T> {
    pub(crate) key: K,
    pub(crate) item: T,
    pub(crate) links: Links,
    pub(crate) degree: Rank,
    /// Lost a child since it last became a child. Only meaningful while the
    /// node has a parent.
    pub(crate) marked: bool,
}

impl<K, T> Linked for Node<K, T> {
    #[inline]
    fn links(&self) -> &Links {
        &self.links
    }

    #[inline]
    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

/// Slot arena owning every node of one heap.
#[derive(Debug)]
pub(crate) struct NodeArena<K, T> {
    nodes: SlotMap<NodeKey, Node<K, T>>,
}

impl<K, T> Default for NodeArena<K, T> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<K, T> NodeArena<K, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocate a parentless, childless node that forms its own ring.
    pub(crate) fn alloc(&mut self, key: K, item: T) -> NodeKey {
        self.nodes.insert_with_key(|slot| Node {
            key,
            item,
            links: Links::singleton(slot),
            degree: 0,
            marked: false,
        })
    }

    /// Release a node's slot. The caller must have unlinked it already.
    pub(crate) fn free(&mut self, slot: NodeKey) -> Option<Node<K, T>> {
        self.nodes.remove(slot)
    }

    #[inline]
    pub(crate) fn get(&self, slot: NodeKey) -> Option<&Node<K, T>> {
        self.nodes.get(slot)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: NodeKey) -> Option<&mut Node<K, T>> {
        self.nodes.get_mut(slot)
    }

    #[inline]
    pub(crate) fn contains(&self, slot: NodeKey) -> bool {
        self.nodes.contains_key(slot)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Remove every node, yielding each with the slot it occupied.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (NodeKey, Node<K, T>)> + '_ {
        self.nodes.drain()
    }

    /// Take a node that was just drained from another arena, keeping its
    /// links untouched. The caller rewrites them afterwards.
    pub(crate) fn adopt(&mut self, node: Node<K, T>) -> NodeKey {
        self.nodes.insert(node)
    }
}

impl<K, T> Index<NodeKey> for NodeArena<K, T> {
    type Output = Node<K, T>;

    #[inline]
    fn index(&self, slot: NodeKey) -> &Node<K, T> {
        &self.nodes[slot]
    }
}

impl<K, T> IndexMut<NodeKey> for NodeArena<K, T> {
    #[inline]
    fn index_mut(&mut self, slot: NodeKey) -> &mut Node<K, T> {
        &mut self.nodes[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_forms_singleton() {
        let mut arena: NodeArena<i32, &str> = NodeArena::default();
        let slot = arena.alloc(42, "a");
        let node = &arena[slot];
        assert_eq!(node.key, 42);
        assert_eq!(node.item, "a");
        assert_eq!(node.links, Links::singleton(slot));
        assert_eq!(node.degree, 0);
        assert!(!node.marked);
    }

    #[test]
    fn test_free_invalidates_slot() {
        let mut arena: NodeArena<i32, ()> = NodeArena::default();
        let slot = arena.alloc(1, ());
        assert!(arena.contains(slot));
        assert_eq!(arena.len(), 1);

        let node = arena.free(slot).unwrap();
        assert_eq!(node.key, 1);
        assert!(!arena.contains(slot));
        assert!(arena.get(slot).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_reused_slot_does_not_resolve_old_key() {
        let mut arena: NodeArena<i32, ()> = NodeArena::default();
        let old = arena.alloc(1, ());
        arena.free(old);
        let new = arena.alloc(2, ());
        assert_ne!(old, new);
        assert!(arena.get(old).is_none());
        assert_eq!(arena[new].key, 2);
    }

    #[test]
    fn test_drain_and_adopt() {
        let mut from: NodeArena<i32, char> = NodeArena::default();
        from.alloc(1, 'a');
        from.alloc(2, 'b');

        let mut into: NodeArena<i32, char> = NodeArena::with_capacity(4);
        into.alloc(0, 'z');
        let moved: Vec<_> = from.drain().map(|(_, node)| node).collect();
        for node in moved {
            into.adopt(node);
        }
        assert!(from.is_empty());
        assert_eq!(into.len(), 3);
    }
}
