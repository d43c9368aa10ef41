//! Circular doubly-linked rings over arena keys.
//!
//! Every node carries a [`Links`] record. Siblings form a circular ring:
//! a single node points to itself, there is no head or tail, and any member
//! can be used as the entry point. Two whole rings splice together in O(1).
//!
//! The operations are generic over any store indexable by [`NodeKey`], so the
//! same code drives the heap's arena and the plain `SlotMap`s used in tests.

use std::ops::IndexMut;

use crate::storage::NodeKey;

/// Structural links of a heap node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) left: NodeKey,
    pub(crate) right: NodeKey,
}

impl Links {
    /// Links for a parentless, childless node forming its own ring.
    pub(crate) fn singleton(key: NodeKey) -> Self {
        Self {
            parent: None,
            child: None,
            left: key,
            right: key,
        }
    }
}

/// Access to the [`Links`] embedded in a node.
pub(crate) trait Linked {
    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
}

/// Turn `node` into a one-element ring.
pub(crate) fn make_circular<S, N>(store: &mut S, node: NodeKey)
where
    S: IndexMut<NodeKey, Output = N>,
    N: Linked,
{
    let links = store[node].links_mut();
    links.left = node;
    links.right = node;
}

/// Splice `new` into the ring holding `at`, directly to its right.
///
/// `new` must be a singleton ring.
pub(crate) fn insert_after<S, N>(store: &mut S, at: NodeKey, new: NodeKey)
where
    S: IndexMut<NodeKey, Output = N>,
    N: Linked,
{
    let next = store[at].links().right;
    {
        let links = store[new].links_mut();
        links.left = at;
        links.right = next;
    }
    store[next].links_mut().left = new;
    store[at].links_mut().right = new;
}

/// Splice `new` into the ring holding `at`, directly to its left.
pub(crate) fn insert_before<S, N>(store: &mut S, at: NodeKey, new: NodeKey)
where
    S: IndexMut<NodeKey, Output = N>,
    N: Linked,
{
    let prev = store[at].links().left;
    insert_after(store, prev, new);
}

/// Remove `node` from whichever ring holds it.
///
/// Returns a remaining member of the ring, or `None` if `node` was alone.
/// If `node` was its parent's designated child, the parent's child link is
/// repointed to the returned member (or cleared). `node` comes back as a
/// parentless singleton.
pub(crate) fn remove<S, N>(store: &mut S, node: NodeKey) -> Option<NodeKey>
where
    S: IndexMut<NodeKey, Output = N>,
    N: Linked,
{
    let Links {
        parent,
        left,
        right,
        ..
    } = *store[node].links();
    let rest = (left != node).then_some(left);

    if let Some(parent) = parent {
        let parent_links = store[parent].links_mut();
        if parent_links.child == Some(node) {
            parent_links.child = rest;
        }
    }

    store[right].links_mut().left = left;
    store[left].links_mut().right = right;

    let links = store[node].links_mut();
    links.parent = None;
    links.left = node;
    links.right = node;

    rest
}

/// Join the ring holding `a` with the ring holding `b` in O(1).
///
/// The rings must be distinct.
pub(crate) fn splice<S, N>(store: &mut S, a: NodeKey, b: NodeKey)
where
    S: IndexMut<NodeKey, Output = N>,
    N: Linked,
{
    let a_left = store[a].links().left;
    let b_left = store[b].links().left;

    store[a_left].links_mut().right = b;
    store[b_left].links_mut().right = a;
    store[a].links_mut().left = b_left;
    store[b].links_mut().left = a_left;
}

/// Iterator over the members of a ring, starting at a given node and
/// following `right` links until it wraps around.
pub(crate) struct RingIter<'a, S: ?Sized> {
    store: &'a S,
    start: NodeKey,
    next: Option<NodeKey>,
}

impl<'a, S, N> Iterator for RingIter<'a, S>
where
    S: std::ops::Index<NodeKey, Output = N> + ?Sized,
    N: Linked + 'a,
{
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        let right = self.store[current].links().right;
        self.next = (right != self.start).then_some(right);
        Some(current)
    }
}

/// Iterate over the ring holding `start`, or over nothing if `start` is `None`.
pub(crate) fn iter<S, N>(store: &S, start: Option<NodeKey>) -> RingIter<'_, S>
where
    S: std::ops::Index<NodeKey, Output = N> + ?Sized,
    N: Linked,
{
    RingIter {
        store,
        start: start.unwrap_or_default(),
        next: start,
    }
}
