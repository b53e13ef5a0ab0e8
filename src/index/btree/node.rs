//! Fixed-capacity B-tree node.
//!
//! # Layout
//! ```text
//! keys:      [ k0 | k1 | k2 | -- | -- ]        size = 3, NODE_CAPACITY = 5
//! children:  [ c0 | c1 | c2 | c3 | -- | -- ]   internal nodes only
//! ```
//! Occupied key slots are `keys[..size]`; every slot past `size` holds `None`.
//! An internal node with `size` keys has exactly `size + 1` children.
//! Leaves carry no child array at all.

use crate::common::config::{MAX_CHILDREN, NODE_CAPACITY, SPLIT_INDEX};
use crate::common::{Key, NodeId};

/// A node in the B-tree.
///
/// Nodes are created through the [`NodePool`](super::NodePool) and never
/// destroyed. The kind (leaf or internal) is fixed at allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Key slots in ascending order, `None` past `size`.
    keys: [Option<Key>; NODE_CAPACITY],

    /// Number of occupied key slots.
    size: usize,

    /// Child slots for internal nodes, `None` for leaves.
    children: Option<[Option<NodeId>; MAX_CHILDREN]>,
}

impl Node {
    /// Create an empty leaf.
    pub fn new_leaf() -> Self {
        Self {
            keys: [None; NODE_CAPACITY],
            size: 0,
            children: None,
        }
    }

    /// Create an empty internal node with every child slot unused.
    pub fn new_internal() -> Self {
        Self {
            keys: [None; NODE_CAPACITY],
            size: 0,
            children: Some([None; MAX_CHILDREN]),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of occupied key slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// A full node must split before it can take another key.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == NODE_CAPACITY
    }

    /// Occupied keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys[..self.size].iter().flatten().copied()
    }

    /// Occupied children, left to right. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        let occupied = if self.is_leaf() { 0 } else { self.size + 1 };
        self.children
            .iter()
            .flat_map(move |slots| slots[..occupied].iter().flatten().copied())
    }

    /// Child at `index`, or `None` for leaves and unused slots.
    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children
            .as_ref()
            .and_then(|slots| slots.get(index).copied().flatten())
    }

    /// All key slots, including unused ones.
    pub fn key_slots(&self) -> &[Option<Key>] {
        &self.keys
    }

    /// All child slots, including unused ones. `None` for leaves.
    pub fn child_slots(&self) -> Option<&[Option<NodeId>]> {
        self.children.as_ref().map(|slots| &slots[..])
    }

    pub fn contains(&self, key: Key) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Index of the child whose range covers `key`.
    ///
    /// This is the least `i` with `key < keys[i]`, or `len()` when `key` is
    /// not below any stored key.
    pub fn child_index_for(&self, key: Key) -> usize {
        self.keys().position(|k| key < k).unwrap_or(self.size)
    }

    /// Attach the leftmost child of an empty internal node.
    ///
    /// # Panics
    /// Panics if the node is a leaf or already has keys.
    pub(crate) fn attach_first_child(&mut self, child: NodeId) {
        assert!(self.size == 0, "first child attached to a non-empty node");
        match self.children.as_mut() {
            Some(slots) => slots[0] = Some(child),
            None => panic!("cannot attach a child to a leaf"),
        }
    }

    /// Insert `key` at its sorted position.
    ///
    /// When `child` is given it lands immediately to the right of the new
    /// key, shifting the larger keys and children one slot to the right.
    ///
    /// # Panics
    /// Panics if the node is full, or if a child is given to a leaf.
    pub(crate) fn insert_entry(&mut self, key: Key, child: Option<NodeId>) {
        assert!(!self.is_full(), "insert into a full node");

        let index = self.keys().position(|k| k > key).unwrap_or(self.size);

        // Slot `size` is unused; rotating brings it to `index`.
        self.keys[index..=self.size].rotate_right(1);
        self.keys[index] = Some(key);

        if let Some(child) = child {
            let Some(slots) = self.children.as_mut() else {
                panic!("cannot insert a child into a leaf");
            };
            slots[index + 1..=self.size + 1].rotate_right(1);
            slots[index + 1] = Some(child);
        }

        self.size += 1;
    }

    /// Split a full node and return `(separator, sibling)`.
    ///
    /// The node keeps its first `SPLIT_INDEX` keys. The separator is the
    /// smallest key of the sibling's subtree.
    ///
    /// - Leaf: the sibling takes `keys[SPLIT_INDEX..]`, so the separator is
    ///   also the sibling's first key.
    /// - Internal: `keys[SPLIT_INDEX]` moves up as the separator and leaves
    ///   this level. The sibling takes the keys after it and children
    ///   `[SPLIT_INDEX + 1..]`.
    ///
    /// # Panics
    /// Panics if the node is not full.
    pub(crate) fn split(&mut self) -> (Key, Node) {
        assert!(self.is_full(), "split of a node with {} keys", self.size);

        let Some(separator) = self.keys[SPLIT_INDEX] else {
            unreachable!("full node has an empty key slot at {SPLIT_INDEX}");
        };

        let sibling = match self.children.as_mut() {
            None => {
                let mut sibling = Node::new_leaf();
                move_slots(&mut self.keys[SPLIT_INDEX..], &mut sibling.keys);
                sibling.size = NODE_CAPACITY - SPLIT_INDEX;
                sibling
            }
            Some(children) => {
                let mut sibling = Node::new_internal();
                self.keys[SPLIT_INDEX] = None;
                move_slots(&mut self.keys[SPLIT_INDEX + 1..], &mut sibling.keys);
                if let Some(sibling_children) = sibling.children.as_mut() {
                    move_slots(&mut children[SPLIT_INDEX + 1..], sibling_children);
                }
                sibling.size = NODE_CAPACITY - SPLIT_INDEX - 1;
                sibling
            }
        };

        self.size = SPLIT_INDEX;
        (separator, sibling)
    }
}

/// Move every slot of `src` into the front of `dst`, leaving `None` behind.
fn move_slots<T>(src: &mut [Option<T>], dst: &mut [Option<T>]) {
    for (to, from) in dst.iter_mut().zip(src.iter_mut()) {
        *to = from.take();
    }
}
