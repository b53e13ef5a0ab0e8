//! The B-tree: insert with split/promote, lookup, and bookkeeping.

use tracing::{debug, trace};

use crate::common::{Key, NodeId};
use crate::index::btree::{BTreeStats, NodePool};

/// What a recursive insert reports to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertOutcome {
    /// Key stored; nothing left to do above this level.
    Done,

    /// Key already present; the tree is unchanged.
    Duplicate,

    /// The subtree split. The caller must take the promotion.
    Split(Promotion),
}

/// A new sibling and the separator that routes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Promotion {
    /// Smallest key in the sibling's subtree.
    pub separator: Key,

    /// Right half of the split node.
    pub sibling: NodeId,
}

/// An in-memory B-tree over distinct integer keys.
///
/// # Architecture
/// ```text
///                  root (internal)
///                 ┌──────────────┐
///                 │  [ 3 ]       │
///                 └──┬────────┬──┘
///                    │        │
///            ┌───────▼──┐  ┌──▼─────────┐
///            │ [1, 2]   │  │[3, 4, 5, 6]│   leaves
///            └──────────┘  └────────────┘
/// ```
/// Every node lives in a [`NodePool`] and is addressed by [`NodeId`].
/// Separators in internal nodes are copies of the smallest key in the
/// subtree to their right; the stored key set is the union of the leaves.
///
/// A fresh tree is an internal root with a single empty leaf child. The
/// root only ever changes when it splits, and then the tree grows by
/// exactly one level.
///
/// # Usage
/// ```
/// use arena_btree::BTree;
///
/// let mut tree = BTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(10); // duplicate, ignored
///
/// assert!(tree.lookup(20));
/// assert!(!tree.lookup(15));
/// assert_eq!(tree.count(), 2);
/// ```
#[derive(Debug)]
pub struct BTree {
    /// Owns every node.
    pub(super) pool: NodePool,

    /// Current root.
    pub(super) root: NodeId,

    /// Number of distinct keys stored.
    pub(super) count: usize,

    /// Insert path counters.
    pub(super) stats: BTreeStats,
}

impl BTree {
    /// Create an empty tree: an internal root over one empty leaf.
    pub fn new() -> Self {
        let mut pool = NodePool::new();
        let root = pool.allocate_internal();
        let leaf = pool.allocate_leaf();
        pool.get_mut(root).attach_first_child(leaf);

        Self {
            pool,
            root,
            count: 0,
            stats: BTreeStats::new(),
        }
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Insert `key` if it is not already stored.
    ///
    /// Inserting a key that is present has no effect on the key set or on
    /// [`count`](Self::count). Any splitting is finished before this returns.
    pub fn insert(&mut self, key: Key) {
        match self.insert_at(key, self.root) {
            InsertOutcome::Duplicate => {
                self.stats.duplicates += 1;
                trace!(target: "arena_btree::insert", key, "duplicate rejected");
                return;
            }
            InsertOutcome::Done => {}
            InsertOutcome::Split(promotion) => self.grow_root(promotion),
        }

        self.count += 1;
        self.stats.inserts += 1;
        trace!(target: "arena_btree::insert", key, count = self.count, "key stored");
    }

    /// Whether `key` is stored.
    pub fn lookup(&self, key: Key) -> bool {
        let mut current = Some(self.root);

        while let Some(id) = current {
            let node = self.pool.get(id);
            if node.is_leaf() {
                return node.contains(key);
            }
            current = node.child(node.child_index_for(key));
        }

        false
    }

    /// Number of distinct keys inserted so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Handle of the current root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Read-only access to the node arena.
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    /// Number of nodes allocated. Never decreases.
    pub fn node_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of levels, root and leaves included.
    ///
    /// A fresh tree has height 2.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;

        while let Some(child) = self.pool.get(current).child(0) {
            height += 1;
            current = child;
        }

        height
    }

    /// Copy of the insert path counters.
    pub fn stats(&self) -> BTreeStats {
        self.stats
    }

    /// Log a statistics snapshot at info level.
    pub fn emit_tracing(&self) {
        let stats = self.stats;
        tracing::info!(
            target: "arena_btree::stats",
            count = self.count,
            height = self.height(),
            nodes = self.node_count(),
            inserts = stats.inserts,
            duplicates = stats.duplicates,
            leaf_splits = stats.leaf_splits,
            internal_splits = stats.internal_splits,
            root_promotions = stats.root_promotions,
            "btree stats snapshot"
        );
    }

    // ========================================================================
    // Internal: insert / split / promote
    // ========================================================================

    /// Insert into the subtree rooted at `id`.
    fn insert_at(&mut self, key: Key, id: NodeId) -> InsertOutcome {
        let node = self.pool.get(id);
        if node.is_leaf() {
            return self.insert_into_leaf(key, id);
        }

        let index = node.child_index_for(key);
        let Some(child) = node.child(index) else {
            unreachable!("{id} has {} keys but no child at slot {index}", node.len());
        };

        match self.insert_at(key, child) {
            InsertOutcome::Split(promotion) => self.absorb(id, promotion),
            outcome => outcome,
        }
    }

    fn insert_into_leaf(&mut self, key: Key, id: NodeId) -> InsertOutcome {
        let leaf = self.pool.get_mut(id);
        if leaf.contains(key) {
            return InsertOutcome::Duplicate;
        }

        if !leaf.is_full() {
            leaf.insert_entry(key, None);
            return InsertOutcome::Done;
        }

        let promotion = self.split(id);
        let target = if key < promotion.separator {
            id
        } else {
            promotion.sibling
        };
        self.pool.get_mut(target).insert_entry(key, None);

        InsertOutcome::Split(promotion)
    }

    /// Take a child's promotion into internal node `id`, splitting it too
    /// if it is full.
    fn absorb(&mut self, id: NodeId, child: Promotion) -> InsertOutcome {
        if !self.pool.get(id).is_full() {
            self.pool
                .get_mut(id)
                .insert_entry(child.separator, Some(child.sibling));
            return InsertOutcome::Done;
        }

        let promotion = self.split(id);

        // The extra child goes to whichever half covers its separator.
        let target = if child.separator < promotion.separator {
            id
        } else {
            promotion.sibling
        };
        self.pool
            .get_mut(target)
            .insert_entry(child.separator, Some(child.sibling));

        InsertOutcome::Split(promotion)
    }

    /// Split full node `id` into itself and a newly allocated sibling.
    fn split(&mut self, id: NodeId) -> Promotion {
        let node = self.pool.get_mut(id);
        let is_leaf = node.is_leaf();
        let (separator, sibling_node) = node.split();
        let sibling = self.pool.push(sibling_node);

        if is_leaf {
            self.stats.leaf_splits += 1;
        } else {
            self.stats.internal_splits += 1;
        }

        debug!(
            target: "arena_btree::split",
            node = %id,
            sibling = %sibling,
            separator,
            leaf = is_leaf,
            "split node"
        );

        Promotion { separator, sibling }
    }

    /// The root split: put a new root above the old root and its sibling.
    fn grow_root(&mut self, promotion: Promotion) {
        let old_root = self.root;
        let new_root = self.pool.allocate_internal();

        let node = self.pool.get_mut(new_root);
        node.attach_first_child(old_root);
        node.insert_entry(promotion.separator, Some(promotion.sibling));

        self.root = new_root;
        self.stats.root_promotions += 1;

        debug!(
            target: "arena_btree::split",
            old_root = %old_root,
            new_root = %new_root,
            separator = promotion.separator,
            height = self.height(),
            "root promoted"
        );
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(keys: &[Key]) -> BTree {
        let mut tree = BTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    fn keys_of(tree: &BTree, id: NodeId) -> Vec<Key> {
        tree.pool.get(id).keys().collect()
    }

    #[test]
    fn test_new_tree_shape() {
        let tree = BTree::new();

        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.height(), 2);
        assert!(tree.is_empty());

        let root = tree.pool.get(tree.root);
        assert!(!root.is_leaf());
        assert!(root.is_empty());
        let leaf = root.child(0).unwrap();
        assert!(tree.pool.get(leaf).is_leaf());
    }

    #[test]
    fn test_lookup_empty_tree() {
        let tree = BTree::new();
        assert!(!tree.lookup(0));
        assert!(!tree.lookup(Key::MIN));
        assert!(!tree.lookup(Key::MAX));
    }

    #[test]
    fn test_fill_leaf_without_split() {
        let tree = tree_with(&[1, 2, 3, 4, 5]);

        let leaf = tree.pool.get(tree.root).child(0).unwrap();
        assert_eq!(keys_of(&tree, leaf), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.stats().splits(), 0);
    }

    #[test]
    fn test_leaf_split_promotes_into_root() {
        let tree = tree_with(&[1, 2, 3, 4, 5, 6]);

        let root = tree.pool.get(tree.root);
        assert_eq!(root.keys().collect::<Vec<_>>(), vec![3]);

        let left = root.child(0).unwrap();
        let right = root.child(1).unwrap();
        assert_eq!(keys_of(&tree, left), vec![1, 2]);
        assert_eq!(keys_of(&tree, right), vec![3, 4, 5, 6]);

        // Root absorbed the separator, no new level
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.stats().root_promotions, 0);
    }

    #[test]
    fn test_split_places_small_key_in_original() {
        let tree = tree_with(&[10, 20, 30, 40, 50, 15]);

        let root = tree.pool.get(tree.root);
        assert_eq!(root.keys().collect::<Vec<_>>(), vec![30]);
        assert_eq!(keys_of(&tree, root.child(0).unwrap()), vec![10, 15, 20]);
        assert_eq!(keys_of(&tree, root.child(1).unwrap()), vec![30, 40, 50]);
    }

    #[test]
    fn test_root_split_grows_tree() {
        // Each leaf split feeds one separator to the root; the sixth
        // separator overflows it.
        let keys: Vec<Key> = (1..=40).collect();
        let tree = tree_with(&keys);

        assert!(tree.stats().root_promotions >= 1);
        assert_eq!(tree.height(), 3);
        assert!(keys.iter().all(|&k| tree.lookup(k)));
        assert!(tree.verify().is_ok());
    }

    #[test]
    fn test_internal_split_keeps_child_counts() {
        let keys: Vec<Key> = (0..200).map(|i| (i * 37) % 211).collect();
        let tree = tree_with(&keys);

        assert!(tree.stats().internal_splits > 0);
        for id in (0..tree.node_count()).map(NodeId::new) {
            let node = tree.pool.get(id);
            if !node.is_leaf() {
                assert_eq!(node.children().count(), node.len() + 1);
            }
        }
        assert!(tree.verify().is_ok());
    }

    #[test]
    fn test_duplicate_does_not_count() {
        let mut tree = tree_with(&[7]);
        tree.insert(7);

        assert_eq!(tree.count(), 1);
        assert_eq!(tree.stats().duplicates, 1);
        assert!(tree.lookup(7));
    }

    #[test]
    fn test_duplicate_of_separator() {
        let mut tree = tree_with(&[1, 2, 3, 4, 5, 6]);
        let nodes = tree.node_count();

        // 3 is both a separator and a leaf key
        tree.insert(3);

        assert_eq!(tree.count(), 6);
        assert_eq!(tree.node_count(), nodes);
    }

    #[test]
    fn test_count_through_root_promotion() {
        let keys: Vec<Key> = (1..=100).rev().collect();
        let tree = tree_with(&keys);

        assert!(tree.stats().root_promotions > 0);
        assert_eq!(tree.count(), 100);
        assert_eq!(tree.stats().inserts, 100);
    }

    #[test]
    fn test_negative_and_extreme_keys() {
        let tree = tree_with(&[Key::MIN, -1, 0, 1, Key::MAX, -50, 50]);

        for k in [Key::MIN, -50, -1, 0, 1, 50, Key::MAX] {
            assert!(tree.lookup(k), "missing {}", k);
        }
        assert!(!tree.lookup(2));
        assert_eq!(tree.count(), 7);
    }
}
