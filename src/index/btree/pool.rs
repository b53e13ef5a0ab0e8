//! Append-only node arena.

use crate::common::{Error, NodeId, Result};
use crate::index::btree::Node;

/// Owns every node of a tree and hands out stable [`NodeId`] handles.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────┐
/// │                   NodePool                    │
/// │   nodes: Vec<Node>                            │
/// │   [Node0] [Node1] [Node2] ... [NodeN]  ◀─ push │
/// └───────────────────────────────────────────────┘
/// ```
///
/// There is no delete, so nodes are never moved or freed and a handle is
/// just the node's index. Growth of the backing `Vec` does not invalidate
/// handles.
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<Node>,
}

impl NodePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a new empty leaf.
    pub fn allocate_leaf(&mut self) -> NodeId {
        self.push(Node::new_leaf())
    }

    /// Append a new empty internal node.
    pub fn allocate_internal(&mut self) -> NodeId {
        self.push(Node::new_internal())
    }

    /// Append an already populated node, e.g. the sibling produced by a split.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Dereference a handle.
    ///
    /// # Panics
    /// Panics if the handle was not issued by this pool. That is a bug in
    /// the caller, not a recoverable condition.
    pub fn get(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.index()) {
            Some(node) => node,
            None => panic!("{} is not in a pool of {} nodes", id, self.nodes.len()),
        }
    }

    /// Dereference a handle for mutation.
    ///
    /// # Panics
    /// Same as [`get`](Self::get).
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.nodes.len();
        match self.nodes.get_mut(id.index()) {
            Some(node) => node,
            None => panic!("{} is not in a pool of {} nodes", id, len),
        }
    }

    /// Checked dereference.
    ///
    /// # Errors
    /// - `Error::InvalidNodeId` if the handle was not issued by this pool
    pub fn try_get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.index()).ok_or(Error::InvalidNodeId(id))
    }

    /// Number of nodes ever allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_returns_sequential_handles() {
        let mut pool = NodePool::new();
        assert!(pool.is_empty());

        let a = pool.allocate_internal();
        let b = pool.allocate_leaf();

        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(pool.len(), 2);
        assert!(!pool.get(a).is_leaf());
        assert!(pool.get(b).is_leaf());
    }

    #[test]
    fn test_handles_survive_growth() {
        let mut pool = NodePool::new();
        let first = pool.allocate_leaf();
        pool.get_mut(first).insert_entry(7, None);

        // Force several reallocations of the backing Vec
        for _ in 0..1000 {
            pool.allocate_leaf();
        }

        assert_eq!(pool.get(first).keys().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_try_get_unknown_handle() {
        let mut pool = NodePool::new();
        pool.allocate_leaf();

        assert!(pool.try_get(NodeId::new(0)).is_ok());
        match pool.try_get(NodeId::new(5)) {
            Err(Error::InvalidNodeId(id)) => assert_eq!(id, NodeId::new(5)),
            other => panic!("Expected InvalidNodeId, got {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "is not in a pool")]
    fn test_get_unknown_handle_panics() {
        let pool = NodePool::new();
        pool.get(NodeId::new(0));
    }
}
