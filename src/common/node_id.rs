//! Node handle type.

use std::fmt;

/// Identifies a node in the [`NodePool`](crate::index::btree::NodePool).
///
/// Handles are plain indices into the pool's `Vec<Node>`. The pool only
/// ever appends, so a handle stays valid for the lifetime of the tree.
/// "No node" is expressed as `Option<NodeId>::None`, never as a magic index.
///
/// # Example
/// ```
/// use arena_btree::NodeId;
///
/// let id = NodeId::new(5);
/// assert_eq!(id.index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the pool.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
