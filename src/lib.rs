//! arena-btree - An in-memory B-tree index over integer keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                              BTree                              │
//! │      insert / lookup / count / display / verify / stats         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Split / Promote (index/btree/tree.rs)          │   │
//! │  │   leaf full → split → separator into parent → ... root   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                NodePool (append-only arena)              │   │
//! │  │        [Node0] [Node1] [Node2] ...   NodeId = index      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Key, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use arena_btree::BTree;
//!
//! let mut tree = BTree::new();
//! for k in [10, 20, 30, 40, 50, 25] {
//!     tree.insert(k);
//! }
//!
//! assert!(tree.lookup(25));
//! assert!(!tree.lookup(35));
//! assert_eq!(tree.count(), 6);
//! tree.verify().unwrap();
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::NODE_CAPACITY;
pub use common::{Error, Key, NodeId, Result};

pub use index::btree::{BTree, BTreeStats, Node, NodePool};
