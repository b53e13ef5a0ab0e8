//! B-tree index over distinct integer keys.
//!
//! # Components
//! - [`Node`] - Fixed-capacity node with `None` marking unused slots
//! - [`NodePool`] - Append-only arena handing out stable [`NodeId`]s
//! - [`BTree`] - Insert with split/promote, lookup, count, display
//! - [`BTreeStats`] - Insert path counters
//!
//! [`NodeId`]: crate::common::NodeId

mod display;
mod node;
mod pool;
mod stats;
mod tree;
mod verify;

pub use node::Node;
pub use pool::NodePool;
pub use stats::BTreeStats;
pub use tree::BTree;
