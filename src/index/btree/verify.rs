//! Structural verification.
//!
//! Walks the whole tree and checks the invariants every completed insert
//! must leave behind. Used by tests and available to callers that want
//! to assert a tree is sound.

use crate::common::config::NODE_CAPACITY;
use crate::common::{Error, Key, NodeId, Result};
use crate::index::btree::BTree;

impl BTree {
    /// Check every structural invariant of the tree.
    ///
    /// - Occupied key slots are filled, unused ones are empty
    /// - Keys within a node are strictly increasing
    /// - Every key lies in the range its parent routes to it
    /// - Internal nodes have exactly one more child than keys
    /// - All leaves are at the same depth
    /// - Stored keys are distinct and match [`count`](Self::count)
    ///
    /// # Errors
    /// - `Error::InvariantViolation` naming the first offending node
    /// - `Error::InvalidNodeId` if a child slot points outside the pool
    pub fn verify(&self) -> Result<()> {
        let mut leaf_depth = None;
        self.verify_node(self.root, None, None, 0, &mut leaf_depth)?;

        let keys = self.in_order_keys();
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(violation(self.root, "stored keys are not strictly increasing"));
        }
        if keys.len() != self.count {
            return Err(violation(
                self.root,
                format!("count is {} but {} keys are stored", self.count, keys.len()),
            ));
        }

        Ok(())
    }

    /// Stored keys in ascending order, read left to right off the leaves.
    pub(crate) fn in_order_keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.count);
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            let node = self.pool.get(id);
            if node.is_leaf() {
                keys.extend(node.keys());
            } else {
                // Rightmost pushed first so the leftmost child pops first
                stack.extend(node.children().collect::<Vec<_>>().into_iter().rev());
            }
        }

        keys
    }

    fn verify_node(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> Result<()> {
        let node = self.pool.try_get(id)?;
        let len = node.len();

        if len > NODE_CAPACITY {
            return Err(violation(id, format!("{} keys exceed capacity", len)));
        }

        let slots = node.key_slots();
        if slots[..len].iter().any(Option::is_none) {
            return Err(violation(id, "empty slot inside the occupied keys"));
        }
        if slots[len..].iter().any(Option::is_some) {
            return Err(violation(id, "key left behind past the occupied keys"));
        }

        let keys: Vec<Key> = node.keys().collect();
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(violation(id, format!("keys {:?} are not strictly increasing", keys)));
        }
        if let (Some(lo), Some(&first)) = (lower, keys.first()) {
            if first < lo {
                return Err(violation(id, format!("key {} is below bound {}", first, lo)));
            }
        }
        if let (Some(hi), Some(&last)) = (upper, keys.last()) {
            if last >= hi {
                return Err(violation(id, format!("key {} is not below bound {}", last, hi)));
            }
        }

        let Some(children) = node.child_slots() else {
            let seen = *leaf_depth;
            return match seen {
                None => {
                    *leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(violation(
                    id,
                    format!("leaf at depth {} but other leaves are at {}", depth, expected),
                )),
            };
        };

        if children[..=len].iter().any(Option::is_none) {
            return Err(violation(id, format!("{} keys need {} children", len, len + 1)));
        }
        if children[len + 1..].iter().any(Option::is_some) {
            return Err(violation(id, "child left behind past the occupied children"));
        }

        for (i, child) in children[..=len].iter().flatten().enumerate() {
            let lo = if i == 0 { lower } else { Some(keys[i - 1]) };
            let hi = if i == len { upper } else { Some(keys[i]) };
            self.verify_node(*child, lo, hi, depth + 1, leaf_depth)?;
        }

        Ok(())
    }
}

fn violation(node: NodeId, reason: impl Into<String>) -> Error {
    Error::InvariantViolation {
        node,
        reason: reason.into(),
    }
}
