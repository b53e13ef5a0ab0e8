//! Configuration constants for the B-tree index.

/// Maximum number of keys a single node can hold.
///
/// A node accepts a new key only while it holds fewer than this many keys.
/// Inserting into a node that is already full always splits it first, so
/// a node may sit at exactly `NODE_CAPACITY` keys between inserts.
///
/// # Tuning
/// Small values keep nodes cheap to shift and make splits easy to observe
/// in tests. The split scenarios in the test suite are calibrated to 5.
pub const NODE_CAPACITY: usize = 5;

/// Index at which a full node is divided during a split (floor of half).
///
/// The original node keeps `keys[..SPLIT_INDEX]`. With an odd capacity this
/// leaves the new sibling with the larger share.
pub const SPLIT_INDEX: usize = NODE_CAPACITY / 2;

/// Number of child slots in an internal node.
pub const MAX_CHILDREN: usize = NODE_CAPACITY + 1;
