//! B-tree statistics tracking.

use std::fmt;

/// Counters maintained by the insert path.
///
/// The tree is single-threaded and owns its stats, so plain integers are
/// enough. [`BTree::stats`](super::BTree::stats) hands out a copy.
///
/// # Example
/// ```
/// use arena_btree::BTree;
///
/// let mut tree = BTree::new();
/// for k in 1..=6 {
///     tree.insert(k);
/// }
/// tree.insert(6);
///
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 6);
/// assert_eq!(stats.duplicates, 1);
/// assert_eq!(stats.leaf_splits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BTreeStats {
    /// Keys that were new and got stored.
    pub inserts: u64,

    /// Inserts rejected because the key was already present.
    pub duplicates: u64,

    /// Number of leaf splits.
    pub leaf_splits: u64,

    /// Number of internal node splits.
    pub internal_splits: u64,

    /// Number of times the root split and the tree grew a level.
    pub root_promotions: u64,
}

impl BTreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total splits of any kind.
    pub fn splits(&self) -> u64 {
        self.leaf_splits + self.internal_splits
    }

    /// Splits per successful insert (0.0 when nothing was inserted).
    pub fn split_rate(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.splits() as f64 / self.inserts as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for BTreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, duplicates: {}, splits: {} (leaf {}, internal {}), root_promotions: {}, split_rate: {:.2} }}",
            self.inserts,
            self.duplicates,
            self.splits(),
            self.leaf_splits,
            self.internal_splits,
            self.root_promotions,
            self.split_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = BTreeStats::new();
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.splits(), 0);
        assert_eq!(stats.split_rate(), 0.0);
    }

    #[test]
    fn test_split_rate() {
        let stats = BTreeStats {
            inserts: 8,
            leaf_splits: 3,
            internal_splits: 1,
            ..BTreeStats::default()
        };

        assert_eq!(stats.splits(), 4);
        assert_eq!(stats.split_rate(), 0.5);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = BTreeStats {
            inserts: 100,
            duplicates: 4,
            ..BTreeStats::default()
        };

        stats.reset();

        assert_eq!(stats, BTreeStats::new());
    }

    #[test]
    fn test_stats_display() {
        let stats = BTreeStats {
            inserts: 80,
            duplicates: 20,
            leaf_splits: 10,
            internal_splits: 2,
            root_promotions: 1,
        };

        let display = format!("{}", stats);

        assert!(display.contains("inserts: 80"));
        assert!(display.contains("duplicates: 20"));
        assert!(display.contains("splits: 12"));
        assert!(display.contains("split_rate: 0.15"));
    }
}
