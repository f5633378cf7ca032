//! Tree statistics tracking.

use std::fmt;

/// Structural counters kept by a [`BTree`](super::BTree).
///
/// The tree has a single owner, so these are plain integers rather than
/// atomics. [`BTree::stats`](super::BTree::stats) hands out a copy.
///
/// `inserts`, `splits` and `root_splits` count events since the tree was
/// built or last reset. `nodes` describes the tree as it is now and is
/// never cleared by a reset.
///
/// # Example
/// ```
/// use interchange_btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.extend([10, 20, 30, 40, 50, 60]);
///
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 6);
/// assert_eq!(stats.root_splits, 1);
/// assert_eq!(stats.node_count(), 3);
///
/// tree.reset_stats();
/// assert_eq!(tree.stats().inserts, 0);
/// assert_eq!(tree.stats().node_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys inserted, duplicates included.
    pub inserts: u64,

    /// Number of node splits, root splits included.
    pub splits: u64,

    /// Number of times the root split and the tree grew a level.
    pub root_splits: u64,

    /// Nodes currently in the tree.
    pub nodes: u64,
}

impl TreeStats {
    /// Create a tracker for a tree holding only its empty root.
    pub fn new() -> Self {
        Self {
            inserts: 0,
            splits: 0,
            root_splits: 0,
            nodes: 1,
        }
    }

    /// Account for `count` splits of non-root nodes, one new sibling each.
    pub(crate) fn record_splits(&mut self, count: u64) {
        self.splits += count;
        self.nodes += count;
    }

    /// Account for a root split: a new sibling plus a new root.
    pub(crate) fn record_root_split(&mut self) {
        self.splits += 1;
        self.root_splits += 1;
        self.nodes += 2;
    }

    /// Nodes currently in the tree.
    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Zero the event counters. `nodes` is kept.
    pub fn reset(&mut self) {
        *self = Self {
            nodes: self.nodes,
            ..Self::new()
        };
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, splits: {}, root_splits: {}, nodes: {} }}",
            self.inserts, self.splits, self.root_splits, self.nodes
        )
    }
}
