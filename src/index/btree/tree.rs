//! BTree - root ownership, search and top-down insertion.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use log::debug;

use super::iter::Iter;
use super::node::Node;
use super::stats::TreeStats;
use crate::common::{MinDegree, Result};

/// An in-memory B-tree of ordered keys.
///
/// All leaves sit at the same depth and every non-root node holds between
/// `t - 1` and `2t - 1` keys, so search and insertion touch `O(log_t n)`
/// nodes whatever the insertion order.
///
/// Insertion splits full nodes on the way down, so it makes a single pass
/// from root to leaf. Duplicate keys are stored as separate entries.
///
/// # Thread Safety
/// The tree has no interior mutability. Share it across threads by
/// wrapping it in a lock (e.g. `parking_lot::RwLock<BTree<K>>`).
///
/// # Example
/// ```
/// use interchange_btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for k in [10, 20, 30, 40, 50, 60] {
///     tree.insert(k);
/// }
///
/// assert_eq!(tree.root().keys(), &[30]);
/// let (node, index) = tree.search(&50).unwrap();
/// assert_eq!(node.keys()[index], 50);
/// assert!(tree.search(&45).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BTree<K> {
    root: Node<K>,
    min_degree: MinDegree,
    len: usize,
    stats: TreeStats,
}

impl<K: Ord> BTree<K> {
    /// Create an empty tree with minimum degree `t`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMinDegree`](crate::Error::InvalidMinDegree)
    /// if `t < 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::with_min_degree(MinDegree::new(min_degree)?))
    }

    /// Create an empty tree from an already validated degree.
    pub fn with_min_degree(min_degree: MinDegree) -> Self {
        Self {
            root: Node::new(min_degree, true),
            min_degree,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Find the node and slot holding `key`.
    ///
    /// Returns `None` if no equal key is stored. With duplicates, the
    /// first match met on the way down is returned.
    pub fn search<Q>(&self, key: &Q) -> Option<(&Node<K>, usize)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = &self.root;
        loop {
            // Smallest i with key <= keys[i].
            let i = node
                .keys()
                .partition_point(|k| key.cmp(k.borrow()) == Ordering::Greater);

            if let Some(found) = node.keys().get(i) {
                if key.cmp(found.borrow()) == Ordering::Equal {
                    return Some((node, i));
                }
            }

            if node.is_leaf() {
                return None;
            }
            node = &node.children()[i];
        }
    }

    /// Whether an equal key is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// The stored key equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|(node, i)| &node.keys()[i])
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `key`. Always succeeds; an equal key already present is kept
    /// and the new one is stored beside it.
    ///
    /// If the root is full it is split first and the tree grows one level.
    /// This is the only way the height changes.
    pub fn insert(&mut self, key: K) {
        let t = self.min_degree;

        if self.root.is_full(t) {
            let old_root = std::mem::replace(&mut self.root, Node::new(t, false));
            self.root.push_child(old_root);
            self.root.split_child(0, t);

            self.stats.record_root_split();
            debug!(
                "root split ({}): tree height now {}, {} keys stored",
                t,
                self.height(),
                self.len
            );
        }

        let splits = self.root.insert_non_full(key, t);
        self.stats.record_splits(splits);
        self.stats.inserts += 1;
        self.len += 1;
    }
}

impl<K> BTree<K> {
    // ========================================================================
    // Introspection
    // ========================================================================

    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// The minimum degree the tree was built with.
    #[inline]
    pub fn min_degree(&self) -> MinDegree {
        self.min_degree
    }

    /// Total number of stored keys, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of node levels. A lone root leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children().first() {
            height += 1;
            node = child;
        }
        height
    }

    /// Snapshot of the structural counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Zero the event counters. The tree and its node count are untouched.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    /// All keys in non-decreasing order.
    ///
    /// The walk is lazy and read-only; call again to start over.
    pub fn keys_in_order(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Alias for [`keys_in_order`](Self::keys_in_order).
    pub fn iter(&self) -> Iter<'_, K> {
        self.keys_in_order()
    }
}

impl<K: Ord> Default for BTree<K> {
    fn default() -> Self {
        Self::with_min_degree(MinDegree::default())
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.keys_in_order()
    }
}

/// Level-by-level structure dump, one node per line in preorder.
///
/// ```text
/// Level 0: [30]
///   Level 1: [10, 20]
///   Level 1: [40, 50, 60]
/// ```
impl<K: fmt::Debug> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<K: fmt::Debug>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<K>,
            level: usize,
        ) -> fmt::Result {
            writeln!(f, "{}Level {}: {:?}", "  ".repeat(level), level, node.keys())?;
            for child in node.children() {
                write_node(f, child, level + 1)?;
            }
            Ok(())
        }

        write_node(f, &self.root, 0)
    }
}
