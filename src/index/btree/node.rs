//! Node - the storage unit of the B-tree.
//!
//! A [`Node`] holds an ascending run of keys and, when internal, exactly one
//! more child than it has keys. Children are owned inline, so the tree is
//! strictly tree-shaped: splitting moves the upper half of a node into a new
//! sibling rather than sharing anything.

use log::trace;

use crate::common::MinDegree;

/// A node in the B-tree.
///
/// # Layout
/// For an internal node with keys `k[0..n)` and children `c[0..n+1)`, every
/// key in `c[i]` sorts between `k[i-1]` and `k[i]`. Leaves have no children.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Keys in ascending order. Duplicates are allowed.
    keys: Vec<K>,

    /// Owned children. Empty iff the node is a leaf.
    children: Vec<Node<K>>,

    /// Fixed when the node is created.
    is_leaf: bool,
}

impl<K> Node<K> {
    /// Create an empty node sized for the given degree.
    pub(crate) fn new(min_degree: MinDegree, is_leaf: bool) -> Self {
        let children = if is_leaf {
            Vec::new()
        } else {
            Vec::with_capacity(min_degree.max_children())
        };

        Self {
            keys: Vec::with_capacity(min_degree.max_keys()),
            children,
            is_leaf,
        }
    }

    // ========================================================================
    // Read-only access
    // ========================================================================

    /// Keys stored in this node, ascending.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child nodes, left to right. Empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Number of keys in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether this node holds no keys (only possible for the root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub(crate) fn is_full(&self, min_degree: MinDegree) -> bool {
        self.keys.len() == min_degree.max_keys()
    }

    /// Attach `child` as the last child. Only used when growing a new root.
    pub(crate) fn push_child(&mut self, child: Node<K>) {
        debug_assert!(!self.is_leaf, "leaf nodes cannot own children");
        self.children.push(child);
    }
}

impl<K: Ord> Node<K> {
    // ========================================================================
    // Split
    // ========================================================================

    /// Split the full child at `index`, promoting its median into `self`.
    ///
    /// With `y = children[index]` holding exactly `2t - 1` keys:
    /// - `y.keys[t-1]` moves up to `self.keys[index]`
    /// - `y.keys[t..]` and, if internal, `y.children[t..]` move into a new
    ///   sibling `z`, inserted at `self.children[index + 1]`
    /// - `y` keeps `keys[..t-1]` and `children[..t]`
    ///
    /// Both halves end with `t - 1` keys. `self` must not be full.
    pub(crate) fn split_child(&mut self, index: usize, min_degree: MinDegree) {
        let t = min_degree.get();
        debug_assert!(!self.is_leaf, "cannot split the child of a leaf");
        debug_assert!(!self.is_full(min_degree), "parent of a split must not be full");

        let child = &mut self.children[index];
        debug_assert!(child.is_full(min_degree), "only full nodes are split");

        let mut sibling = Node::new(min_degree, child.is_leaf);
        sibling.keys = child.keys.split_off(t);
        let median = child.keys.remove(t - 1);
        if !child.is_leaf {
            sibling.children = child.children.split_off(t);
        }

        debug_assert_eq!(child.keys.len(), t - 1);
        debug_assert_eq!(sibling.keys.len(), t - 1);
        debug_assert!(child.is_leaf || child.children.len() == t);
        debug_assert!(sibling.is_leaf || sibling.children.len() == t);

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);

        trace!(
            "split child {} ({}): parent now has {} keys, {} children",
            index,
            min_degree,
            self.keys.len(),
            self.children.len()
        );
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `key` into the subtree rooted at this non-full node.
    ///
    /// Any full child is split before we descend into it, so the recursion
    /// never has to back up. Returns the number of splits performed.
    pub(crate) fn insert_non_full(&mut self, key: K, min_degree: MinDegree) -> u64 {
        debug_assert!(!self.is_full(min_degree));

        // Equal keys go to the right of existing ones.
        let mut index = self.keys.partition_point(|k| *k <= key);

        if self.is_leaf {
            self.keys.insert(index, key);
            return 0;
        }

        let mut splits = 0;
        if self.children[index].is_full(min_degree) {
            self.split_child(index, min_degree);
            splits += 1;
            if key > self.keys[index] {
                index += 1;
            }
        }

        splits + self.children[index].insert_non_full(key, min_degree)
    }
}
