//! Shared helpers for the integration tests.

#![allow(dead_code)]

use interchange_btree::{BTree, Node};

/// Route `log` output through the test harness (`RUST_LOG=trace`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Walk the whole tree and panic on the first broken invariant:
/// sorted keys, separator bounds, equal leaf depth, occupancy bounds
/// and child/key parity.
///
/// Separator bounds are closed, since duplicates may sit on either side
/// of an equal separator.
pub fn check_invariants<K: Ord + std::fmt::Debug>(tree: &BTree<K>) {
    check_tree(tree, false);
}

/// Same walk as [`check_invariants`], for trees built from distinct keys:
/// every key in `children[i]` must lie strictly between `keys[i-1]` and
/// `keys[i]`, and no node may repeat a key.
pub fn check_invariants_distinct<K: Ord + std::fmt::Debug>(tree: &BTree<K>) {
    check_tree(tree, true);
}

fn check_tree<K: Ord + std::fmt::Debug>(tree: &BTree<K>, strict: bool) {
    let t = tree.min_degree();
    let mut leaf_depth = None;
    check_node(tree.root(), true, 0, None, None, t.get(), strict, &mut leaf_depth);
}

#[allow(clippy::too_many_arguments)]
fn check_node<K: Ord + std::fmt::Debug>(
    node: &Node<K>,
    is_root: bool,
    depth: usize,
    lower: Option<&K>,
    upper: Option<&K>,
    t: usize,
    strict: bool,
    leaf_depth: &mut Option<usize>,
) {
    let keys = node.keys();

    assert!(keys.len() <= 2 * t - 1, "node over capacity: {:?}", keys);
    if !is_root {
        assert!(keys.len() >= t - 1, "node under capacity: {:?}", keys);
    }
    if strict {
        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "keys not strictly ascending: {:?}",
            keys
        );
        if let Some(lo) = lower {
            assert!(keys.iter().all(|k| k > lo), "{:?} not above {:?}", keys, lo);
        }
        if let Some(hi) = upper {
            assert!(keys.iter().all(|k| k < hi), "{:?} not below {:?}", keys, hi);
        }
    } else {
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "keys out of order: {:?}",
            keys
        );
        if let Some(lo) = lower {
            assert!(keys.iter().all(|k| k >= lo), "{:?} below {:?}", keys, lo);
        }
        if let Some(hi) = upper {
            assert!(keys.iter().all(|k| k <= hi), "{:?} above {:?}", keys, hi);
        }
    }

    if node.is_leaf() {
        assert!(node.children().is_empty(), "leaf with children");
        match leaf_depth {
            Some(d) => assert_eq!(*d, depth, "leaves at different depths"),
            None => *leaf_depth = Some(depth),
        }
        return;
    }

    assert_eq!(
        node.children().len(),
        keys.len() + 1,
        "internal node child/key parity broken"
    );
    for (i, child) in node.children().iter().enumerate() {
        let lo = if i == 0 { lower } else { keys.get(i - 1) };
        let hi = if i == keys.len() { upper } else { keys.get(i) };
        check_node(child, false, depth + 1, lo, hi, t, strict, leaf_depth);
    }
}

/// Depth of every leaf, left to right.
pub fn leaf_depths<K>(tree: &BTree<K>) -> Vec<usize> {
    fn walk<K>(node: &Node<K>, depth: usize, out: &mut Vec<usize>) {
        if node.is_leaf() {
            out.push(depth);
        }
        for child in node.children() {
            walk(child, depth + 1, out);
        }
    }

    let mut out = vec![];
    walk(tree.root(), 0, &mut out);
    out
}

/// Total nodes reachable from the root.
pub fn count_nodes<K>(tree: &BTree<K>) -> u64 {
    fn walk<K>(node: &Node<K>) -> u64 {
        1 + node.children().iter().map(walk).sum::<u64>()
    }
    walk(tree.root())
}
