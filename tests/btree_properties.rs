//! Property tests for the B-tree.
//!
//! Each property runs over random key sequences (with plenty of
//! duplicates) and random minimum degrees.

mod common;

use common::{check_invariants, check_invariants_distinct, leaf_depths};
use interchange_btree::BTree;
use proptest::prelude::*;

fn build(t: usize, keys: &[i16]) -> BTree<i16> {
    let mut tree = BTree::new(t).unwrap();
    tree.extend(keys.iter().copied());
    tree
}

fn degree() -> impl Strategy<Value = usize> {
    2usize..=6
}

fn key_seq() -> impl Strategy<Value = Vec<i16>> {
    // Narrow key range so duplicates are common.
    prop::collection::vec(-200i16..200, 0..400)
}

proptest! {
    #[test]
    fn prop_distinct_keys_open_intervals(
        t in degree(),
        keys in prop::collection::hash_set(-5000i16..5000, 0..400),
    ) {
        let keys: Vec<i16> = keys.into_iter().collect();
        let tree = build(t, &keys);
        // Panics if a child key reaches or crosses a parent separator.
        check_invariants_distinct(&tree);
    }

    #[test]
    fn prop_in_order_is_sorted_multiset(t in degree(), keys in key_seq()) {
        let tree = build(t, &keys);

        let mut expected = keys.clone();
        expected.sort();
        let actual: Vec<i16> = tree.keys_in_order().copied().collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn prop_leaves_at_equal_depth(t in degree(), keys in key_seq()) {
        let tree = build(t, &keys);
        let depths = leaf_depths(&tree);

        prop_assert!(depths.iter().all(|&d| d == depths[0]));
        prop_assert_eq!(depths[0] + 1, tree.height());
    }

    #[test]
    fn prop_occupancy_and_parity(t in degree(), keys in key_seq()) {
        let tree = build(t, &keys);
        // Panics on occupancy, parity, ordering or separator violations.
        check_invariants(&tree);
    }

    #[test]
    fn prop_search_after_insert(
        t in degree(),
        keys in key_seq(),
        probes in prop::collection::vec(-250i16..250, 0..50),
    ) {
        let tree = build(t, &keys);

        for k in &keys {
            let (node, index) = tree.search(k).expect("inserted key must be found");
            prop_assert_eq!(node.keys()[index], *k);
        }
        for p in &probes {
            prop_assert_eq!(tree.search(p).is_some(), keys.contains(p));
        }
    }

    #[test]
    fn prop_stats_match_shape(t in degree(), keys in key_seq()) {
        let tree = build(t, &keys);
        let stats = tree.stats();

        prop_assert_eq!(stats.inserts as usize, keys.len());
        prop_assert_eq!(stats.root_splits as usize, tree.height() - 1);
        prop_assert_eq!(stats.node_count(), common::count_nodes(&tree));
    }

    #[test]
    fn prop_node_count_after_reset(
        t in degree(),
        first in key_seq(),
        second in key_seq(),
    ) {
        let mut tree = build(t, &first);
        tree.reset_stats();
        prop_assert_eq!(tree.stats().node_count(), common::count_nodes(&tree));

        tree.extend(second.iter().copied());
        prop_assert_eq!(tree.stats().node_count(), common::count_nodes(&tree));
        prop_assert_eq!(tree.stats().inserts as usize, second.len());
    }
}
