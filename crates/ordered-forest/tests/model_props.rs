//! Randomized model tests: every engine must agree with `BTreeSet` on the
//! key set and in-order sequence after any operation sequence, and the
//! red-black tree must hold its invariants the whole way.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ordered_forest::{PlainTree, RedBlackTree, SplayTree};

#[derive(Clone, Copy, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i16>().prop_map(Op::Insert),
        any::<i16>().prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        cases: 128,
        ..Default::default()
    })]

    #[test]
    fn plain_tree_matches_the_model(ops in proptest::collection::vec(op_strategy(), 1..128)) {
        let mut tree = PlainTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(k);
                    model.insert(k);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(&k));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }
        let keys: Vec<i16> = tree.iter().copied().collect();
        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn red_black_tree_matches_the_model_and_stays_valid(
        ops in proptest::collection::vec(op_strategy(), 1..128),
    ) {
        let mut tree = RedBlackTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(k);
                    model.insert(k);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(&k));
                }
            }
            let check = tree.check_invariants();
            prop_assert!(check.is_ok(), "after {:?}: {}", op, check.unwrap_err());
        }
        let keys: Vec<i16> = tree.iter().copied().collect();
        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn splay_tree_matches_the_model(ops in proptest::collection::vec(op_strategy(), 1..128)) {
        let mut tree = SplayTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(k);
                    model.insert(k);
                    // The touched key ends up at the root.
                    prop_assert_eq!(tree.root_view().map(|v| *v.key()), Some(k));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(&k));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }
        let keys: Vec<i16> = tree.iter().copied().collect();
        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn contains_agrees_across_engines(
        ops in proptest::collection::vec(any::<i16>(), 1..64),
        probe in any::<i16>(),
    ) {
        let mut plain = PlainTree::new();
        let mut balanced = RedBlackTree::new();
        let mut splayed = SplayTree::new();
        for k in ops.iter().copied() {
            plain.insert(k);
            balanced.insert(k);
            splayed.insert(k);
        }
        let expected = ops.contains(&probe);
        prop_assert_eq!(plain.contains(&probe), expected);
        prop_assert_eq!(balanced.contains(&probe), expected);
        prop_assert_eq!(splayed.contains(&probe), expected);
    }
}
