use ordered_forest::PlainTree;

fn keys(tree: &PlainTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn build(values: &[i32]) -> PlainTree<i32> {
    let mut tree = PlainTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

#[test]
fn sequential_inserts_degenerate_into_a_chain() {
    // The known worst case: 1..n ascending gives height exactly n.
    let mut tree = PlainTree::new();
    for k in 1..=5 {
        tree.insert(k);
        assert_eq!(tree.height(), k as usize);
        assert_eq!(tree.current_height(), k as usize);
    }
    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);

    let tree = build(&(1..=64).collect::<Vec<_>>());
    assert_eq!(tree.height(), 64);
}

#[test]
fn descending_inserts_degenerate_too() {
    let tree = build(&(1..=32).rev().collect::<Vec<_>>());
    assert_eq!(tree.height(), 32);
    assert_eq!(keys(&tree), (1..=32).collect::<Vec<_>>());
}

#[test]
fn delete_matrix_covers_leaf_one_child_and_two_children() {
    let mut tree = build(&[50, 30, 70, 20, 40, 60, 80, 35, 45]);

    // Leaf.
    assert!(tree.remove(&20));
    assert_eq!(keys(&tree), vec![30, 35, 40, 45, 50, 60, 70, 80]);

    // One child: 30 now has only its right child 40.
    assert!(tree.remove(&30));
    assert_eq!(keys(&tree), vec![35, 40, 45, 50, 60, 70, 80]);

    // Two children: the root is replaced by its in-order successor.
    assert!(tree.remove(&50));
    assert_eq!(keys(&tree), vec![35, 40, 45, 60, 70, 80]);

    // Drain the rest.
    for k in [35, 40, 45, 60, 70, 80] {
        assert!(tree.remove(&k));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn removing_an_absent_key_changes_nothing() {
    let mut tree = build(&[8, 4, 12, 2, 6]);
    let before = keys(&tree);
    let height_before = tree.height();

    assert!(!tree.remove(&5));
    assert!(!tree.remove(&100));

    assert_eq!(keys(&tree), before);
    assert_eq!(tree.height(), height_before);
}

#[test]
fn insert_then_remove_round_trips() {
    let mut tree = build(&[8, 4, 12, 2, 6, 10, 14]);
    let before = keys(&tree);

    tree.insert(5);
    assert!(tree.contains(&5));
    assert!(tree.remove(&5));

    assert_eq!(keys(&tree), before);
}

#[test]
fn reinserting_a_present_key_keeps_the_set() {
    let mut tree = build(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5, 6, 9]);
    assert_eq!(tree.len(), 7);
}

#[test]
fn counters_reset_and_accumulate() {
    let mut tree = build(&(1..=16).collect::<Vec<_>>());

    tree.reset_counters();
    assert_eq!(tree.counters().comparisons(), 0);
    assert_eq!(tree.counters().pointer_ops(), 0);

    // Searching the deep end of the chain costs one comparison per level.
    assert!(tree.contains(&16));
    assert_eq!(tree.counters().comparisons(), 16);

    let after_search = tree.counters().comparisons();
    tree.insert(17);
    assert!(tree.counters().comparisons() > after_search);
    assert!(tree.counters().pointer_ops() > 0);
}
