use ordered_forest::SplayTree;

fn keys(tree: &SplayTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn root_key(tree: &SplayTree<i32>) -> Option<i32> {
    tree.root_view().map(|v| *v.key())
}

#[test]
fn accessed_key_moves_to_the_root() {
    let mut tree = SplayTree::new();
    for k in 1..=7 {
        tree.insert(k);
    }
    // Ascending inserts leave the tree left-deep with 7 at the root.
    assert_eq!(root_key(&tree), Some(7));

    assert!(tree.contains(&1));
    assert_eq!(root_key(&tree), Some(1));
    assert_eq!(keys(&tree), (1..=7).collect::<Vec<_>>());
}

#[test]
fn repeat_access_is_cheap_after_the_splay() {
    let mut tree = SplayTree::new();
    for k in 1..=64 {
        tree.insert(k);
    }

    tree.reset_counters();
    assert!(tree.contains(&1));
    let first_access = tree.counters().comparisons();
    assert_eq!(first_access, 64);

    // The splay left key 1 at the root: the second lookup is one compare.
    tree.reset_counters();
    assert!(tree.contains(&1));
    assert_eq!(tree.counters().comparisons(), 1);
}

#[test]
fn remove_matrix_joins_subtrees() {
    let mut tree = SplayTree::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
    }

    assert!(tree.remove(&50));
    assert_eq!(keys(&tree), vec![20, 30, 40, 60, 70, 80]);

    assert!(tree.remove(&20));
    assert_eq!(keys(&tree), vec![30, 40, 60, 70, 80]);

    assert!(tree.remove(&80));
    assert_eq!(keys(&tree), vec![30, 40, 60, 70]);

    for k in [30, 40, 60, 70] {
        assert!(tree.remove(&k));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn removing_an_absent_key_changes_nothing() {
    let mut tree = SplayTree::new();
    for k in [8, 4, 12, 2, 6] {
        tree.insert(k);
    }
    let before = keys(&tree);
    let root_before = root_key(&tree);

    assert!(!tree.remove(&5));
    assert!(!tree.remove(&100));

    assert_eq!(keys(&tree), before);
    // A failed remove does not even splay: the shape is untouched.
    assert_eq!(root_key(&tree), root_before);
}

#[test]
fn insert_then_remove_round_trips_the_key_set() {
    let mut tree = SplayTree::new();
    for k in [8, 4, 12, 2, 6, 10, 14] {
        tree.insert(k);
    }
    let before = keys(&tree);

    tree.insert(5);
    assert!(tree.remove(&5));

    assert_eq!(keys(&tree), before);
}

#[test]
fn reinserting_a_present_key_splays_without_growing_the_set() {
    let mut tree = SplayTree::new();
    for k in [5, 3, 8, 1] {
        tree.insert(k);
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(root_key(&tree), Some(1));

    tree.insert(8);
    assert_eq!(tree.len(), 4);
    assert_eq!(root_key(&tree), Some(8));
    assert_eq!(keys(&tree), vec![1, 3, 5, 8]);
}

#[test]
fn height_is_computed_on_demand() {
    let mut tree = SplayTree::new();
    for k in 1..=16 {
        tree.insert(k);
    }
    // Left-deep chain after ascending inserts.
    assert_eq!(tree.height(), 16);
    assert_eq!(tree.current_height(), 16);

    // Splaying the minimum reshapes the tree; height() sees the new shape.
    assert!(tree.contains(&1));
    assert!(tree.height() < 16);
    assert_eq!(tree.current_height(), tree.height());
}
