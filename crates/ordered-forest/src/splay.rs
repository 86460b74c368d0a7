//! Splay tree.
//!
//! No invariant holds between operations beyond BST order. Instead, every
//! access moves the touched node to the root through zig / zig-zig /
//! zig-zag rotation steps, which is what gives the amortized logarithmic
//! bound and the locality win on skewed access patterns: the keys touched
//! recently sit near the root.
//!
//! Because the shape carries no guarantee, `height()` is always a full
//! traversal; nothing is maintained incrementally.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::counters::OpCounters;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::{set_p, set_r, Keyed, LinkNode, ParentNode};
use crate::util::{self, InOrder, NodeRef};

/// Cell of a [`SplayTree`].
#[derive(Clone, Debug)]
pub struct SplayNode<K> {
    pub k: K,
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl<K> SplayNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
        }
    }
}

impl<K> LinkNode for SplayNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> ParentNode for SplayNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}

impl<K> Keyed for SplayNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }
}

/// Ordered key set with move-to-root restructuring on every access.
pub struct SplayTree<K> {
    arena: Arena<SplayNode<K>>,
    root: Option<u32>,
    counters: OpCounters,
    current_height: usize,
}

impl<K> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SplayTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            counters: OpCounters::new(),
            current_height: 0,
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Nodes on the longest root-to-leaf path, recomputed by traversal.
    pub fn height(&self) -> usize {
        util::subtree_height(&self.arena, self.root)
    }

    /// Height as of the last structural mutation (splays included).
    pub fn current_height(&self) -> usize {
        self.current_height
    }

    pub fn counters(&self) -> &OpCounters {
        &self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Smallest key, `None` when empty. Does not splay.
    pub fn min(&self) -> Option<&K> {
        util::first(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    /// Largest key, `None` when empty. Does not splay.
    pub fn max(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, SplayNode<K>> {
        InOrder::new(&self.arena, self.root)
    }

    /// Read-only view of the root, for structure walkers.
    pub fn root_view(&self) -> Option<NodeRef<'_, SplayNode<K>>> {
        self.root.map(|i| NodeRef::new(&self.arena, i))
    }
}

impl<K: Ord> SplayTree<K> {
    /// Insert `key` and splay it to the root. If the key is already
    /// present, the existing node is splayed and the key set is unchanged.
    pub fn insert(&mut self, key: K) {
        let mut parent: Option<u32> = None;
        let mut went_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            self.counters.record_cmp();
            match key.cmp(&self.arena[i].k) {
                Ordering::Less => {
                    parent = Some(i);
                    went_left = true;
                    curr = self.arena[i].l;
                }
                Ordering::Greater => {
                    parent = Some(i);
                    went_left = false;
                    curr = self.arena[i].r;
                }
                Ordering::Equal => {
                    self.splay_to_root(i);
                    self.current_height = self.height();
                    return;
                }
            }
        }

        let node = self.arena.alloc(SplayNode::new(key));
        self.arena[node].p = parent;
        match parent {
            None => {
                self.root = Some(node);
                self.counters.record_ptr();
            }
            Some(p) => {
                if went_left {
                    self.arena[p].l = Some(node);
                } else {
                    self.arena[p].r = Some(node);
                }
                self.counters.record_ptr();
            }
        }
        self.splay_to_root(node);
        self.current_height = self.height();
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// The target is splayed to the root and detached, then its subtrees
    /// are joined: the maximum of the left subtree is splayed to that
    /// subtree's root (leaving it with no right child) and the original
    /// right subtree is hung there. An empty left subtree makes the right
    /// subtree the new root directly.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(target) = self.find(key) else {
            return false;
        };
        self.splay_to_root(target);

        let arena = &mut self.arena;
        let counters = &mut self.counters;
        let l = arena[target].l;
        let r = arena[target].r;
        if let Some(l) = l {
            set_p(arena, counters, l, None);
        }
        if let Some(r) = r {
            set_p(arena, counters, r, None);
        }

        self.root = match l {
            None => {
                counters.record_ptr();
                r
            }
            Some(l) => {
                let m = util::last(arena, Some(l)).expect("non-empty left subtree has a maximum");
                let m = splay(arena, counters, l, m);
                set_r(arena, counters, m, r);
                if let Some(r) = r {
                    set_p(arena, counters, r, Some(m));
                }
                counters.record_ptr();
                Some(m)
            }
        };

        self.arena.free(target);
        self.current_height = self.height();
        true
    }

    /// Whether `key` is present. A hit splays the node to the root; a
    /// miss leaves the tree untouched.
    pub fn contains(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(node) => {
                self.splay_to_root(node);
                self.current_height = self.height();
                true
            }
            None => false,
        }
    }

    fn find(&mut self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            self.counters.record_cmp();
            curr = match key.cmp(&self.arena[i].k) {
                Ordering::Less => self.arena[i].l,
                Ordering::Greater => self.arena[i].r,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    fn splay_to_root(&mut self, node: u32) {
        let root = self
            .root
            .expect("splay target lives in a non-empty tree");
        self.root = Some(splay(&mut self.arena, &mut self.counters, root, node));
    }
}

/// Rotate `x` up until it is the root of the subtree that `root` roots.
///
/// - **zig**: the parent is the subtree root — one rotation, done.
/// - **zig-zig**: `x` and its parent are same-side children — rotate the
///   grandparent first, then the parent. The order matters; collapsing the
///   two into one "double rotation" produces a different (wrong) shape.
/// - **zig-zag**: opposite-side children — rotate the parent, then the
///   grandparent that `x` has just become adjacent to.
fn splay<K>(
    arena: &mut Arena<SplayNode<K>>,
    counters: &mut OpCounters,
    mut root: u32,
    x: u32,
) -> u32 {
    while let Some(p) = arena[x].p {
        let x_is_left = arena[p].l == Some(x);
        match arena[p].p {
            None => {
                root = if x_is_left {
                    rotate_right(arena, counters, root, p)
                } else {
                    rotate_left(arena, counters, root, p)
                };
            }
            Some(g) => {
                let p_is_left = arena[g].l == Some(p);
                match (x_is_left, p_is_left) {
                    (true, true) => {
                        root = rotate_right(arena, counters, root, g);
                        root = rotate_right(arena, counters, root, p);
                    }
                    (false, false) => {
                        root = rotate_left(arena, counters, root, g);
                        root = rotate_left(arena, counters, root, p);
                    }
                    (false, true) => {
                        root = rotate_left(arena, counters, root, p);
                        root = rotate_right(arena, counters, root, g);
                    }
                    (true, false) => {
                        root = rotate_right(arena, counters, root, p);
                        root = rotate_left(arena, counters, root, g);
                    }
                }
            }
        }
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_key(tree: &SplayTree<i32>) -> Option<i32> {
        tree.root_view().map(|v| *v.key())
    }

    #[test]
    fn inserted_key_becomes_the_root() {
        let mut tree = SplayTree::new();
        for k in [10, 5, 20, 15] {
            tree.insert(k);
            assert_eq!(root_key(&tree), Some(k));
        }
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, vec![5, 10, 15, 20]);
    }

    #[test]
    fn duplicate_insert_splays_but_keeps_the_set() {
        let mut tree = SplayTree::new();
        for k in [3, 1, 2] {
            tree.insert(k);
        }
        tree.insert(1);
        assert_eq!(tree.len(), 3);
        assert_eq!(root_key(&tree), Some(1));
    }

    #[test]
    fn contains_hit_splays_and_miss_does_not() {
        let mut tree = SplayTree::new();
        for k in 1..=7 {
            tree.insert(k);
        }
        let before: Vec<i32> = tree.iter().copied().collect();

        assert!(!tree.contains(&99));
        let after_miss: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(before, after_miss);
        assert_eq!(root_key(&tree), Some(7));

        assert!(tree.contains(&1));
        assert_eq!(root_key(&tree), Some(1));
    }

    #[test]
    fn remove_joins_left_and_right_subtrees() {
        let mut tree = SplayTree::new();
        for k in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(k);
        }
        assert!(tree.remove(&50));
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, vec![20, 30, 40, 60, 70, 80]);
        // The join splays the left-subtree maximum; it becomes the root.
        assert_eq!(root_key(&tree), Some(40));
    }

    #[test]
    fn remove_with_empty_left_subtree_promotes_the_right() {
        let mut tree = SplayTree::new();
        tree.insert(2);
        tree.insert(5);
        // 5 is at the root with 2 in its left subtree; removing 2 leaves
        // the root's old right side only.
        assert!(tree.remove(&2));
        assert_eq!(root_key(&tree), Some(5));
        assert_eq!(tree.len(), 1);
    }
}
