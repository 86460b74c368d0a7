//! Unbalanced binary search tree.
//!
//! The baseline engine: no rebalancing of any kind, so an adversarial
//! insert order (ascending keys, say) degrades it into a linked list of
//! height n. That worst case is the point — harnesses run the same
//! workload against [`PlainTree`], [`RedBlackTree`] and [`SplayTree`] and
//! compare the counters.
//!
//! Nodes carry no parent link; every walk tracks the parent slot on the
//! way down instead.
//!
//! [`RedBlackTree`]: crate::red_black::RedBlackTree
//! [`SplayTree`]: crate::splay::SplayTree

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::counters::OpCounters;
use crate::types::{Keyed, LinkNode};
use crate::util::{self, InOrder, NodeRef};

/// Cell of a [`PlainTree`].
#[derive(Clone, Debug)]
pub struct PlainNode<K> {
    pub k: K,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl<K> PlainNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            l: None,
            r: None,
        }
    }
}

impl<K> LinkNode for PlainNode<K> {
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

impl<K> Keyed for PlainNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }
}

/// Which child slot of the tracked parent the walk descended through.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Ordered key set with no balancing discipline.
///
/// `insert` / `remove` / `contains` take `&mut self` because every key
/// comparison is recorded in the handle's [`OpCounters`].
pub struct PlainTree<K> {
    arena: Arena<PlainNode<K>>,
    root: Option<u32>,
    counters: OpCounters,
    current_height: usize,
}

impl<K> Default for PlainTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PlainTree<K> {
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

    /// Height as of the last structural mutation. Cheap to read; meant for
    /// harnesses reporting a height column after each operation.
    pub fn current_height(&self) -> usize {
        self.current_height
    }

    pub fn counters(&self) -> &OpCounters {
        &self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Smallest key, `None` when empty.
    pub fn min(&self) -> Option<&K> {
        util::first(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    /// Largest key, `None` when empty.
    pub fn max(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, PlainNode<K>> {
        InOrder::new(&self.arena, self.root)
    }

    /// Read-only view of the root, for structure walkers.
    pub fn root_view(&self) -> Option<NodeRef<'_, PlainNode<K>>> {
        self.root.map(|i| NodeRef::new(&self.arena, i))
    }
}

impl<K: Ord> PlainTree<K> {
    /// Descend from the root to an empty slot and link a new leaf there.
    /// Inserting a key that is already present changes nothing.
    pub fn insert(&mut self, key: K) {
        let mut parent: Option<(u32, Side)> = None;
        let mut curr = self.root;
        while let Some(i) = curr {
            self.counters.record_cmp();
            match key.cmp(&self.arena[i].k) {
                Ordering::Less => {
                    parent = Some((i, Side::Left));
                    curr = self.arena[i].l;
                }
                Ordering::Greater => {
                    parent = Some((i, Side::Right));
                    curr = self.arena[i].r;
                }
                Ordering::Equal => return,
            }
        }

        let node = self.arena.alloc(PlainNode::new(key));
        self.link(parent, Some(node));
        self.current_height = self.height();
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// A node with at most one child is replaced by that child. A node
    /// with two children is replaced by its in-order successor (the
    /// minimum of its right subtree), which is spliced out of its own
    /// position first — the successor has no left child by construction.
    pub fn remove(&mut self, key: &K) -> bool {
        let mut parent: Option<(u32, Side)> = None;
        let mut curr = self.root;
        let target = loop {
            let Some(i) = curr else { return false };
            self.counters.record_cmp();
            match key.cmp(&self.arena[i].k) {
                Ordering::Less => {
                    parent = Some((i, Side::Left));
                    curr = self.arena[i].l;
                }
                Ordering::Greater => {
                    parent = Some((i, Side::Right));
                    curr = self.arena[i].r;
                }
                Ordering::Equal => break i,
            }
        };

        let l = self.arena[target].l;
        let r = self.arena[target].r;
        let replacement = match (l, r) {
            (Some(l), Some(r)) => {
                let mut succ_parent = target;
                let mut succ = r;
                while let Some(sl) = self.arena[succ].l {
                    succ_parent = succ;
                    succ = sl;
                }
                if succ_parent != target {
                    let succ_right = self.arena[succ].r;
                    self.arena[succ_parent].l = succ_right;
                    self.counters.record_ptr();
                    self.arena[succ].r = Some(r);
                    self.counters.record_ptr();
                }
                self.arena[succ].l = Some(l);
                self.counters.record_ptr();
                Some(succ)
            }
            _ => l.or(r),
        };

        self.link(parent, replacement);
        self.arena.free(target);
        self.current_height = self.height();
        true
    }

    /// Whether `key` is present. Pure apart from counter updates.
    pub fn contains(&mut self, key: &K) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            self.counters.record_cmp();
            curr = match key.cmp(&self.arena[i].k) {
                Ordering::Less => self.arena[i].l,
                Ordering::Greater => self.arena[i].r,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Point `parent`'s slot (or the root) at `child`.
    fn link(&mut self, parent: Option<(u32, Side)>, child: Option<u32>) {
        match parent {
            None => self.root = child,
            Some((p, Side::Left)) => self.arena[p].l = child,
            Some((p, Side::Right)) => self.arena[p].r = child,
        }
        self.counters.record_ptr();
    }
}
