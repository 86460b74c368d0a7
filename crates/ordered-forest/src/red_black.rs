//! Red-black tree.
//!
//! Classic coloring discipline over arena indices: every node is RED or
//! BLACK, the root is BLACK, a RED node has only BLACK children, and every
//! path from a node down to a missing child passes the same number of
//! BLACK nodes. Together these cap the height at 2·log2(n+1) nodes.
//!
//! There is no sentinel node; a missing child is `None` and counts as
//! BLACK wherever a fixup inspects a child's color. The one structural
//! consequence is in the delete fixup, which tracks the spliced-out node's
//! replacement as a `(node, parent)` pair because the replacement can be
//! `None`.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::counters::OpCounters;
use crate::error::InvariantError;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::{set_l, set_p, set_r, Keyed, LinkNode, ParentNode};
use crate::util::{self, InOrder, NodeRef};

/// Node color. Missing children read as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Cell of a [`RedBlackTree`]. New nodes start RED; only links and color
/// mutate after construction.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub k: K,
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub color: Color,
}

impl<K> RbNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
            color: Color::Red,
        }
    }
}

impl<K> LinkNode for RbNode<K> {
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

impl<K> ParentNode for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}

impl<K> Keyed for RbNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }
}

impl<'a, K> NodeRef<'a, RbNode<K>> {
    /// The node's color, for visualizers that render R/B tags.
    pub fn color(&self) -> Color {
        self.arena[self.idx].color
    }
}

#[inline]
fn color_of<K>(arena: &Arena<RbNode<K>>, n: Option<u32>) -> Color {
    n.map_or(Color::Black, |i| arena[i].color)
}

/// Ordered key set balanced by red-black fixups on insert and delete.
pub struct RedBlackTree<K> {
    arena: Arena<RbNode<K>>,
    root: Option<u32>,
    counters: OpCounters,
    current_height: usize,
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RedBlackTree<K> {
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

    /// Height as of the last structural mutation.
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
    pub fn iter(&self) -> InOrder<'_, RbNode<K>> {
        InOrder::new(&self.arena, self.root)
    }

    /// Read-only view of the root, for structure walkers.
    pub fn root_view(&self) -> Option<NodeRef<'_, RbNode<K>>> {
        self.root.map(|i| NodeRef::new(&self.arena, i))
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Insert `key` as a RED leaf, then restore the coloring invariants.
    /// Inserting a key that is already present changes nothing.
    pub fn insert(&mut self, key: K) {
        let mut parent: Option<u32> = None;
        let mut went_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            self.counters.record_cmp();
            parent = Some(i);
            curr = match key.cmp(&self.arena[i].k) {
                Ordering::Less => {
                    went_left = true;
                    self.arena[i].l
                }
                Ordering::Greater => {
                    went_left = false;
                    self.arena[i].r
                }
                Ordering::Equal => return,
            };
        }

        let node = self.arena.alloc(RbNode::new(key));
        self.arena[node].p = parent;
        match parent {
            None => {
                self.root = Some(node);
                self.counters.record_ptr();
            }
            Some(p) if went_left => set_l(&mut self.arena, &mut self.counters, p, Some(node)),
            Some(p) => set_r(&mut self.arena, &mut self.counters, p, Some(node)),
        }

        let root = self.root.expect("tree is non-empty after insert");
        self.root = Some(fix_insert(&mut self.arena, &mut self.counters, root, node));
        self.current_height = self.height();
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// minimum of its right subtree), which inherits its color; the color
    /// of the node actually spliced out decides whether the delete fixup
    /// runs.
    pub fn remove(&mut self, key: &K) -> bool {
        let mut curr = self.root;
        let z = loop {
            let Some(i) = curr else { return false };
            self.counters.record_cmp();
            match key.cmp(&self.arena[i].k) {
                Ordering::Less => curr = self.arena[i].l,
                Ordering::Greater => curr = self.arena[i].r,
                Ordering::Equal => break i,
            }
        };

        let arena = &mut self.arena;
        let counters = &mut self.counters;
        let mut root = self.root;

        let zl = arena[z].l;
        let zr = arena[z].r;
        let spliced_color;
        let x;
        let x_parent;
        match (zl, zr) {
            (None, _) => {
                spliced_color = arena[z].color;
                x = zr;
                x_parent = arena[z].p;
                transplant(arena, counters, &mut root, z, zr);
            }
            (_, None) => {
                spliced_color = arena[z].color;
                x = zl;
                x_parent = arena[z].p;
                transplant(arena, counters, &mut root, z, zl);
            }
            (Some(zl), Some(zr)) => {
                let mut y = zr;
                while let Some(l) = arena[y].l {
                    y = l;
                }
                spliced_color = arena[y].color;
                x = arena[y].r;
                if arena[y].p == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = arena[y].p;
                    let yr = arena[y].r;
                    transplant(arena, counters, &mut root, y, yr);
                    set_r(arena, counters, y, Some(zr));
                    set_p(arena, counters, zr, Some(y));
                }
                transplant(arena, counters, &mut root, z, Some(y));
                set_l(arena, counters, y, Some(zl));
                set_p(arena, counters, zl, Some(y));
                arena[y].color = arena[z].color;
            }
        }

        arena.free(z);
        if spliced_color == Color::Black {
            if let Some(r) = root {
                root = Some(fix_delete(arena, counters, r, x, x_parent));
            }
        }
        self.root = root;
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

    /// Verify every red-black invariant plus BST order and parent-link
    /// consistency. Intended for tests and debugging sessions; operations
    /// never call it themselves.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return Ok(());
        };
        if self.arena[root].p.is_some() {
            return Err(InvariantError::BrokenParentLink { idx: root });
        }
        if self.arena[root].color != Color::Black {
            return Err(InvariantError::RootNotBlack);
        }
        self.black_height(root)?;

        // In-order walk must be strictly ascending.
        let mut stack = Vec::new();
        let mut curr = Some(root);
        let mut prev: Option<u32> = None;
        loop {
            while let Some(i) = curr {
                stack.push(i);
                curr = self.arena[i].l;
            }
            let Some(i) = stack.pop() else { break };
            if let Some(p) = prev {
                if self.arena[p].k >= self.arena[i].k {
                    return Err(InvariantError::OrderViolation { idx: i });
                }
            }
            prev = Some(i);
            curr = self.arena[i].r;
        }
        Ok(())
    }

    /// BLACK count on every path from `node` down to a missing child;
    /// errors if any two paths disagree or a RED node has a RED child.
    fn black_height(&self, node: u32) -> Result<usize, InvariantError> {
        let l = self.arena[node].l;
        let r = self.arena[node].r;
        for child in [l, r].into_iter().flatten() {
            if self.arena[child].p != Some(node) {
                return Err(InvariantError::BrokenParentLink { idx: child });
            }
        }
        if self.arena[node].color == Color::Red
            && (color_of(&self.arena, l) == Color::Red || color_of(&self.arena, r) == Color::Red)
        {
            return Err(InvariantError::RedRedViolation { idx: node });
        }

        let lh = match l {
            Some(l) => self.black_height(l)?,
            None => 0,
        };
        let rh = match r {
            Some(r) => self.black_height(r)?,
            None => 0,
        };
        if lh != rh {
            return Err(InvariantError::BlackHeightMismatch { idx: node });
        }
        Ok(lh + usize::from(self.arena[node].color == Color::Black))
    }
}

/// Insert fixup: walk up while the parent is RED.
///
/// RED uncle: recolor parent and uncle BLACK, grandparent RED, continue
/// from the grandparent. BLACK (or missing) uncle: if the new node is an
/// inner grandchild, rotate it into its parent's position first — the
/// inner-to-outer normalization must precede the grandparent rotation —
/// then rotate the grandparent and swap colors. The root leaves BLACK
/// whatever path was taken.
fn fix_insert<K>(
    arena: &mut Arena<RbNode<K>>,
    counters: &mut OpCounters,
    mut root: u32,
    mut x: u32,
) -> u32 {
    loop {
        let Some(p) = arena[x].p else { break };
        if arena[p].color == Color::Black {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = arena[p].p.expect("red parent has a grandparent");
        let parent_is_left = arena[g].l == Some(p);
        let uncle = if parent_is_left {
            arena[g].r
        } else {
            arena[g].l
        };

        if color_of(arena, uncle) == Color::Red {
            let u = uncle.expect("a red uncle exists");
            arena[p].color = Color::Black;
            arena[u].color = Color::Black;
            arena[g].color = Color::Red;
            x = g;
            continue;
        }

        if parent_is_left {
            if arena[p].r == Some(x) {
                x = p;
                root = rotate_left(arena, counters, root, x);
            }
            let p = arena[x].p.expect("outer grandchild has a parent");
            let g = arena[p].p.expect("outer grandchild has a grandparent");
            arena[p].color = Color::Black;
            arena[g].color = Color::Red;
            root = rotate_right(arena, counters, root, g);
        } else {
            if arena[p].l == Some(x) {
                x = p;
                root = rotate_right(arena, counters, root, x);
            }
            let p = arena[x].p.expect("outer grandchild has a parent");
            let g = arena[p].p.expect("outer grandchild has a grandparent");
            arena[p].color = Color::Black;
            arena[g].color = Color::Red;
            root = rotate_left(arena, counters, root, g);
        }
    }
    arena[root].color = Color::Black;
    root
}

/// Replace the subtree rooted at `u` with `v` in `u`'s parent slot.
fn transplant<K>(
    arena: &mut Arena<RbNode<K>>,
    counters: &mut OpCounters,
    root: &mut Option<u32>,
    u: u32,
    v: Option<u32>,
) {
    let p = arena[u].p;
    match p {
        None => {
            *root = v;
            counters.record_ptr();
        }
        Some(p) => {
            if arena[p].l == Some(u) {
                set_l(arena, counters, p, v);
            } else {
                set_r(arena, counters, p, v);
            }
        }
    }
    if let Some(v) = v {
        set_p(arena, counters, v, p);
    }
}

/// Delete fixup: `x` (possibly a missing child, which reads BLACK) carries
/// a surplus of blackness; push it up or absorb it with rotations.
///
/// A RED sibling is first rotated into BLACK position and the loop
/// retries. A BLACK sibling with two BLACK children sheds blackness by
/// recoloring and the surplus moves to the parent. Otherwise the "near"
/// red child case is normalized with a pre-rotation, then a terminal
/// rotation copies the parent's color across and the loop exits through
/// the root.
fn fix_delete<K>(
    arena: &mut Arena<RbNode<K>>,
    counters: &mut OpCounters,
    mut root: u32,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> u32 {
    while x != Some(root) && color_of(arena, x) == Color::Black {
        let Some(p) = parent else { break };
        if arena[p].l == x {
            let mut s = arena[p].r.expect("double-black node has a sibling");
            if arena[s].color == Color::Red {
                arena[s].color = Color::Black;
                arena[p].color = Color::Red;
                root = rotate_left(arena, counters, root, p);
                s = arena[p].r.expect("black sibling after rotation");
            }
            let sl = arena[s].l;
            let sr = arena[s].r;
            if color_of(arena, sl) == Color::Black && color_of(arena, sr) == Color::Black {
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
            } else {
                if color_of(arena, sr) == Color::Black {
                    let sl = sl.expect("near child is red");
                    arena[sl].color = Color::Black;
                    arena[s].color = Color::Red;
                    root = rotate_right(arena, counters, root, s);
                    s = arena[p].r.expect("sibling after normalization");
                }
                arena[s].color = arena[p].color;
                arena[p].color = Color::Black;
                let sr = arena[s].r.expect("far child is red after normalization");
                arena[sr].color = Color::Black;
                root = rotate_left(arena, counters, root, p);
                x = Some(root);
                parent = None;
            }
        } else {
            let mut s = arena[p].l.expect("double-black node has a sibling");
            if arena[s].color == Color::Red {
                arena[s].color = Color::Black;
                arena[p].color = Color::Red;
                root = rotate_right(arena, counters, root, p);
                s = arena[p].l.expect("black sibling after rotation");
            }
            let sl = arena[s].l;
            let sr = arena[s].r;
            if color_of(arena, sl) == Color::Black && color_of(arena, sr) == Color::Black {
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
            } else {
                if color_of(arena, sl) == Color::Black {
                    let sr = sr.expect("near child is red");
                    arena[sr].color = Color::Black;
                    arena[s].color = Color::Red;
                    root = rotate_left(arena, counters, root, s);
                    s = arena[p].l.expect("sibling after normalization");
                }
                arena[s].color = arena[p].color;
                arena[p].color = Color::Black;
                let sl = arena[s].l.expect("far child is red after normalization");
                arena[sl].color = Color::Black;
                root = rotate_right(arena, counters, root, p);
                x = Some(root);
                parent = None;
            }
        }
    }
    if let Some(x) = x {
        arena[x].color = Color::Black;
    }
    root
}
