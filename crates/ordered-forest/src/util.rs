//! Traversal helpers shared by the three tree engines.
//!
//! Everything here is iterative with an explicit stack: a degenerate
//! `PlainTree` chain of n nodes is a legitimate shape, and recursing down
//! it would trade a measurement artifact for a stack overflow.

use crate::arena::Arena;
use crate::types::{Keyed, LinkNode};

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: LinkNode>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: LinkNode>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr].r() {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes on the longest root-to-leaf path; 0 for an empty
/// subtree, 1 for a single node.
pub fn subtree_height<N: LinkNode>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut stack = Vec::new();
    if let Some(root) = root {
        stack.push((root, 1usize));
    }
    let mut max = 0;
    while let Some((idx, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = arena[idx].l() {
            stack.push((l, depth + 1));
        }
        if let Some(r) = arena[idx].r() {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// In-order key iterator over an arena-resident subtree.
pub struct InOrder<'a, N> {
    arena: &'a Arena<N>,
    stack: Vec<u32>,
}

impl<'a, N: LinkNode> InOrder<'a, N> {
    pub(crate) fn new(arena: &'a Arena<N>, root: Option<u32>) -> Self {
        let mut iter = InOrder {
            arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<u32>) {
        while let Some(idx) = curr {
            self.stack.push(idx);
            curr = self.arena[idx].l();
        }
    }
}

impl<'a, N: LinkNode + Keyed> Iterator for InOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        self.push_left_spine(self.arena[idx].r());
        Some(self.arena[idx].key())
    }
}

/// Read-only handle into a tree's structure, for visualizers and tests.
/// Exposes the key and the child links; it can never mutate the tree.
pub struct NodeRef<'a, N> {
    pub(crate) arena: &'a Arena<N>,
    pub(crate) idx: u32,
}

impl<N> Clone for NodeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodeRef<'_, N> {}

impl<'a, N: LinkNode + Keyed> NodeRef<'a, N> {
    pub(crate) fn new(arena: &'a Arena<N>, idx: u32) -> Self {
        Self { arena, idx }
    }

    pub fn key(&self) -> &'a N::Key {
        self.arena[self.idx].key()
    }

    pub fn left(&self) -> Option<Self> {
        self.arena[self.idx].l().map(|i| Self::new(self.arena, i))
    }

    pub fn right(&self) -> Option<Self> {
        self.arena[self.idx].r().map(|i| Self::new(self.arena, i))
    }
}
