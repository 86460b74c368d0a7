//! Node link traits.
//!
//! The rotation primitives and the per-tree algorithms are generic over
//! these traits rather than over concrete node structs: [`LinkNode`] is the
//! minimum a BST cell needs (child links), [`ParentNode`] adds the parent
//! back-reference that rotations and splays require. `PlainTree` nodes stop
//! at [`LinkNode`]; red-black and splay nodes implement both.

use crate::arena::Arena;
use crate::counters::OpCounters;

/// Child links of an arena-resident tree node.
pub trait LinkNode {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Child links plus a non-owning parent back-reference.
pub trait ParentNode: LinkNode {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
}

/// A node that carries an ordering key. The key is set at construction and
/// never mutated afterwards; deletes splice nodes instead of copying keys.
pub trait Keyed {
    type Key;

    fn key(&self) -> &Self::Key;
}

#[inline]
pub(crate) fn get_l<N: LinkNode>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: LinkNode>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn get_p<N: ParentNode>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn set_l<N: LinkNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    idx: u32,
    v: Option<u32>,
) {
    arena[idx].set_l(v);
    counters.record_ptr();
}

#[inline]
pub(crate) fn set_r<N: LinkNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    idx: u32,
    v: Option<u32>,
) {
    arena[idx].set_r(v);
    counters.record_ptr();
}

#[inline]
pub(crate) fn set_p<N: ParentNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    idx: u32,
    v: Option<u32>,
) {
    arena[idx].set_p(v);
    counters.record_ptr();
}
