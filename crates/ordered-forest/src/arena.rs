//! Slot arena backing each tree.
//!
//! Nodes live in a `Vec` and every "pointer" between them is a `u32` slot
//! index, so parent back-references are plain data rather than aliasing
//! owners, and tearing a tree down is a single `Vec` drop regardless of
//! shape. Freed slots go on a free list and are overwritten on the next
//! allocation; a freed slot keeps its stale value until then, and it is the
//! tree's job never to follow an index to one.

use std::ops::{Index, IndexMut};

/// Growable node storage with slot reuse.
#[derive(Clone, Debug, Default)]
pub struct Arena<N> {
    slots: Vec<N>,
    free: Vec<u32>,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store `node`, reusing a freed slot when one exists.
    pub fn alloc(&mut self, node: N) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = node;
                idx
            }
            None => {
                self.slots.push(node);
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Return `idx` to the free list. The slot's contents stay in place
    /// until the slot is reallocated.
    pub fn free(&mut self, idx: u32) {
        debug_assert!((idx as usize) < self.slots.len());
        self.free.push(idx);
    }

    /// Number of live (allocated, not freed) slots.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        &self.slots[idx as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        &mut self.slots[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_reuses_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert_eq!(arena.len(), 2);

        arena.free(a);
        assert_eq!(arena.len(), 1);

        let c = arena.alloc(3);
        assert_eq!(c, a);
        assert_eq!(arena[c], 3);
        assert_eq!(arena[b], 2);
        assert_eq!(arena.len(), 2);
    }
}
