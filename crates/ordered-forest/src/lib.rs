//! Arena-based ordered-key tree engines.
//!
//! Three set-like trees over totally-ordered keys share one contract —
//! insert, remove, contains, height, in-order iteration — and one
//! mechanical vocabulary (nodes in a [`Arena`] slot vector, `Option<u32>`
//! links, the single rotations in [`rotate`]), while differing in their
//! rebalancing discipline:
//!
//! | Tree | Discipline | Height guarantee |
//! |------|------------|------------------|
//! | [`PlainTree`] | none | O(n) worst case (ascending inserts degenerate to a chain) |
//! | [`RedBlackTree`] | RED/BLACK coloring, fixups on insert and delete | ≤ 2·log2(n+1) always |
//! | [`SplayTree`] | splay every touched node to the root | amortized O(log n) per operation |
//!
//! Every tree handle owns an [`OpCounters`] that records each 3-way key
//! comparison and each structural link write, so experiment harnesses can
//! run identical workloads against all three engines and compare the
//! counts. Reset the counters right before the operation you measure and
//! read them right after; the handles are single-threaded by design.
//!
//! ```
//! use ordered_forest::{PlainTree, RedBlackTree};
//!
//! let mut plain = PlainTree::new();
//! let mut balanced = RedBlackTree::new();
//! for k in 1..=100 {
//!     plain.insert(k);
//!     balanced.insert(k);
//! }
//! // Ascending inserts are the plain tree's worst case.
//! assert_eq!(plain.height(), 100);
//! assert!(balanced.height() <= 14);
//!
//! balanced.reset_counters();
//! assert!(balanced.contains(&37));
//! assert!(balanced.counters().comparisons() > 0);
//! ```
//!
//! All pointers are arena indices: a node's parent back-reference is plain
//! data, not a second owner, so trees drop in one `Vec` deallocation and
//! no traversal ever recurses down a degenerate chain.

pub mod arena;
pub mod counters;
pub mod error;
pub mod plain;
pub mod red_black;
pub mod rotate;
pub mod splay;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use counters::OpCounters;
pub use error::InvariantError;
pub use plain::{PlainNode, PlainTree};
pub use red_black::{Color, RbNode, RedBlackTree};
pub use splay::{SplayNode, SplayTree};
pub use types::{Keyed, LinkNode, ParentNode};
pub use util::{InOrder, NodeRef};
