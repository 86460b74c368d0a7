use thiserror::Error;

/// Structural violations reported by [`RedBlackTree::check_invariants`].
///
/// The `idx` fields are arena slot indices, useful when dumping a broken
/// tree under a debugger.
///
/// [`RedBlackTree::check_invariants`]: crate::red_black::RedBlackTree::check_invariants
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root is not black")]
    RootNotBlack,

    #[error("red node {idx} has a red child")]
    RedRedViolation { idx: u32 },

    #[error("black-height mismatch under node {idx}")]
    BlackHeightMismatch { idx: u32 },

    #[error("keys out of order at node {idx}")]
    OrderViolation { idx: u32 },

    #[error("broken parent link at node {idx}")]
    BrokenParentLink { idx: u32 },
}
