//! Shared single-rotation primitives.
//!
//! Both the red-black fixups and the splay steps are built out of the same
//! two local restructurings. Each rotation fixes all parent links, rewires
//! the rotated node's old parent (or hands back a new root when the node
//! was the root), and counts every link write.

use crate::arena::Arena;
use crate::counters::OpCounters;
use crate::types::{get_l, get_p, get_r, set_l, set_p, set_r, ParentNode};

/// Rotate left around `x`: promote `x`'s right child `y` into `x`'s
/// position, reparenting `y`'s former left subtree `b` as `x`'s new right
/// subtree.
///
/// ```text
///   x              y
///    \            /
///     y    →     x
///    /            \
///   b              b
/// ```
///
/// Returns the (possibly new) root of the whole tree.
pub fn rotate_left<N: ParentNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    root: u32,
    x: u32,
) -> u32 {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let b = get_l(arena, y);

    set_r(arena, counters, x, b);
    if let Some(b) = b {
        set_p(arena, counters, b, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, counters, y, p);
    let root = reparent(arena, counters, root, p, x, y);

    set_l(arena, counters, y, Some(x));
    set_p(arena, counters, x, Some(y));
    root
}

/// Mirror of [`rotate_left`]: promote `x`'s left child `y`, reparenting
/// `y`'s former right subtree `b` as `x`'s new left subtree.
///
/// ```text
///     x          y
///    /            \
///   y      →       x
///    \            /
///     b          b
/// ```
pub fn rotate_right<N: ParentNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    root: u32,
    x: u32,
) -> u32 {
    let y = get_l(arena, x).expect("rotate_right requires a left child");
    let b = get_r(arena, y);

    set_l(arena, counters, x, b);
    if let Some(b) = b {
        set_p(arena, counters, b, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, counters, y, p);
    let root = reparent(arena, counters, root, p, x, y);

    set_r(arena, counters, y, Some(x));
    set_p(arena, counters, x, Some(y));
    root
}

/// Point `x`'s old parent slot at `y`; when `x` was the root, `y` is the
/// new root.
fn reparent<N: ParentNode>(
    arena: &mut Arena<N>,
    counters: &mut OpCounters,
    root: u32,
    p: Option<u32>,
    x: u32,
    y: u32,
) -> u32 {
    match p {
        None => {
            counters.record_ptr();
            y
        }
        Some(p) => {
            if get_l(arena, p) == Some(x) {
                set_l(arena, counters, p, Some(y));
            } else {
                set_r(arena, counters, p, Some(y));
            }
            root
        }
    }
}
