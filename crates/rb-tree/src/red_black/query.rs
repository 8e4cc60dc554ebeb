//! Structural queries shared by both fixups.
//!
//! Pure functions of the current shape; absent nodes count as black.

use crate::types::{Color, Node, RbNodeLike};
use crate::util::{first, get_l, get_p, get_r};

#[inline]
pub(crate) fn color_of<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Color {
    node.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
pub(crate) fn is_black<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> bool {
    color_of(arena, node).is_black()
}

#[inline]
pub(crate) fn is_red<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> bool {
    color_of(arena, node).is_red()
}

#[inline]
pub(crate) fn set_color<N: RbNodeLike>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

pub(crate) fn swap_colors<N: RbNodeLike>(arena: &mut [N], a: u32, b: u32) {
    let ca = arena[a as usize].color();
    let cb = arena[b as usize].color();
    set_color(arena, a, cb);
    set_color(arena, b, ca);
}

/// Whether `n` hangs off its parent's left link.
///
/// Must not be asked of the root.
pub fn is_left_child<N: Node>(arena: &[N], n: u32) -> bool {
    let p = get_p(arena, n);
    debug_assert!(p.is_some(), "is_left_child asked of root node {n}");
    p.is_some_and(|p| get_l(arena, p) == Some(n))
}

pub fn sibling<N: Node>(arena: &[N], n: u32) -> Option<u32> {
    let p = get_p(arena, n)?;
    if get_l(arena, p) == Some(n) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

pub fn uncle<N: Node>(arena: &[N], n: u32) -> Option<u32> {
    let p = get_p(arena, n)?;
    get_p(arena, p)?;
    sibling(arena, p)
}

pub fn has_red_child<N: RbNodeLike>(arena: &[N], n: u32) -> bool {
    is_red(arena, get_l(arena, n)) || is_red(arena, get_r(arena, n))
}

/// Leftmost node of `n`'s subtree.
pub fn successor<N: Node>(arena: &[N], n: u32) -> u32 {
    first(arena, Some(n)).unwrap_or(n)
}

/// The node that takes `n`'s position when `n` is deleted: the in-order
/// successor for two children, the only child for one, nothing for a leaf.
pub fn replacement<N: Node>(arena: &[N], n: u32) -> Option<u32> {
    match (get_l(arena, n), get_r(arena, n)) {
        (Some(_), Some(r)) => Some(successor(arena, r)),
        (l, r) => l.or(r),
    }
}
