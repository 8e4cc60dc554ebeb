use tracing::trace;

use crate::types::{Color, Node, RbNodeLike};
use crate::util::{get_l, get_p, get_r, relink_child, set_l, set_p, set_r, swap_keys};

use super::query::{
    has_red_child, is_black, is_left_child, is_red, replacement, set_color, sibling,
};
use super::rotate::{rotate_left, rotate_right};

/// Removes detached node `idx` from the arena and hands it back.
///
/// The arena's last node is moved into the vacated slot, and its parent (or
/// the root slot) and children are pointed at the new index.
fn release<N: Node>(arena: &mut Vec<N>, root: &mut Option<u32>, idx: u32) -> N {
    let last = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(idx as usize);
    if idx != last {
        match get_p(arena, idx) {
            Some(p) => relink_child(arena, p, last, Some(idx)),
            None => *root = Some(idx),
        }
        if let Some(l) = get_l(arena, idx) {
            set_p(arena, l, Some(idx));
        }
        if let Some(r) = get_r(arena, idx) {
            set_p(arena, r, Some(idx));
        }
    }
    removed
}

/// Deletes node `v` and returns the released node.
///
/// The released node always carries the key that was stored at `v` on entry:
/// a node with two children trades keys with its in-order successor and the
/// deletion continues there, and a root with a single child takes over the
/// child's key before the child is released. Arena indices of other nodes may
/// change, since the last node in the arena is moved into the released slot.
pub fn remove<N: RbNodeLike>(arena: &mut Vec<N>, root: &mut Option<u32>, mut v: u32) -> N {
    loop {
        let u = replacement(arena, v);
        let uv_black = is_black(arena, u) && is_black(arena, Some(v));

        let Some(u) = u else {
            if get_p(arena, v).is_none() {
                *root = None;
            } else {
                if uv_black {
                    fix_double_black(arena, root, v);
                } else if let Some(s) = sibling(arena, v) {
                    set_color(arena, s, Color::Red);
                }
                // Rotations in the fixup may have moved `v`; it is still a leaf.
                if let Some(p) = get_p(arena, v) {
                    relink_child(arena, p, v, None);
                }
                set_p(arena, v, None);
            }
            return release(arena, root, v);
        };

        if get_l(arena, v).is_none() || get_r(arena, v).is_none() {
            match get_p(arena, v) {
                None => {
                    swap_keys(arena, v, u);
                    set_l(arena, v, None);
                    set_r(arena, v, None);
                    set_p(arena, u, None);
                    return release(arena, root, u);
                }
                Some(p) => {
                    relink_child(arena, p, v, Some(u));
                    set_p(arena, u, Some(p));
                    set_p(arena, v, None);
                    set_l(arena, v, None);
                    set_r(arena, v, None);
                    if uv_black {
                        fix_double_black(arena, root, u);
                    } else {
                        set_color(arena, u, Color::Black);
                    }
                    return release(arena, root, v);
                }
            }
        }

        swap_keys(arena, u, v);
        v = u;
    }
}

/// Resolves a black-height deficit ("double black") at `x`.
///
/// Walks toward the root while the deficit can only be pushed up; a red
/// sibling is first rotated out of the way, and a black sibling with a red
/// child settles it with one or two rotations.
pub fn fix_double_black<N: RbNodeLike>(arena: &mut [N], root: &mut Option<u32>, mut x: u32) {
    loop {
        let Some(parent) = get_p(arena, x) else {
            return;
        };
        let Some(s) = sibling(arena, x) else {
            trace!(node = x, parent, "double black: no sibling, climb");
            x = parent;
            continue;
        };

        if is_red(arena, Some(s)) {
            trace!(node = x, sibling = s, "double black: red sibling");
            set_color(arena, parent, Color::Red);
            set_color(arena, s, Color::Black);
            if is_left_child(arena, s) {
                rotate_right(arena, root, parent);
            } else {
                rotate_left(arena, root, parent);
            }
            continue;
        }

        if has_red_child(arena, s) {
            let parent_color = arena[parent as usize].color();
            let sibling_color = arena[s as usize].color();
            let sl = get_l(arena, s);
            if let Some(sl) = sl.filter(|&sl| is_red(arena, Some(sl))) {
                if is_left_child(arena, s) {
                    trace!(node = x, sibling = s, "double black: left-left");
                    set_color(arena, sl, sibling_color);
                    set_color(arena, s, parent_color);
                    rotate_right(arena, root, parent);
                } else {
                    trace!(node = x, sibling = s, "double black: right-left");
                    set_color(arena, sl, parent_color);
                    rotate_right(arena, root, s);
                    rotate_left(arena, root, parent);
                }
            } else if let Some(sr) = get_r(arena, s) {
                if is_left_child(arena, s) {
                    trace!(node = x, sibling = s, "double black: left-right");
                    set_color(arena, sr, parent_color);
                    rotate_left(arena, root, s);
                    rotate_right(arena, root, parent);
                } else {
                    trace!(node = x, sibling = s, "double black: right-right");
                    set_color(arena, sr, sibling_color);
                    set_color(arena, s, parent_color);
                    rotate_left(arena, root, parent);
                }
            }
            set_color(arena, parent, Color::Black);
            return;
        }

        trace!(node = x, sibling = s, "double black: black sibling, black nephews");
        set_color(arena, s, Color::Red);
        if is_black(arena, Some(parent)) {
            x = parent;
            continue;
        }
        set_color(arena, parent, Color::Black);
        return;
    }
}
