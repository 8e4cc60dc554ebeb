use std::cmp::Ordering;

use tracing::trace;

use crate::error::TreeError;
use crate::types::{Color, KeyNode, RbNodeLike};
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

use super::query::{is_black, is_left_child, is_red, set_color, swap_colors, uncle};
use super::rotate::{rotate_left, rotate_right};

/// Largest arena an `Option<u32>` link can address.
pub const MAX_NODES: usize = u32::MAX as usize;

/// BST descent. Returns the last node visited and how `key` compares to it.
fn descend<N>(arena: &[N], root: Option<u32>, key: &N::Key) -> Option<(u32, Ordering)>
where
    N: KeyNode,
    N::Key: Ord,
{
    let mut curr = root?;
    loop {
        let cmp = key.cmp(arena[curr as usize].key());
        let next = match cmp {
            Ordering::Less => get_l(arena, curr),
            Ordering::Equal => return Some((curr, cmp)),
            Ordering::Greater => get_r(arena, curr),
        };
        match next {
            Some(next) => curr = next,
            None => return Some((curr, cmp)),
        }
    }
}

/// Node holding `key`, or the node a new `key` would attach under.
///
/// `None` only for an empty tree. Compare the returned node's key to tell the
/// two outcomes apart.
pub fn search<N>(arena: &[N], root: Option<u32>, key: &N::Key) -> Option<u32>
where
    N: KeyNode,
    N::Key: Ord,
{
    descend(arena, root, key).map(|(i, _)| i)
}

/// Exact-match lookup.
pub fn find<N>(arena: &[N], root: Option<u32>, key: &N::Key) -> Option<u32>
where
    N: KeyNode,
    N::Key: Ord,
{
    match descend(arena, root, key) {
        Some((i, Ordering::Equal)) => Some(i),
        _ => None,
    }
}

/// Links `node` into the tree and rebalances.
///
/// Returns the arena index of the new node, or `None` when an equal key is
/// already stored (the tree is untouched and `node` is dropped). Arena growth
/// is attempted before anything is linked, so an error leaves the tree as it
/// was.
pub fn insert<N>(arena: &mut Vec<N>, root: &mut Option<u32>, mut node: N) -> Result<Option<u32>, TreeError>
where
    N: RbNodeLike,
    N::Key: Ord,
{
    let attach = match descend(arena, *root, node.key()) {
        Some((_, Ordering::Equal)) => return Ok(None),
        other => other,
    };

    if arena.len() >= MAX_NODES {
        return Err(TreeError::CapacityExceeded { max: MAX_NODES });
    }
    arena.try_reserve(1)?;

    node.set_p(None);
    node.set_l(None);
    node.set_r(None);
    let n = arena.len() as u32;

    let Some((p, side)) = attach else {
        node.set_color(Color::Black);
        arena.push(node);
        *root = Some(n);
        return Ok(Some(n));
    };

    node.set_color(Color::Red);
    arena.push(node);
    set_p(arena, n, Some(p));
    if side == Ordering::Less {
        set_l(arena, p, Some(n));
    } else {
        set_r(arena, p, Some(n));
    }
    fix_red_red(arena, root, n);
    Ok(Some(n))
}

/// Restores the red-black invariants after red node `x` was linked in.
///
/// Walks toward the root while the uncle is red; any other configuration is
/// settled with at most two rotations.
pub fn fix_red_red<N: RbNodeLike>(arena: &mut [N], root: &mut Option<u32>, mut x: u32) {
    loop {
        let Some(parent) = get_p(arena, x) else {
            set_color(arena, x, Color::Black);
            return;
        };
        if is_black(arena, Some(parent)) {
            return;
        }
        // A red parent is never the root, so the grandparent exists.
        let Some(grandparent) = get_p(arena, parent) else {
            set_color(arena, parent, Color::Black);
            return;
        };

        let u = uncle(arena, x);
        if is_red(arena, u) {
            trace!(node = x, grandparent, "red-red: red uncle, recolor and climb");
            set_color(arena, parent, Color::Black);
            if let Some(u) = u {
                set_color(arena, u, Color::Black);
            }
            set_color(arena, grandparent, Color::Red);
            x = grandparent;
            continue;
        }

        if is_left_child(arena, parent) {
            if is_left_child(arena, x) {
                trace!(node = x, grandparent, "red-red: left-left");
                swap_colors(arena, parent, grandparent);
            } else {
                trace!(node = x, grandparent, "red-red: left-right");
                rotate_left(arena, root, parent);
                swap_colors(arena, x, grandparent);
            }
            rotate_right(arena, root, grandparent);
        } else {
            if is_left_child(arena, x) {
                trace!(node = x, grandparent, "red-red: right-left");
                rotate_right(arena, root, parent);
                swap_colors(arena, x, grandparent);
            } else {
                trace!(node = x, grandparent, "red-red: right-right");
                swap_colors(arena, parent, grandparent);
            }
            rotate_left(arena, root, grandparent);
        }
        return;
    }
}
