//! Rotation primitives.
//!
//! Both keep the in-order sequence and every touched parent link intact.
//! Colors are the caller's business.

use tracing::trace;

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, relink_child, set_l, set_p, set_r};

/// Puts `y` into `x`'s slot (parent link or root) and hangs `x` below it.
fn move_down<N: Node>(arena: &mut [N], root: &mut Option<u32>, x: u32, y: u32) {
    let p = get_p(arena, x);
    match p {
        Some(p) => relink_child(arena, p, x, Some(y)),
        None => *root = Some(y),
    }
    set_p(arena, y, p);
    set_p(arena, x, Some(y));
}

/// `x`'s right child takes its place; `x` becomes that node's left child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: &mut Option<u32>, x: u32) {
    let Some(y) = get_r(arena, x) else {
        debug_assert!(false, "rotate_left on node {x} without a right child");
        return;
    };
    trace!(pivot = x, up = y, "rotate left");
    move_down(arena, root, x, y);
    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    set_l(arena, y, Some(x));
}

/// `x`'s left child takes its place; `x` becomes that node's right child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: &mut Option<u32>, x: u32) {
    let Some(y) = get_l(arena, x) else {
        debug_assert!(false, "rotate_right on node {x} without a left child");
        return;
    };
    trace!(pivot = x, up = y, "rotate right");
    move_down(arena, root, x, y);
    let yr = get_r(arena, y);
    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    set_r(arena, y, Some(x));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;
    use crate::util::{first, next};

    fn keys(arena: &[RbNode<char>], root: Option<u32>) -> String {
        let mut out = String::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].k);
            curr = next(arena, i);
        }
        out
    }

    //     b            d
    //    / \          / \
    //   a   d   <->  b   e
    //      / \      / \
    //     c   e    a   c
    fn left_heavy_candidate() -> Vec<RbNode<char>> {
        let mut arena: Vec<RbNode<char>> = "bdace".chars().map(RbNode::new).collect();
        arena[0].l = Some(2);
        arena[0].r = Some(1);
        arena[2].p = Some(0);
        arena[1].p = Some(0);
        arena[1].l = Some(3);
        arena[1].r = Some(4);
        arena[3].p = Some(1);
        arena[4].p = Some(1);
        arena
    }

    #[test]
    fn rotate_left_at_root_rebinds_root() {
        let mut arena = left_heavy_candidate();
        let mut root = Some(0);
        rotate_left(&mut arena, &mut root, 0);

        assert_eq!(root, Some(1));
        assert_eq!(arena[1].p, None);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[0].p, Some(1));
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(keys(&arena, root), "abcde");
    }

    #[test]
    fn rotate_right_undoes_rotate_left() {
        let mut arena = left_heavy_candidate();
        let mut root = Some(0);
        rotate_left(&mut arena, &mut root, 0);
        rotate_right(&mut arena, &mut root, 1);

        assert_eq!(root, Some(0));
        assert_eq!(arena[0].p, None);
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[0].r, Some(1));
        assert_eq!(arena[1].l, Some(3));
        assert_eq!(arena[3].p, Some(1));
        assert_eq!(keys(&arena, root), "abcde");
    }

    #[test]
    fn rotation_below_root_relinks_parent() {
        // Hang the sample under a new root `z` and rotate its subtree.
        let mut arena = left_heavy_candidate();
        arena.push(RbNode::new('z'));
        arena[5].l = Some(0);
        arena[0].p = Some(5);
        let mut root = Some(5);

        rotate_left(&mut arena, &mut root, 0);

        assert_eq!(root, Some(5));
        assert_eq!(arena[5].l, Some(1));
        assert_eq!(arena[1].p, Some(5));
        assert_eq!(keys(&arena, root), "abcdez");
    }
}
