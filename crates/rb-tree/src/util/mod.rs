//! Arena link helpers and in-order navigation.
//!
//! Everything here is color-agnostic and works for any [`Node`] layout.

pub mod print;

use crate::types::{KeyNode, Node};

pub use print::print;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points `p`'s link that currently holds `old` at `new` instead.
#[inline]
pub(crate) fn relink_child<N: Node>(arena: &mut [N], p: u32, old: u32, new: Option<u32>) {
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
}

/// Exchanges the keys held by two nodes; links and colors stay put.
pub fn swap_keys<N: KeyNode>(arena: &mut [N], a: u32, b: u32) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(head[lo as usize].key_mut(), tail[0].key_mut());
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    //     2
    //    / \
    //   1   4
    //      /
    //     3
    fn sample() -> (Vec<RbNode<i32>>, Option<u32>) {
        let mut arena: Vec<RbNode<i32>> = [2, 1, 4, 3].into_iter().map(RbNode::new).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[2].l = Some(3);
        arena[3].p = Some(2);
        (arena, Some(0))
    }

    #[test]
    fn navigation_walks_in_order() {
        let (arena, root) = sample();
        let mut keys = Vec::new();
        let mut curr = first(&arena, root);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = next(&arena, i);
        }
        assert_eq!(keys, vec![1, 2, 3, 4]);

        let mut keys = Vec::new();
        let mut curr = last(&arena, root);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = prev(&arena, i);
        }
        assert_eq!(keys, vec![4, 3, 2, 1]);
    }

    #[test]
    fn size_and_height() {
        let (arena, root) = sample();
        assert_eq!(size(&arena, root), 4);
        assert_eq!(height(&arena, root), 3);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(height(&arena, None), 0);
    }

    #[test]
    fn swap_keys_leaves_links_alone() {
        let (mut arena, _) = sample();
        swap_keys(&mut arena, 3, 0);
        assert_eq!(arena[0].k, 3);
        assert_eq!(arena[3].k, 2);
        assert_eq!(arena[0].l, Some(1));
        assert_eq!(arena[3].p, Some(2));
        swap_keys(&mut arena, 1, 1);
        assert_eq!(arena[1].k, 1);
    }
}
