use crate::error::InvariantViolation;
use crate::types::RbNodeLike;
use crate::util::{first, get_l, get_r, next};

/// Checks parent links, coloring, black height and strict key order.
///
/// Reports the first violation encountered.
pub fn assert_red_black_tree<N>(arena: &[N], root: Option<u32>) -> Result<(), InvariantViolation>
where
    N: RbNodeLike,
    N::Key: Ord,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err(InvariantViolation::RootHasParent(root));
    }
    if arena[root as usize].is_red() {
        return Err(InvariantViolation::RedRoot(root));
    }

    fn check_subtree<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);

        for child in [l, r].into_iter().flatten() {
            let found = arena[child as usize].p();
            if found != Some(node) {
                return Err(InvariantViolation::BrokenParentLink { node, child, found });
            }
            if arena[node as usize].is_red() && arena[child as usize].is_red() {
                return Err(InvariantViolation::RedRed { node, child });
            }
        }

        let left = check_subtree(arena, l)?;
        let right = check_subtree(arena, r)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
        }

        Ok(left + usize::from(arena[node as usize].is_black()))
    }

    check_subtree(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].key() >= arena[i as usize].key() {
                return Err(InvariantViolation::OrderViolation(i));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Black nodes on the leftmost path below `node`, not counting `node`.
pub fn black_height<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let mut count = 0;
    let mut curr = get_l(arena, node);
    while let Some(i) = curr {
        if arena[i as usize].is_black() {
            count += 1;
        }
        curr = get_l(arena, i);
    }
    count
}
