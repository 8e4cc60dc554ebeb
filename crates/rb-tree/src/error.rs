use std::collections::TryReserveError;

use thiserror::Error;

/// Failure to grow the tree.
///
/// Both variants are raised before the new node is linked in, so the tree is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("failed to allocate a tree node: {0}")]
    AllocationFailed(#[from] TryReserveError),
    #[error("tree already holds the maximum of {max} nodes")]
    CapacityExceeded { max: usize },
}

/// First red-black or ordering invariant found broken by
/// [`assert_red_black_tree`](crate::red_black::assert_red_black_tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("red node {node} has a red child {child}")]
    RedRed { node: u32, child: u32 },
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("child {child} of node {node} links back to {found:?}")]
    BrokenParentLink {
        node: u32,
        child: u32,
        found: Option<u32>,
    },
    #[error("node {0} is not strictly greater than its in-order predecessor")]
    OrderViolation(u32),
}
