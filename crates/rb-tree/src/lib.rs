//! Arena-backed red-black tree.
//!
//! An ordered key index with O(log n) insert, search and delete. Nodes are
//! kept in a `Vec` arena and every link is an `Option<u32>` index into it, so
//! the parent back-references need no shared ownership.
//!
//! ```
//! use rb_tree::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(root.color(), Color::Black);
//!
//! assert!(tree.delete_by_key(&10));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![20, 30]);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`], [`KeyNode`], [`RbNodeLike`] traits and [`RbNode`] |
//! | [`util`] | arena link helpers, `first` / `next` / `size`, debug printer |
//! | [`red_black`] | rotations, structural queries, insert / remove and both fixups |
//! | [`tree`] | [`RbTree`] handle, [`NodeRef`], in-order [`Iter`] |
//! | [`error`] | [`TreeError`], [`InvariantViolation`] |

pub mod error;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use error::{InvariantViolation, TreeError};
pub use tree::{Iter, NodeRef, RbTree};
pub use types::{Color, KeyNode, Node, RbNode, RbNodeLike};
