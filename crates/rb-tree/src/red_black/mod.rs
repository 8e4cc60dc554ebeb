//! Red-black balancing engine over an index arena.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`query`] | sibling / uncle / successor / replacement lookups |
//! | [`rotate`] | `rotate_left`, `rotate_right` |
//! | [`insert`] | search descent, `insert`, red-red fixup |
//! | [`remove`] | `remove`, double-black fixup |
//! | [`validate`] | invariant checker, black height |
//!
//! Every mutating function takes the root slot as `&mut Option<u32>` and
//! rebinds it when the root changes.

pub mod insert;
pub mod query;
pub mod remove;
pub mod rotate;
pub mod validate;

pub use insert::{find, fix_red_red, insert, search, MAX_NODES};
pub use query::{has_red_child, is_left_child, replacement, sibling, successor, uncle};
pub use remove::{fix_double_black, remove};
pub use rotate::{rotate_left, rotate_right};
pub use validate::{assert_red_black_tree, black_height};
