//! Graphviz DOT export for [`rb_tree::RbTree`], and the demo built on it.
//!
//! ```
//! use rb_tree::RbTree;
//! use rb_tree_dot::to_dot;
//!
//! let tree = RbTree::from_keys([2, 1, 3]).unwrap();
//! assert!(to_dot(&tree).contains("    2 -> 1;"));
//! ```

pub mod config;
pub mod demo;
pub mod dot;

pub use config::{ConfigError, DemoConfig, USAGE};
pub use demo::{run, DemoError, DemoReport};
pub use dot::{to_dot, write_dot, DotError};
