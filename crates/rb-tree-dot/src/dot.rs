//! Graphviz rendering.
//!
//! Only reads the tree through [`RbTree::root`] and [`NodeRef`] accessors.

use std::fmt::Display;
use std::io::{self, Write};

use rb_tree::{NodeRef, RbTree};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotError {
    #[error("failed to write DOT output: {0}")]
    Io(#[from] io::Error),
}

/// Renders `tree` as a `digraph BST`.
///
/// Edges are emitted in pre-order. Absent children become point-shaped
/// `nullN` placeholders, numbered from 0 within this call. Red nodes get an
/// extra `[color=red]` declaration.
pub fn write_dot<K, W>(tree: &RbTree<K>, out: &mut W) -> Result<(), DotError>
where
    K: Display,
    W: Write,
{
    writeln!(out, "digraph BST {{")?;
    writeln!(out, "    node [fontname=\"Arial\"];")?;

    match tree.root() {
        None => writeln!(out)?,
        Some(root) if root.left().is_none() && root.right().is_none() => {
            writeln!(out, "    {};", root.key())?
        }
        Some(root) => {
            let mut nulls = 0;
            write_node(root, &mut nulls, out)?;
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

fn write_node<K, W>(node: NodeRef<'_, K>, nulls: &mut usize, out: &mut W) -> io::Result<()>
where
    K: Display,
    W: Write,
{
    let key = node.key();
    if node.is_red() {
        writeln!(out, "    {key} [color=red];")?;
    }
    for child in [node.left(), node.right()] {
        match child {
            Some(child) => {
                writeln!(out, "    {key} -> {};", child.key())?;
                write_node(child, nulls, out)?;
            }
            None => {
                writeln!(out, "    null{nulls} [shape=point];")?;
                writeln!(out, "    {key} -> null{nulls};")?;
                *nulls += 1;
            }
        }
    }
    Ok(())
}

/// [`write_dot`] into a `String`.
pub fn to_dot<K: Display>(tree: &RbTree<K>) -> String {
    let mut buf = Vec::new();
    // Writes into a `Vec<u8>` cannot fail.
    let _ = write_dot(tree, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
