use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_tree::{InvariantViolation, RbTree, TreeError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::dot::{write_dot, DotError};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Dot(#[from] DotError),
    #[error("tree left invalid after delete: {0}")]
    Invalid(#[from] InvariantViolation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub before: PathBuf,
    pub after: PathBuf,
    pub deleted: i64,
    pub was_present: bool,
    pub len_before: usize,
    pub len_after: usize,
}

/// Seeds a tree, renders it, deletes one key and renders it again.
pub fn run(config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);
    let mut tree = RbTree::new();
    for _ in 0..config.count {
        tree.insert(rng.gen_range(0..config.max_key))?;
    }
    let len_before = tree.len();
    info!(
        drawn = config.count,
        stored = len_before,
        height = tree.height(),
        "seeded tree"
    );
    debug!(keys = ?tree, "in order");

    let deleted = match config.delete {
        Some(key) => key,
        None => tree.iter().nth(len_before / 2).copied().unwrap_or(0),
    };

    let before = config.out_dir.join("before_delete.dot");
    write_file(&tree, &before)?;

    let was_present = tree.delete_by_key(&deleted);
    tree.validate()?;
    let len_after = tree.len();
    info!(key = deleted, was_present, stored = len_after, "deleted");
    debug!(keys = ?tree, "in order");

    let after = config.out_dir.join("after_delete.dot");
    write_file(&tree, &after)?;

    Ok(DemoReport {
        before,
        after,
        deleted,
        was_present,
        len_before,
        len_after,
    })
}

fn write_file(tree: &RbTree<i64>, path: &Path) -> Result<(), DotError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(tree, &mut out)?;
    out.flush()?;
    debug!(path = %path.display(), "wrote DOT file");
    Ok(())
}
