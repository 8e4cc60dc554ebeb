use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{InvariantViolation, TreeError};
use crate::red_black;
use crate::types::{Color, RbNode};
use crate::util::{self, first, next};

/// Ordered set of keys kept in a red-black tree.
///
/// Nodes live in an arena owned by the tree; the tree handle also owns the
/// root slot, so rotations and deletions rebind it in place.
pub struct RbTree<K> {
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node_ref(self.root)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Nodes on the longest root-to-leaf path; `0` for an empty tree.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Black nodes on any path from the root down to an absent child, not
    /// counting the root itself.
    pub fn black_height(&self) -> usize {
        red_black::black_height(&self.arena, self.root)
    }

    /// Ascending walk over the keys. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
            remaining: self.arena.len(),
        }
    }

    fn node_ref(&self, idx: Option<u32>) -> Option<NodeRef<'_, K>> {
        idx.map(|idx| NodeRef {
            arena: &self.arena,
            idx,
        })
    }
}

impl<K: Ord> RbTree<K> {
    pub fn from_keys<I>(keys: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// The node holding `key`, or the node a new `key` would hang under.
    ///
    /// Returns `None` only for an empty tree; compare [`NodeRef::key`] with
    /// `key` to tell a hit from an insertion point.
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node_ref(red_black::search(&self.arena, self.root, key))
    }

    pub fn get(&self, key: &K) -> Option<&K> {
        red_black::find(&self.arena, self.root, key).map(|i| &self.arena[i as usize].k)
    }

    pub fn contains(&self, key: &K) -> bool {
        red_black::find(&self.arena, self.root, key).is_some()
    }

    /// Inserts `key`. Returns `Ok(false)` and leaves the tree untouched when
    /// an equal key is already stored.
    pub fn insert(&mut self, key: K) -> Result<bool, TreeError> {
        let inserted = red_black::insert(&mut self.arena, &mut self.root, RbNode::new(key))?;
        debug!(inserted = inserted.is_some(), len = self.len(), "insert");
        Ok(inserted.is_some())
    }

    /// Removes `key` if present; reports whether it was.
    pub fn delete_by_key(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let Some(v) = red_black::find(&self.arena, self.root, key) else {
            debug!(len = self.len(), "delete: key absent");
            return None;
        };
        let removed = red_black::remove(&mut self.arena, &mut self.root, v);
        debug!(len = self.len(), "delete");
        Some(removed.into_key())
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        red_black::assert_red_black_tree(&self.arena, self.root)
    }
}

impl<K: fmt::Debug> RbTree<K> {
    /// Multi-line structure dump with node indices and colors.
    pub fn dump(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only view of one node and its links.
pub struct NodeRef<'a, K> {
    arena: &'a [RbNode<K>],
    idx: u32,
}

impl<'a, K> NodeRef<'a, K> {
    fn node(&self) -> &'a RbNode<K> {
        &self.arena[self.idx as usize]
    }

    fn at(&self, idx: Option<u32>) -> Option<NodeRef<'a, K>> {
        idx.map(|idx| NodeRef {
            arena: self.arena,
            idx,
        })
    }

    pub fn key(&self) -> &'a K {
        &self.node().k
    }

    pub fn color(&self) -> Color {
        self.node().c
    }

    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color().is_black()
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().l)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().r)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.at(self.node().p)
    }

    /// Arena slot of this node; stable only until the tree is next mutated.
    pub fn index(&self) -> u32 {
        self.idx
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.idx)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

/// In-order key iterator, see [`RbTree::iter`].
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        self.remaining -= 1;
        Some(&self.arena[i as usize].k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}
