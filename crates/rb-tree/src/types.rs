//! Node trait definitions and the concrete red-black node.
//!
//! Nodes live in a [`Vec`]-backed arena and every link is an `Option<u32>`
//! index into it. All tree-manipulation functions take the arena (as a slice,
//! or as `&mut Vec<N>` when they allocate or release) and work with indices.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node carrying an ordered key.
///
/// The key is an associated type rather than a trait parameter so that
/// arena functions generic over `N` never need the key spelled out.
pub trait KeyNode: Node {
    type Key;

    fn key(&self) -> &Self::Key;
    fn key_mut(&mut self) -> &mut Self::Key;
}

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike: KeyNode {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color().is_black()
    }

    fn is_red(&self) -> bool {
        self.color().is_red()
    }
}

/// Red-black tree node.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// A detached red node.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }

    pub fn into_key(self) -> K {
        self.k
    }
}

impl<K> Node for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode for RbNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

impl<K> RbNodeLike for RbNode<K> {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
