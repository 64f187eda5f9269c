//! Dense index types for [`Graph`](super::Graph).

use std::fmt;

/// Index of a node inside one [`Graph`](super::Graph).
///
/// Indices are only meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of an edge inside one [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIx(usize);

impl EdgeIx {
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
