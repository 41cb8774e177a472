//! Index handles into a parsed scene's node list

use std::fmt;

/// Position of a node in declaration order.
///
/// Nodes are owned by a flat `Vec`; the tree pass refers to them only
/// through these indices, never through references.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// Create a handle from a raw list position
    pub fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw list position
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
