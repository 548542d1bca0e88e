//! Identification of nodes in a graph.
//!
//! Users address nodes by their key (an integer label for generated graphs, a
//! location name for geographic graphs). Internally, every node also has a
//! dense [`NodeId`] that is equal to its position in the node list the graph
//! was constructed from, so algorithms can index contiguous arrays instead of
//! hashing keys.

use std::{fmt, hash::Hash};

/// Requirements on the user-facing node key.
///
/// Implemented automatically for every type that satisfies the bounds, most
/// notably `usize` and `String`.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Dense index of a node within a particular graph.
///
/// IDs are only meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
