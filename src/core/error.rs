use std::fmt;

use thiserror::Error;

/// Malformed or out-of-range input for constructing a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer nodes were requested than the generator supports.
    #[error("at least {min} nodes are required, got {count}")]
    TooFewNodes { count: usize, min: usize },

    /// The pairs of the requested nodes cannot be enumerated in a `usize`.
    #[error("pairs of {count} nodes do not fit in the address space")]
    TooManyNodes { count: usize },

    /// More edges were requested than a simple graph on the nodes can hold.
    #[error("{requested} edges requested, but a simple graph on {nodes} nodes has at most {max}")]
    TooManyEdges {
        requested: usize,
        nodes: usize,
        max: usize,
    },

    /// The same node key was supplied twice.
    #[error("node `{key}` is listed more than once")]
    DuplicateNode { key: String },

    /// An edge could not be added.
    #[error("edge between `{from}` and `{to}` rejected: {kind}")]
    Edge {
        from: String,
        to: String,
        kind: EdgeErrorKind,
    },
}

impl ValidationError {
    pub(crate) fn edge(from: &impl fmt::Display, to: &impl fmt::Display, kind: EdgeErrorKind) -> Self {
        Self::Edge {
            from: from.to_string(),
            to: to.to_string(),
            kind,
        }
    }

    /// Returns the reason of an edge rejection, if this is one.
    pub fn edge_kind(&self) -> Option<EdgeErrorKind> {
        match self {
            ValidationError::Edge { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    MultiEdge,
    InvalidWeight,
}

impl fmt::Display for EdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EdgeErrorKind::SourceAbsent => "source does not exist",
            EdgeErrorKind::DestinationAbsent => "destination does not exist",
            EdgeErrorKind::SelfLoop => "self-loops are not allowed in a simple graph",
            EdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
            EdgeErrorKind::InvalidWeight => "weight must be finite and non-negative",
        };
        f.write_str(reason)
    }
}

/// A path query referenced a node that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node `{key}` does not exist in the graph")]
pub struct NotFoundError {
    pub key: String,
}

impl NotFoundError {
    pub fn new(key: &impl fmt::Display) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

/// Any error produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(#[from] NotFoundError),
}
