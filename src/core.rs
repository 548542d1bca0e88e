//! The graph model shared by all algorithms: identifiers, weights, errors and
//! the immutable [`Graph`] itself.

pub mod error;
pub mod facts;
pub mod graph;
pub mod id;
pub mod weight;

pub use error::{EdgeErrorKind, Error, NotFoundError, ValidationError};
pub use graph::{Edge, Graph, Neighbor, Node};
pub use id::{NodeId, NodeKey};
