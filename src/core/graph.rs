//! Immutable simple undirected graph.
//!
//! A [`Graph`] is built once from an explicit node list and an explicit edge
//! list. Construction validates the input against the rules of a [simple
//! graph]: every edge must connect two distinct nodes that are present in the
//! node list, and an unordered pair of nodes can be connected at most once.
//! After construction the graph offers read access only.
//!
//! [simple graph]: https://en.wikipedia.org/wiki/Graph_(discrete_mathematics)#Graph
//!
//! # Examples
//!
//! ```
//! use geograph::core::Graph;
//!
//! let graph = Graph::new(["A", "B", "C"], [("A", "B", 1.0), ("B", "C", 2.5)]).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//!
//! let mut neighbors = graph.neighbors(&"B").unwrap().collect::<Vec<_>>();
//! neighbors.sort_by(|a, b| a.0.cmp(b.0));
//! assert_eq!(neighbors, vec![(&"A", 1.0), (&"C", 2.5)]);
//! ```

use std::{borrow::Borrow, hash::Hash};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use crate::geo::Coordinate;

use super::{
    error::{EdgeErrorKind, ValidationError},
    id::{NodeId, NodeKey},
    weight::{is_valid_weight, DEFAULT_WEIGHT},
};

/// A node with its key and an optional geographic position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<K> {
    key: K,
    #[serde(skip_serializing_if = "Option::is_none")]
    coord: Option<Coordinate>,
}

impl<K> Node<K> {
    pub fn new(key: K) -> Self {
        Self { key, coord: None }
    }

    pub fn with_coord(key: K, coord: Coordinate) -> Self {
        Self {
            key,
            coord: Some(coord),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn coord(&self) -> Option<Coordinate> {
        self.coord
    }
}

impl<K> From<K> for Node<K> {
    fn from(key: K) -> Self {
        Node::new(key)
    }
}

/// An undirected weighted edge. The endpoints are kept in the order they were
/// supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    weight: f64,
}

impl Edge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Entry of the adjacency list of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: f64,
}

/// Immutable simple undirected graph. See [module](self) documentation.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    nodes: Vec<Node<K>>,
    index: FxHashMap<K, NodeId>,
    edges: Vec<Edge>,
    adj: Vec<Vec<Neighbor>>,
}

impl<K: NodeKey> Graph<K> {
    /// Builds a graph from nodes and weighted edges `(from, to, weight)`.
    ///
    /// The node order is preserved and determines the [`NodeId`]s and the
    /// row order of derived reports.
    pub fn new<N, I, E>(nodes: I, edges: E) -> Result<Self, ValidationError>
    where
        N: Into<Node<K>>,
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (K, K, f64)>,
    {
        let nodes = nodes.into_iter().map(Into::into).collect::<Vec<Node<K>>>();

        let mut index = FxHashMap::default();
        index.reserve(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.key.clone(), NodeId::new(i)).is_some() {
                return Err(ValidationError::DuplicateNode {
                    key: node.key.to_string(),
                });
            }
        }

        let mut graph = Graph {
            adj: vec![Vec::new(); nodes.len()],
            nodes,
            index,
            edges: Vec::new(),
        };

        let mut seen = FxHashSet::default();

        for (from, to, weight) in edges {
            let u = graph
                .id_of(&from)
                .ok_or_else(|| ValidationError::edge(&from, &to, EdgeErrorKind::SourceAbsent))?;
            let v = graph
                .id_of(&to)
                .ok_or_else(|| ValidationError::edge(&from, &to, EdgeErrorKind::DestinationAbsent))?;

            if u == v {
                return Err(ValidationError::edge(&from, &to, EdgeErrorKind::SelfLoop));
            }

            if !is_valid_weight(weight) {
                return Err(ValidationError::edge(&from, &to, EdgeErrorKind::InvalidWeight));
            }

            if !seen.insert((u.min(v), u.max(v))) {
                return Err(ValidationError::edge(&from, &to, EdgeErrorKind::MultiEdge));
            }

            graph.edges.push(Edge { from: u, to: v, weight });
            graph.adj[u.index()].push(Neighbor { id: v, weight });
            graph.adj[v.index()].push(Neighbor { id: u, weight });
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph constructed"
        );

        Ok(graph)
    }

    /// Builds a graph where every edge has the [default
    /// weight](DEFAULT_WEIGHT).
    pub fn unweighted<N, I, E>(nodes: I, edges: E) -> Result<Self, ValidationError>
    where
        N: Into<Node<K>>,
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (K, K)>,
    {
        Self::new(
            nodes,
            edges
                .into_iter()
                .map(|(from, to)| (from, to, DEFAULT_WEIGHT)),
        )
    }

    /// Returns the ID of the node with given key.
    pub fn id_of<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the neighbors of the node with given key together with the
    /// weight of the connecting edge, or `None` if the node does not exist.
    pub fn neighbors<Q>(&self, key: &Q) -> Option<impl Iterator<Item = (&K, f64)> + '_>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.id_of(key)?;
        Some(
            self.neighbors_by_id(id)
                .iter()
                .map(|neighbor| (&self.nodes[neighbor.id.index()].key, neighbor.weight)),
        )
    }

    /// Returns `true` if there is an edge between the two nodes.
    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.id_of(from), self.id_of(to)) {
            (Some(u), Some(v)) => self.neighbors_by_id(u).iter().any(|n| n.id == v),
            _ => false,
        }
    }
}

impl<K> Graph<K> {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in the order they were supplied at construction.
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Edges in the order they were supplied at construction.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges as `(from, to, weight)` triples of keys.
    pub fn edge_triples(&self) -> impl Iterator<Item = (&K, &K, f64)> + '_ {
        self.edges.iter().map(|edge| {
            (
                &self.nodes[edge.from.index()].key,
                &self.nodes[edge.to.index()].key,
                edge.weight,
            )
        })
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.index())
    }

    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(Node::key)
    }

    /// Adjacency list of the node. Empty for an unknown ID.
    pub fn neighbors_by_id(&self, id: NodeId) -> &[Neighbor] {
        self.adj.get(id.index()).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of edges incident to the node. Zero for an unknown ID.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors_by_id(id).len()
    }
}
