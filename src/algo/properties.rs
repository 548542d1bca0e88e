//! Structural properties of a graph: the degree of every node and the
//! [adjacency matrix].
//!
//! Both reports follow the node order the graph was constructed with.
//!
//! [adjacency matrix]: https://en.wikipedia.org/wiki/Adjacency_matrix
//!
//! # Examples
//!
//! ```
//! use geograph::{algo::Properties, core::Graph};
//!
//! let graph = Graph::unweighted(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
//! let props = Properties::of(&graph);
//!
//! assert_eq!(props.degrees.get(&"b"), Some(2));
//! assert_eq!(props.degrees.total(), 2 * graph.edge_count());
//! assert!(props.adjacency.get(0, 1));
//! assert!(!props.adjacency.get(0, 2));
//! ```

use std::{borrow::Borrow, fmt};

use bitvec::vec::BitVec;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::core::{
    facts::{complete_graph_edge_count, pair_index},
    graph::Graph,
    id::NodeKey,
};

/// Degree and adjacency reports of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Properties<K> {
    pub degrees: DegreeReport<K>,
    pub adjacency: AdjacencyMatrix<K>,
}

impl<K: NodeKey> Properties<K> {
    pub fn of(graph: &Graph<K>) -> Self {
        Self {
            degrees: DegreeReport::of(graph),
            adjacency: AdjacencyMatrix::of(graph),
        }
    }
}

/// Computes the [`Properties`] of a graph.
pub fn compute_properties<K: NodeKey>(graph: &Graph<K>) -> Properties<K> {
    Properties::of(graph)
}

/// Number of incident edges of every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeReport<K> {
    entries: Vec<DegreeEntry<K>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry<K> {
    pub node: K,
    pub degree: usize,
}

impl<K: NodeKey> DegreeReport<K> {
    pub fn of(graph: &Graph<K>) -> Self {
        let entries = graph
            .node_ids()
            .zip(graph.nodes())
            .map(|(id, node)| DegreeEntry {
                node: node.key().clone(),
                degree: graph.degree(id),
            })
            .collect();

        Self { entries }
    }

    pub fn get<Q>(&self, node: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| Borrow::<Q>::borrow(&entry.node) == node)
            .map(|entry| entry.degree)
    }
}

impl<K> DegreeReport<K> {
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> + '_ {
        self.entries.iter().map(|entry| (&entry.node, entry.degree))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all degrees. Equals twice the edge count ([handshaking lemma]).
    ///
    /// [handshaking lemma]: https://en.wikipedia.org/wiki/Handshaking_lemma
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.degree).sum()
    }

    pub fn max(&self) -> Option<usize> {
        self.entries.iter().map(|entry| entry.degree).max()
    }

    /// Nodes without any incident edge.
    pub fn isolated(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.degree == 0)
            .map(|entry| &entry.node)
    }
}

impl<K: fmt::Display> fmt::Display for DegreeReport<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self
            .entries
            .iter()
            .map(|entry| entry.node.to_string())
            .collect::<Vec<_>>();
        let width = labels
            .iter()
            .map(String::len)
            .chain(["Node".len()])
            .max()
            .unwrap_or_default();

        writeln!(f, "{:<width$}  Degree", "Node")?;
        for (label, entry) in labels.iter().zip(&self.entries) {
            writeln!(f, "{label:<width$}  {}", entry.degree)?;
        }
        Ok(())
    }
}

/// Dense 0/1 adjacency matrix of a simple undirected graph.
///
/// Only the strict lower triangle is stored, one bit per unordered pair of
/// nodes, so the matrix is symmetric with a zero diagonal by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<K> {
    labels: Vec<K>,
    bits: BitVec,
}

impl<K: NodeKey> AdjacencyMatrix<K> {
    pub fn of(graph: &Graph<K>) -> Self {
        let mut bits = BitVec::repeat(false, complete_graph_edge_count(graph.node_count()));

        for edge in graph.edges() {
            bits.set(pair_index(edge.from().index(), edge.to().index()), true);
        }

        Self {
            labels: graph.nodes().iter().map(|node| node.key().clone()).collect(),
            bits,
        }
    }
}

impl<K> AdjacencyMatrix<K> {
    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.labels.len()
    }

    /// Row and column labels.
    pub fn labels(&self) -> &[K] {
        &self.labels
    }

    /// Returns `true` if nodes at positions `row` and `col` are adjacent.
    /// Positions out of range are never adjacent.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row == col || row >= self.order() || col >= self.order() {
            return false;
        }

        self.bits
            .get(pair_index(row, col))
            .map_or(false, |bit| *bit)
    }

    /// The matrix entry as a number, `1` for adjacent nodes and `0` otherwise.
    pub fn entry(&self, row: usize, col: usize) -> u8 {
        u8::from(self.get(row, col))
    }

    pub fn row(&self, row: usize) -> Vec<u8> {
        (0..self.order()).map(|col| self.entry(row, col)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..self.order()).map(|row| self.row(row))
    }
}

impl<K: Serialize> Serialize for AdjacencyMatrix<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AdjacencyMatrix", 2)?;
        state.serialize_field("labels", &self.labels)?;
        state.serialize_field("rows", &self.rows().collect::<Vec<_>>())?;
        state.end()
    }
}

impl<K: fmt::Display> fmt::Display for AdjacencyMatrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels.iter().map(ToString::to_string).collect::<Vec<_>>();
        let width = labels.iter().map(String::len).max().unwrap_or(1).max(1);

        write!(f, "{:width$}", "")?;
        for label in &labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (row, label) in labels.iter().enumerate() {
            write!(f, "{label:>width$}")?;
            for col in 0..self.order() {
                write!(f, " {:>width$}", self.entry(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
