//! Export of a graph to the [DOT] language of Graphviz.
//!
//! [DOT]: https://graphviz.org/doc/info/lang.html
//!
//! # Examples
//!
//! ```
//! use geograph::{core::Graph, infra::export::Dot};
//!
//! let graph = Graph::new(["A", "B", "C"], [("A", "B", 1.0), ("B", "C", 2.5)]).unwrap();
//! let dot = Dot::new(None).highlight(vec!["A", "B"]);
//!
//! assert_eq!(
//!     dot.display(&graph).to_string(),
//!     "graph G {\n    \
//!         v0 [label=\"A\", color=red];\n    \
//!         v1 [label=\"B\", color=red];\n    \
//!         v2 [label=\"C\"];\n    \
//!         v0 -- v1 [label=\"1.0\", color=red, penwidth=2];\n    \
//!         v1 -- v2 [label=\"2.5\"];\n\
//!     }\n"
//! );
//! ```

use std::{
    fmt,
    io::{self, Write},
};

use rustc_hash::FxHashSet;

use crate::core::{
    graph::Graph,
    id::{NodeId, NodeKey},
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Undirected DOT export with edge weights as labels and an optionally
/// highlighted path.
#[derive(Debug, Clone)]
pub struct Dot<K> {
    name: String,
    precision: usize,
    highlight: Vec<K>,
}

impl<K> Dot<K> {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            precision: 1,
            highlight: Vec::new(),
        }
    }

    /// Number of decimal places of the weight labels.
    pub fn precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Marks the nodes of the path and the edges between consecutive nodes.
    pub fn highlight(self, path: Vec<K>) -> Self {
        Self {
            highlight: path,
            ..self
        }
    }

    pub fn display<'a>(&'a self, graph: &'a Graph<K>) -> DisplayDot<'a, K> {
        DisplayDot { dot: self, graph }
    }
}

impl<K: NodeKey> Dot<K> {
    fn write(&self, graph: &Graph<K>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .highlight
            .iter()
            .filter_map(|key| graph.id_of(key))
            .collect::<Vec<_>>();
        let path_nodes = path.iter().copied().collect::<FxHashSet<NodeId>>();
        let path_edges = path
            .windows(2)
            .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
            .collect::<FxHashSet<_>>();

        writeln!(f, "graph {} {{", self.name)?;

        for (id, node) in graph.node_ids().zip(graph.nodes()) {
            let label = node.key().to_string();
            if path_nodes.contains(&id) {
                writeln!(f, "    v{} [label={label:?}, color=red];", id.index())?;
            } else {
                writeln!(f, "    v{} [label={label:?}];", id.index())?;
            }
        }

        for edge in graph.edges() {
            let (u, v) = (edge.from(), edge.to());
            let label = format!("{:.*}", self.precision, edge.weight());

            write!(f, "    v{} -- v{} [label={label:?}", u.index(), v.index())?;
            if path_edges.contains(&(u.min(v), u.max(v))) {
                write!(f, ", color=red, penwidth=2")?;
            }
            writeln!(f, "];")?;
        }

        writeln!(f, "}}")
    }
}

impl<K: NodeKey> Export<Graph<K>> for Dot<K> {
    fn export<W: Write>(&self, graph: &Graph<K>, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.display(graph))
    }
}

/// Helper for printing a graph in DOT format with [`format!`] and `{}`.
pub struct DisplayDot<'a, K> {
    dot: &'a Dot<K>,
    graph: &'a Graph<K>,
}

impl<K: NodeKey> fmt::Display for DisplayDot<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dot.write(self.graph, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::ShortestPath;

    use super::*;

    #[test]
    fn plain_export() {
        let graph = Graph::unweighted(0..3usize, [(0, 1)]).unwrap();
        let mut out = Vec::new();
        Dot::new(Some(String::from("demo")))
            .precision(0)
            .export(&graph, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph demo {\n    v0 [label=\"0\"];\n    v1 [label=\"1\"];\n    v2 [label=\"2\"];\n    v0 -- v1 [label=\"1\"];\n}\n"
        );
    }

    #[test]
    fn highlighted_shortest_path() {
        let graph = Graph::new(
            ["A", "B", "C", "D"],
            [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0), ("C", "D", 1.0)],
        )
        .unwrap();
        let path = ShortestPath::on(&graph).run(&"A", &"D").unwrap().into_path();
        let dot = Dot::new(None).highlight(path).display(&graph).to_string();

        assert_eq!(dot.matches("penwidth=2").count(), 3);
        assert!(dot.contains("v0 -- v2 [label=\"4.0\"];"));
        assert_eq!(dot.matches("color=red").count(), 4 + 3);
    }
}
