//! Find the [shortest path] between two nodes of a graph and its distance.
//!
//! See available parameters [here](ShortestPathBuilder#implementations).
//!
//! The search is [Dijkstra's algorithm], which requires non-negative edge
//! weights. [`Graph`](crate::core::Graph) rejects negative weights at
//! construction, so every search on a valid graph is well-defined.
//!
//! Two nodes in different connected components are not an error: the result
//! is reported as [unsuccessful](ShortestPath::is_success) with an empty path.
//!
//! [shortest path]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use geograph::{algo::ShortestPath, core::Graph};
//!
//! let graph = Graph::new(
//!     ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"],
//!     [
//!         ("Prague", "Bratislava", 328.0),
//!         ("Prague", "Nuremberg", 297.0),
//!         ("Prague", "Vienna", 293.0),
//!         ("Bratislava", "Vienna", 79.0),
//!         ("Nuremberg", "Munich", 170.0),
//!         ("Vienna", "Munich", 402.0),
//!         ("Vienna", "Florence", 863.0),
//!         ("Munich", "Florence", 646.0),
//!         ("Florence", "Rome", 278.0),
//!     ],
//! )
//! .unwrap();
//!
//! let shortest_path = ShortestPath::on(&graph).run(&"Prague", &"Rome").unwrap();
//!
//! assert_eq!(shortest_path.distance(), 1391.0);
//! assert_eq!(
//!     shortest_path.path(),
//!     &["Prague", "Nuremberg", "Munich", "Florence", "Rome"]
//! );
//! ```

use std::{borrow::Borrow, fmt, hash::Hash};

use serde::Serialize;

use crate::core::{error::NotFoundError, graph::Graph, id::NodeKey};

mod builder;
mod dijkstra;

pub use builder::ShortestPathBuilder;
pub use dijkstra::{Search, State};

/// Shortest path between two nodes and its distance.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<K> {
    path: Vec<K>,
    distance: f64,
    success: bool,
}

impl<K> ShortestPath<K> {
    pub(crate) fn found(path: Vec<K>, distance: f64) -> Self {
        Self {
            path,
            distance,
            success: true,
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            success: false,
        }
    }

    /// Nodes on the path from the start to the end, both inclusive. Empty if
    /// the end is not reachable.
    pub fn path(&self) -> &[K] {
        &self.path
    }

    pub fn into_path(self) -> Vec<K> {
        self.path
    }

    /// Total weight of the path, or infinity if the end is not reachable.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns `true` if a path exists. The trivial path of a node to itself
    /// always exists.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<K: fmt::Display> ShortestPath<K> {
    /// Human readable summary with the distance in kilometres rounded to one
    /// decimal place, e.g. `Jakarta - Bandung (116.2 km)`.
    pub fn display_km(&self) -> String {
        if !self.success {
            return String::from("no path");
        }

        let route = self
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ");

        format!("{route} ({:.1} km)", self.distance)
    }
}

/// Outcome of a path query, under the name used by the presentation layer.
pub type PathResult<K> = ShortestPath<K>;

/// Distances from a single source to every reachable node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distances<K> {
    source: K,
    dist: Vec<(K, f64)>,
}

impl<K> Distances<K> {
    pub(crate) fn new(source: K, dist: Vec<(K, f64)>) -> Self {
        Self { source, dist }
    }

    pub fn source(&self) -> &K {
        &self.source
    }

    /// Reachable nodes and their distances, in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.dist.iter().map(|(node, dist)| (node, *dist))
    }

    /// Number of reachable nodes, including the source.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

impl<K: NodeKey> Distances<K> {
    /// Distance to the node, or `None` if it's not reachable.
    pub fn get<Q>(&self, node: &Q) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dist
            .iter()
            .find(|(key, _)| Borrow::<Q>::borrow(key) == node)
            .map(|(_, dist)| *dist)
    }
}

/// Finds the shortest path between `start` and `end` with Dijkstra's
/// algorithm. See [module](self) documentation.
pub fn find_shortest_path<K, Q>(
    graph: &Graph<K>,
    start: &Q,
    end: &Q,
) -> Result<ShortestPath<K>, NotFoundError>
where
    K: NodeKey + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    ShortestPath::on(graph).run(start, end)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::graph::Node,
        geo::{build_geo_graph, Connection, Location},
        infra::{proptest::simple_weighted_graph, testing::brute_force_distance},
    };

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn create_basic_graph() -> Graph<usize> {
        Graph::new(
            0..6,
            [
                (0, 1, 3.0),
                (0, 2, 2.0),
                (1, 2, 2.0),
                (1, 3, 2.0),
                (1, 4, 7.0),
                (2, 3, 5.0),
                (3, 4, 3.0),
                (4, 5, 10.0),
            ],
        )
        .unwrap()
    }

    fn create_graph_with_isolated_node() -> Graph<usize> {
        Graph::new(0..4, [(0, 1, 3.0), (0, 2, 2.0), (1, 2, 2.0)]).unwrap()
    }

    fn create_diamond() -> Graph<&'static str> {
        Graph::new(
            ["A", "B", "C", "D"],
            [
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("A", "C", 4.0),
                ("C", "D", 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_path = find_shortest_path(&graph, &0, &4).unwrap();

        assert!(shortest_path.is_success());
        assert_eq!(shortest_path.distance(), 8.0);
        assert_eq!(shortest_path.path(), &[0, 1, 3, 4]);
        assert_eq!(shortest_path.hops(), 3);

        let shortest_path = find_shortest_path(&graph, &0, &5).unwrap();
        assert_eq!(shortest_path.distance(), 18.0);
        assert_eq!(shortest_path.path(), &[0, 1, 3, 4, 5]);
    }

    #[test]
    fn dijkstra_diamond() {
        let graph = create_diamond();
        let shortest_path = find_shortest_path(&graph, &"A", &"D").unwrap();

        assert_eq!(shortest_path.path(), &["A", "B", "C", "D"]);
        assert_eq!(shortest_path.distance(), 4.0);
    }

    #[test]
    fn dijkstra_is_symmetric_on_undirected_graph() {
        let graph = create_diamond();
        let there = find_shortest_path(&graph, &"A", &"D").unwrap();
        let back = find_shortest_path(&graph, &"D", &"A").unwrap();

        assert_eq!(there.distance(), back.distance());
        assert_eq!(back.path(), &["D", "C", "B", "A"]);
    }

    #[test]
    fn dijkstra_same_node() {
        let graph = create_basic_graph();
        let shortest_path = find_shortest_path(&graph, &2, &2).unwrap();

        assert!(shortest_path.is_success());
        assert_eq!(shortest_path.path(), &[2]);
        assert_eq!(shortest_path.distance(), 0.0);
        assert_eq!(shortest_path.hops(), 0);
    }

    #[test]
    fn dijkstra_same_isolated_node() {
        let graph = create_graph_with_isolated_node();
        let shortest_path = find_shortest_path(&graph, &3, &3).unwrap();

        assert_eq!(shortest_path.path(), &[3]);
        assert_eq!(shortest_path.distance(), 0.0);
    }

    #[test]
    fn dijkstra_goal_not_reached() {
        let graph = create_graph_with_isolated_node();
        let shortest_path = find_shortest_path(&graph, &0, &3).unwrap();

        assert!(!shortest_path.is_success());
        assert!(shortest_path.path().is_empty());
        assert_eq!(shortest_path.distance(), f64::INFINITY);
        assert_eq!(shortest_path.display_km(), "no path");
    }

    #[test]
    fn dijkstra_unknown_nodes() {
        let graph = create_basic_graph();

        assert_eq!(
            find_shortest_path(&graph, &9, &0),
            Err(NotFoundError { key: "9".into() })
        );
        assert_matches!(
            find_shortest_path(&graph, &0, &10),
            Err(NotFoundError { key }) if key == "10"
        );
    }

    #[test]
    fn dijkstra_zero_weight_edges() {
        let graph = Graph::new(0..3usize, [(0, 1, 0.0), (1, 2, 0.0)]).unwrap();
        let shortest_path = find_shortest_path(&graph, &0, &2).unwrap();

        assert_eq!(shortest_path.path(), &[0, 1, 2]);
        assert_eq!(shortest_path.distance(), 0.0);
    }

    #[test]
    fn dijkstra_ties_keep_minimum() {
        // Two routes of equal length.
        let graph = Graph::new(
            ["s", "a", "b", "t"],
            [("s", "a", 1.0), ("s", "b", 1.0), ("a", "t", 1.0), ("b", "t", 1.0)],
        )
        .unwrap();
        let shortest_path = find_shortest_path(&graph, &"s", &"t").unwrap();

        assert_eq!(shortest_path.distance(), 2.0);
        assert_eq!(shortest_path.path().len(), 3);
        assert_eq!(shortest_path.path().first(), Some(&"s"));
        assert_eq!(shortest_path.path().last(), Some(&"t"));
    }

    #[test]
    fn unit_weight_counts_hops() {
        let graph = create_basic_graph();
        let shortest_path = ShortestPath::on(&graph).unit_weight().run(&0, &4).unwrap();

        assert_eq!(shortest_path.distance(), 2.0);
        assert_eq!(shortest_path.path(), &[0, 1, 4]);
    }

    #[test]
    fn distances_from_source() {
        let graph = create_graph_with_isolated_node();
        let distances = ShortestPath::on(&graph).distances_from(&1).unwrap();

        assert_eq!(distances.source(), &1);
        assert_eq!(distances.len(), 3);
        assert_eq!(distances.get(&0), Some(3.0));
        assert_eq!(distances.get(&1), Some(0.0));
        assert_eq!(distances.get(&2), Some(2.0));
        assert_eq!(distances.get(&3), None);

        assert_matches!(ShortestPath::on(&graph).distances_from(&7), Err(_));
    }

    #[test]
    fn geographic_route() {
        let locations = [
            Location::new("Jakarta", -6.2088, 106.8456),
            Location::new("Bandung", -6.9175, 107.6191),
            Location::new("Cirebon", -6.7320, 108.5523),
            Location::new("Semarang", -6.9667, 110.4167),
            Location::new("Denpasar", -8.6500, 115.2167),
        ];
        let connections = [
            Connection::new("Jakarta", "Bandung"),
            Connection::new("Jakarta", "Cirebon"),
            Connection::new("Bandung", "Cirebon"),
            Connection::new("Cirebon", "Semarang"),
            Connection::new("Bandung", "Semarang"),
        ];
        let graph = build_geo_graph(&locations, &connections).unwrap();

        let route = find_shortest_path(&graph, "Jakarta", "Semarang").unwrap();
        assert_eq!(route.path(), &["Jakarta", "Cirebon", "Semarang"]);

        let direct = graph.neighbors("Jakarta").unwrap().find(|(key, _)| *key == "Cirebon");
        let (_, first_leg) = direct.unwrap();
        let (_, second_leg) = graph
            .neighbors("Cirebon")
            .unwrap()
            .find(|(key, _)| *key == "Semarang")
            .unwrap();
        assert!((route.distance() - (first_leg + second_leg)).abs() < EPSILON);
        assert!(route.display_km().starts_with("Jakarta - Cirebon - Semarang ("));
        assert!(route.display_km().ends_with(" km)"));

        let unreachable = find_shortest_path(&graph, "Jakarta", "Denpasar").unwrap();
        assert!(!unreachable.is_success());
    }

    #[test]
    fn serialize_json() {
        let graph = create_diamond();
        let shortest_path = find_shortest_path(&graph, &"A", &"C").unwrap();
        let json = serde_json::to_value(&shortest_path).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "path": ["A", "B", "C"], "distance": 3.0, "success": true })
        );
    }

    #[test]
    fn agrees_with_petgraph() {
        let graph = crate::generate::generate_random_graph(12, 30, Some(7)).unwrap();

        let mut reference = petgraph::graph::UnGraph::<usize, f64>::new_undirected();
        let indices = graph
            .nodes()
            .iter()
            .map(|node| reference.add_node(*node.key()))
            .collect::<Vec<_>>();
        for (i, edge) in graph.edges().iter().enumerate() {
            // Vary the weights so that the hop count is not the answer.
            let weight = (i % 5) as f64 + 0.5;
            reference.add_edge(indices[edge.from().index()], indices[edge.to().index()], weight);
        }

        let weighted = Graph::new(
            graph.nodes().iter().map(|node: &Node<usize>| *node.key()),
            graph
                .edges()
                .iter()
                .enumerate()
                .map(|(i, edge)| (edge.from().index(), edge.to().index(), (i % 5) as f64 + 0.5)),
        )
        .unwrap();

        let expected = petgraph::algo::dijkstra(&reference, indices[0], None, |e| *e.weight());
        let distances = ShortestPath::on(&weighted).distances_from(&0).unwrap();

        assert_eq!(distances.len(), expected.len());
        for (node, dist) in distances.iter() {
            let reference_dist = expected[&indices[*node]];
            assert!((dist - reference_dist).abs() < EPSILON);
        }
    }

    proptest! {
        #[test]
        fn proptest_dijkstra_matches_brute_force(graph in simple_weighted_graph(8), start in any::<usize>(), end in any::<usize>()) {
            let n = graph.node_count();
            let (start, end) = (start % n, end % n);

            let shortest_path = find_shortest_path(&graph, &start, &end).unwrap();
            let expected = brute_force_distance(&graph, &start, &end);

            match expected {
                Some(expected) => {
                    prop_assert!(shortest_path.is_success());
                    prop_assert!((shortest_path.distance() - expected).abs() < EPSILON);
                    prop_assert_eq!(shortest_path.path().first(), Some(&start));
                    prop_assert_eq!(shortest_path.path().last(), Some(&end));
                }
                None => {
                    prop_assert!(!shortest_path.is_success());
                    prop_assert!(shortest_path.path().is_empty());
                }
            }
        }

        #[test]
        fn proptest_path_is_walkable(graph in simple_weighted_graph(8), start in any::<usize>(), end in any::<usize>()) {
            let n = graph.node_count();
            let (start, end) = (start % n, end % n);

            let shortest_path = find_shortest_path(&graph, &start, &end).unwrap();

            let mut total = 0.0;
            for pair in shortest_path.path().windows(2) {
                let weight = graph
                    .neighbors(&pair[0])
                    .unwrap()
                    .find(|(key, _)| **key == pair[1])
                    .map(|(_, weight)| weight);
                prop_assert!(weight.is_some());
                total += weight.unwrap_or_default();
            }

            if shortest_path.is_success() {
                prop_assert!((total - shortest_path.distance()).abs() < EPSILON);
            }
        }

        #[test]
        fn proptest_same_node_trivial(graph in simple_weighted_graph(8), node in any::<usize>()) {
            let node = node % graph.node_count();
            let shortest_path = find_shortest_path(&graph, &node, &node).unwrap();

            prop_assert_eq!(shortest_path.path(), &[node]);
            prop_assert_eq!(shortest_path.distance(), 0.0);
        }
    }
}
