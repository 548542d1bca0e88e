#![allow(dead_code)]

use fastrand::Rng;
use geograph::{core::Graph, generate::RandomGraph};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random simple graph with `density` of all possible edges and weights in
/// `[0, 100)`.
pub fn geograph_random(node_count: usize, density: f32, rng: &mut Rng) -> Graph<usize> {
    let max = node_count * (node_count - 1) / 2;
    let edge_count = (max as f32 * density) as usize;

    let skeleton = RandomGraph::new(node_count, edge_count)
        .build_with(rng)
        .unwrap();

    let edges = skeleton
        .edge_triples()
        .map(|(u, v, _)| (*u, *v, rng.f64() * 100.0))
        .collect::<Vec<_>>();

    Graph::new(0..node_count, edges).unwrap()
}

pub fn petgraph_from(graph: &Graph<usize>) -> UnGraph<usize, f64> {
    let mut reference = UnGraph::with_capacity(graph.node_count(), graph.edge_count());

    for node in graph.nodes() {
        reference.add_node(*node.key());
    }

    for edge in graph.edges() {
        reference.add_edge(
            NodeIndex::new(edge.from().index()),
            NodeIndex::new(edge.to().index()),
            edge.weight(),
        );
    }

    reference
}
