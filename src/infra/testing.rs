use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{
    facts,
    graph::Graph,
    id::{NodeId, NodeKey},
};

/// Complete graph on nodes `0..n` with all weights equal to one.
pub fn create_complete(n: usize) -> Graph<usize> {
    let mut edges = Vec::with_capacity(facts::complete_graph_edge_count(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }

    Graph::unweighted(0..n, edges).unwrap_or_else(|_| unreachable!("complete graph is simple"))
}

/// Path `0 - 1 - ... - (n - 1)` where the edge `(i, i + 1)` has weight
/// `i + 1`.
pub fn create_path(n: usize) -> Graph<usize> {
    let edges = (1..n).map(|v| (v - 1, v, v as f64));
    Graph::new(0..n, edges).unwrap_or_else(|_| unreachable!("path graph is simple"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("edge {0} (zero-based) is a self-loop")]
    SelfLoop(usize),
    #[error("edge {0} (zero-based) connects an already connected pair")]
    MultiEdge(usize),
    #[error("edge {0} (zero-based) is missing in the adjacency of its endpoints")]
    AdjacencyMismatch(usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
}

/// Checks that the graph is simple and that the edge list agrees with the
/// adjacency lists.
pub fn check_simple<K: NodeKey>(graph: &Graph<K>) -> Result<(), ConsistencyCheckError> {
    let mut seen = FxHashSet::default();

    for (i, edge) in graph.edges().iter().enumerate() {
        let (u, v) = (edge.from(), edge.to());

        if u == v {
            return Err(ConsistencyCheckError::SelfLoop(i));
        }

        if !seen.insert((u.min(v), u.max(v))) {
            return Err(ConsistencyCheckError::MultiEdge(i));
        }

        let listed = |from: NodeId, to: NodeId| {
            graph
                .neighbors_by_id(from)
                .iter()
                .any(|neighbor| neighbor.id == to && neighbor.weight == edge.weight())
        };

        if !listed(u, v) || !listed(v, u) {
            return Err(ConsistencyCheckError::AdjacencyMismatch(i));
        }
    }

    let degree_sum = graph.node_ids().map(|id| graph.degree(id)).sum::<usize>();
    if degree_sum != 2 * graph.edge_count() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            degree_sum,
            2 * graph.edge_count(),
        ));
    }

    Ok(())
}

/// Length of the shortest path found by enumerating all simple paths. Only
/// usable on tiny graphs.
pub fn brute_force_distance<K: NodeKey>(graph: &Graph<K>, start: &K, end: &K) -> Option<f64> {
    fn walk<K>(
        graph: &Graph<K>,
        current: NodeId,
        end: NodeId,
        dist: f64,
        on_path: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if current == end {
            if best.map_or(true, |best| dist < best) {
                *best = Some(dist);
            }
            return;
        }

        for neighbor in graph.neighbors_by_id(current) {
            if on_path[neighbor.id.index()] {
                continue;
            }

            on_path[neighbor.id.index()] = true;
            walk(graph, neighbor.id, end, dist + neighbor.weight, on_path, best);
            on_path[neighbor.id.index()] = false;
        }
    }

    let start = graph.id_of(start)?;
    let end = graph.id_of(end)?;

    let mut on_path = vec![false; graph.node_count()];
    on_path[start.index()] = true;

    let mut best = None;
    walk(graph, start, end, 0.0, &mut on_path, &mut best);
    best
}
