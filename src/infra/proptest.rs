use proptest::{prelude::*, sample::SizeRange};

use crate::{
    core::{
        facts::{complete_graph_edge_count, pair_coords},
        graph::Graph,
        weight::DEFAULT_WEIGHT,
    },
    geo::Coordinate,
};

/// Any valid coordinate, poles and the antimeridian included.
pub fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

/// Simple graph on nodes `0..n` for `1 <= n <= max_nodes`, all weights equal
/// to one.
pub fn simple_graph(max_nodes: usize) -> impl Strategy<Value = Graph<usize>> {
    graph_with(max_nodes, Just(DEFAULT_WEIGHT))
}

/// Simple graph on nodes `0..n` for `1 <= n <= max_nodes` with weights in
/// `[0, 100)`.
pub fn simple_weighted_graph(max_nodes: usize) -> impl Strategy<Value = Graph<usize>> {
    graph_with(max_nodes, 0.0f64..100.0)
}

// Every unordered pair is included with probability one half.
fn graph_with<W>(max_nodes: usize, weight: W) -> impl Strategy<Value = Graph<usize>>
where
    W: Strategy<Value = f64> + Clone + 'static,
{
    (1..=max_nodes.max(1))
        .prop_flat_map(move |n| {
            let pairs = complete_graph_edge_count(n);
            let picks = proptest::collection::vec(
                (any::<bool>(), weight.clone()),
                SizeRange::from(pairs),
            );
            (Just(n), picks)
        })
        .prop_map(|(n, picks)| {
            let edges = picks
                .into_iter()
                .enumerate()
                .filter(|(_, (keep, _))| *keep)
                .map(|(index, (_, weight))| {
                    let (row, col) = pair_coords(index);
                    (col, row, weight)
                });

            Graph::new(0..n, edges).unwrap_or_else(|error| unreachable!("{error}"))
        })
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::check_simple;

    use super::*;

    proptest! {
        #[test]
        fn proptest_strategy_yields_simple_graphs(graph in simple_weighted_graph(10)) {
            prop_assert!(graph.node_count() >= 1);
            prop_assert!(graph.node_count() <= 10);
            prop_assert_eq!(check_simple(&graph), Ok(()));
        }

        #[test]
        fn proptest_coordinate_in_range(coord in coordinate()) {
            prop_assert!((-90.0..=90.0).contains(&coord.latitude));
            prop_assert!((-180.0..=180.0).contains(&coord.longitude));
        }
    }
}
