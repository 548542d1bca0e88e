use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::core::{
    graph::Graph,
    id::{NodeId, NodeKey},
    weight::{GetWeight, OrderedFloat, Weighted},
};

use super::{Distances, ShortestPath};

/// Phase of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Created, nothing has been queued yet.
    Initialized,
    /// Settling nodes one at a time.
    Relaxing,
    /// The goal was settled. Terminal.
    Found,
    /// The queue ran empty before the goal was settled. Terminal.
    Exhausted,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Found | State::Exhausted)
    }
}

// Queue entries are ordered by distance first and by insertion order second,
// so that among equally distant nodes the one discovered earlier is settled
// first and the result does not depend on heap internals.
type QueueEntry = Reverse<Weighted<NodeId, (OrderedFloat, u64)>>;

/// Dijkstra's algorithm that can be driven one settled node at a time.
///
/// Created by [`ShortestPathBuilder::search`](super::ShortestPathBuilder::search).
pub struct Search<'a, K, F> {
    graph: &'a Graph<K>,
    start: NodeId,
    goal: Option<NodeId>,
    edge_weight: F,
    dist: Vec<f64>,
    pred: Vec<Option<NodeId>>,
    visited: FixedBitSet,
    queue: BinaryHeap<QueueEntry>,
    seq: u64,
    state: State,
}

impl<'a, K, F> Search<'a, K, F>
where
    K: NodeKey,
    F: GetWeight,
{
    pub(crate) fn new(graph: &'a Graph<K>, start: NodeId, goal: Option<NodeId>, edge_weight: F) -> Self {
        let n = graph.node_count();

        Self {
            graph,
            start,
            goal,
            edge_weight,
            dist: vec![f64::INFINITY; n],
            pred: vec![None; n],
            visited: FixedBitSet::with_capacity(n),
            queue: BinaryHeap::new(),
            seq: 0,
            state: State::Initialized,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Best distance to the node found so far, if any.
    pub fn tentative_distance(&self, id: NodeId) -> Option<f64> {
        self.dist.get(id.index()).copied().filter(|dist| dist.is_finite())
    }

    /// Advances the search by one transition and returns the new state.
    ///
    /// From [`State::Initialized`] the start node is queued. In
    /// [`State::Relaxing`] one node is settled and its edges are relaxed. A
    /// terminal state is returned unchanged.
    pub fn step(&mut self) -> State {
        self.state = match self.state {
            State::Initialized => {
                self.dist[self.start.index()] = 0.0;
                self.push(self.start, 0.0);
                State::Relaxing
            }
            State::Relaxing => self.settle_next(),
            terminal => terminal,
        };

        self.state
    }

    /// Steps until a terminal state is reached.
    pub fn run(&mut self) -> State {
        while !self.step().is_terminal() {}
        self.state
    }

    /// Runs the search to the end and reconstructs the path to the goal.
    pub fn finish(mut self) -> ShortestPath<K> {
        self.run();

        let result = match (self.state, self.goal) {
            (State::Found, Some(goal)) => {
                let mut path = vec![goal];
                let mut current = goal;

                while let Some(prev) = self.pred[current.index()] {
                    path.push(prev);
                    current = prev;
                }

                path.reverse();

                let path = path
                    .into_iter()
                    .filter_map(|id| self.graph.key(id).cloned())
                    .collect();

                ShortestPath::found(path, self.dist[goal.index()])
            }
            _ => ShortestPath::not_found(),
        };

        debug!(
            settled = self.visited.count_ones(..),
            success = result.is_success(),
            distance = result.distance(),
            "shortest path search finished"
        );

        result
    }

    pub(crate) fn into_distances(mut self) -> Distances<K> {
        self.run();

        let dist = self
            .graph
            .nodes()
            .iter()
            .zip(&self.dist)
            .filter(|(_, dist)| dist.is_finite())
            .map(|(node, dist)| (node.key().clone(), *dist))
            .collect::<Vec<_>>();

        debug!(reachable = dist.len(), "single-source distances computed");

        let source = self.graph.nodes()[self.start.index()].key().clone();
        Distances::new(source, dist)
    }

    fn push(&mut self, id: NodeId, dist: f64) {
        self.queue
            .push(Reverse(Weighted(id, (OrderedFloat::from(dist), self.seq))));
        self.seq += 1;
    }

    fn settle_next(&mut self) -> State {
        loop {
            let Some(Reverse(Weighted(vertex, _))) = self.queue.pop() else {
                return State::Exhausted;
            };

            // Stale entry of a node that was relaxed more than once.
            if self.visited.put(vertex.index()) {
                continue;
            }

            let vertex_dist = self.dist[vertex.index()];
            trace!(node = %vertex, dist = vertex_dist, "settled");

            if self.goal == Some(vertex) {
                return State::Found;
            }

            for neighbor in self.graph.neighbors_by_id(vertex) {
                let next = neighbor.id;

                if self.visited.contains(next.index()) {
                    continue;
                }

                let edge_dist = self
                    .edge_weight
                    .get_const()
                    .unwrap_or_else(|| self.edge_weight.get(neighbor.weight));
                let next_dist = vertex_dist + edge_dist;

                // Only a strictly better distance replaces the predecessor.
                if next_dist < self.dist[next.index()] {
                    self.dist[next.index()] = next_dist;
                    self.pred[next.index()] = Some(vertex);
                    self.push(next, next_dist);
                }
            }

            return State::Relaxing;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::ShortestPath;

    use super::*;

    fn create_diamond() -> Graph<&'static str> {
        Graph::new(
            ["A", "B", "C", "D", "E"],
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
    fn transitions_found() {
        let graph = create_diamond();
        let mut search = ShortestPath::on(&graph).search(&"A", &"D").unwrap();

        assert_eq!(search.state(), State::Initialized);
        assert_eq!(search.step(), State::Relaxing);
        assert_eq!(search.tentative_distance(NodeId::new(0)), Some(0.0));

        // Settles A, then B, then C, then D.
        assert_eq!(search.step(), State::Relaxing);
        assert_eq!(search.tentative_distance(NodeId::new(2)), Some(4.0));
        assert_eq!(search.step(), State::Relaxing);
        assert_eq!(search.tentative_distance(NodeId::new(2)), Some(3.0));
        assert_eq!(search.step(), State::Relaxing);
        assert_eq!(search.step(), State::Found);

        // Terminal states are sticky.
        assert_eq!(search.step(), State::Found);

        let result = search.finish();
        assert_eq!(result.path(), &["A", "B", "C", "D"]);
        assert_eq!(result.distance(), 4.0);
    }

    #[test]
    fn transitions_exhausted() {
        let graph = create_diamond();
        let mut search = ShortestPath::on(&graph).search(&"A", &"E").unwrap();

        assert_eq!(search.run(), State::Exhausted);
        assert_eq!(search.tentative_distance(NodeId::new(4)), None);
        assert!(!search.finish().is_success());
    }

    #[test]
    fn trivial_search() {
        let graph = create_diamond();
        let mut search = ShortestPath::on(&graph).search(&"E", &"E").unwrap();

        assert_eq!(search.step(), State::Relaxing);
        assert_eq!(search.step(), State::Found);
        assert_eq!(search.finish().path(), &["E"]);
    }

    #[test]
    fn finish_runs_remaining_steps() {
        let graph = create_diamond();
        let search = ShortestPath::on(&graph).search(&"D", &"A").unwrap();

        assert_eq!(search.state(), State::Initialized);
        assert_eq!(search.finish().path(), &["D", "C", "B", "A"]);
    }

    #[test]
    fn equal_distances_settle_in_discovery_order() {
        let graph = Graph::new(
            ["s", "a", "b", "t"],
            [("s", "a", 1.0), ("s", "b", 1.0), ("a", "t", 1.0), ("b", "t", 1.0)],
        )
        .unwrap();

        let result = ShortestPath::on(&graph).run(&"s", &"t").unwrap();
        assert_eq!(result.path(), &["s", "a", "t"]);
    }
}
