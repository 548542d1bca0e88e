//! Random simple graphs with a fixed number of nodes and edges.
//!
//! The generator follows the [Erdős–Rényi G(n, m) model]: out of all
//! `n (n - 1) / 2` unordered pairs of distinct nodes, exactly `m` are chosen
//! uniformly at random without replacement. Nodes are labelled `0..n`.
//!
//! Generation is reproducible when a seed is given. The same seed together
//! with the same `(n, m)` always yields the same edge list.
//!
//! [Erdős–Rényi G(n, m) model]: https://en.wikipedia.org/wiki/Erd%C5%91s%E2%80%93R%C3%A9nyi_model
//!
//! # Examples
//!
//! ```
//! use geograph::generate::RandomGraph;
//!
//! let graph = RandomGraph::new(5, 6).seed(42).build().unwrap();
//! let again = RandomGraph::new(5, 6).seed(42).build().unwrap();
//!
//! assert_eq!(graph.edge_count(), 6);
//! assert_eq!(graph.edges(), again.edges());
//! ```

use fastrand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{
    error::ValidationError,
    facts::{checked_complete_graph_edge_count, complete_graph_edge_count, pair_coords},
    graph::Graph,
};

/// Smallest node count accepted by the generator.
pub const MIN_NODES: usize = 2;

/// Parameters of a random graph. See [module](self) documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraph {
    nodes: usize,
    edges: usize,
    seed: Option<u64>,
}

impl RandomGraph {
    pub fn new(nodes: usize, edges: usize) -> Self {
        Self {
            nodes,
            edges,
            seed: None,
        }
    }

    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn seed_opt(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Checks the parameters without generating anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nodes < MIN_NODES {
            return Err(ValidationError::TooFewNodes {
                count: self.nodes,
                min: MIN_NODES,
            });
        }

        let max = checked_complete_graph_edge_count(self.nodes)
            .ok_or(ValidationError::TooManyNodes { count: self.nodes })?;
        if self.edges > max {
            return Err(ValidationError::TooManyEdges {
                requested: self.edges,
                nodes: self.nodes,
                max,
            });
        }

        Ok(())
    }

    /// Generates the graph. Without a seed, fresh entropy is used.
    pub fn build(&self) -> Result<Graph<usize>, ValidationError> {
        let mut rng = match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        self.build_with(&mut rng)
    }

    /// Generates the graph drawing randomness from the given generator.
    pub fn build_with(&self, rng: &mut Rng) -> Result<Graph<usize>, ValidationError> {
        self.validate()?;

        let pairs = sample_pairs(complete_graph_edge_count(self.nodes), self.edges, rng);
        let edges = pairs.into_iter().map(|index| {
            let (row, col) = pair_coords(index);
            (col, row)
        });

        let graph = Graph::unweighted(0..self.nodes, edges)?;

        debug!(
            nodes = self.nodes,
            edges = self.edges,
            seed = self.seed,
            "random graph generated"
        );

        Ok(graph)
    }
}

/// Generates a random simple graph with `n` nodes and `m` edges. See
/// [`RandomGraph`].
pub fn generate_random_graph(
    n: usize,
    m: usize,
    seed: Option<u64>,
) -> Result<Graph<usize>, ValidationError> {
    RandomGraph::new(n, m).seed_opt(seed).build()
}

// Chooses `count` distinct indices from `0..total`, uniformly. Rejection
// sampling is cheap while at most half of the indices are chosen. Otherwise
// the complement is sampled instead and the remaining indices are returned in
// increasing order.
fn sample_pairs(total: usize, count: usize, rng: &mut Rng) -> Vec<usize> {
    if count <= total / 2 {
        let mut chosen = FxHashSet::default();
        let mut pairs = Vec::with_capacity(count);

        while pairs.len() < count {
            let index = rng.usize(0..total);
            if chosen.insert(index) {
                pairs.push(index);
            }
        }

        pairs
    } else {
        let excluded = sample_pairs(total, total - count, rng)
            .into_iter()
            .collect::<FxHashSet<_>>();

        (0..total)
            .filter(|index| !excluded.contains(index))
            .collect()
    }
}
