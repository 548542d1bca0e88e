use std::{borrow::Borrow, fmt, hash::Hash};

use crate::core::{
    error::NotFoundError,
    graph::Graph,
    id::{NodeId, NodeKey},
    weight::{GetWeight, Identity, Unit},
};

use super::{dijkstra::Search, Distances, ShortestPath};

pub struct ShortestPathBuilder<'a, K, F> {
    graph: &'a Graph<K>,
    edge_weight: F,
}

impl<K> ShortestPath<K> {
    pub fn on(graph: &Graph<K>) -> ShortestPathBuilder<'_, K, Identity> {
        ShortestPathBuilder {
            graph,
            edge_weight: Identity,
        }
    }
}

impl<'a, K, F> ShortestPathBuilder<'a, K, F> {
    pub fn edge_weight<F2: GetWeight>(self, edge_weight: F2) -> ShortestPathBuilder<'a, K, F2> {
        ShortestPathBuilder {
            graph: self.graph,
            edge_weight,
        }
    }

    /// Ignores the stored weights and counts hops instead.
    pub fn unit_weight(self) -> ShortestPathBuilder<'a, K, Unit> {
        self.edge_weight(Unit)
    }
}

impl<'a, K, F> ShortestPathBuilder<'a, K, F>
where
    K: NodeKey,
    F: GetWeight,
{
    /// Finds the shortest path from `start` to `end`.
    ///
    /// The start is looked up first, so if neither node exists the error
    /// names the start.
    pub fn run<Q>(self, start: &Q, end: &Q) -> Result<ShortestPath<K>, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        Ok(self.search(start, end)?.finish())
    }

    /// Prepares a search that can be stepped through manually.
    pub fn search<Q>(self, start: &Q, end: &Q) -> Result<Search<'a, K, F>, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;

        Ok(Search::new(self.graph, start, Some(end), self.edge_weight))
    }

    /// Computes distances from `start` to every reachable node.
    pub fn distances_from<Q>(self, start: &Q) -> Result<Distances<K>, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let start = self.resolve(start)?;
        Ok(Search::new(self.graph, start, None, self.edge_weight).into_distances())
    }

    fn resolve<Q>(&self, key: &Q) -> Result<NodeId, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.graph.id_of(key).ok_or_else(|| NotFoundError::new(&key))
    }
}
