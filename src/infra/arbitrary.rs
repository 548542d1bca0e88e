use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{error::ValidationError, facts::complete_graph_edge_count, graph::Graph},
    generate::RandomGraph,
    geo::Coordinate,
};

impl<'a> Arbitrary<'a> for Coordinate {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let latitude = u.int_in_range(-90_000_000..=90_000_000i64)? as f64 / 1e6;
        let longitude = u.int_in_range(-180_000_000..=180_000_000i64)? as f64 / 1e6;
        Ok(Coordinate::new(latitude, longitude))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (16, Some(16))
    }
}

/// Raw input for the random graph generator. Node counts and densities are
/// folded into a small valid range.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq)]
pub struct GenerateParams {
    pub nodes: u8,
    pub fill: u8,
    pub seed: u64,
}

impl GenerateParams {
    pub fn node_count(&self) -> usize {
        2 + usize::from(self.nodes % 48)
    }

    pub fn edge_count(&self) -> usize {
        complete_graph_edge_count(self.node_count()) * usize::from(self.fill) / usize::from(u8::MAX)
    }

    pub fn generate(&self) -> Result<Graph<usize>, ValidationError> {
        RandomGraph::new(self.node_count(), self.edge_count())
            .seed(self.seed)
            .build()
    }
}
