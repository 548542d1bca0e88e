use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{
    error::{EdgeErrorKind, ValidationError},
    graph::{Graph, Node},
};

use super::{Connection, Coordinate, Haversine, Location};

/// Builds a [`Graph`] of named locations where each edge weight is the
/// great-circle distance between the connected locations.
///
/// # Examples
///
/// ```
/// use geograph::geo::{Connection, GeoGraphBuilder, Location};
///
/// let locations = [
///     Location::new("Jakarta", -6.2088, 106.8456),
///     Location::new("Bogor", -6.5971, 106.8060),
/// ];
/// let connections = [Connection::new("Jakarta", "Bogor")];
///
/// let graph = GeoGraphBuilder::new().build(&locations, &connections).unwrap();
/// let (_, _, km) = graph.edge_triples().next().unwrap();
/// assert!((km - 43.4).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoGraphBuilder {
    metric: Haversine,
}

impl GeoGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metric used for the edge weights. Defaults to [`Haversine::EARTH`].
    pub fn metric(self, metric: Haversine) -> Self {
        Self { metric }
    }

    pub fn build(
        &self,
        locations: &[Location],
        connections: &[Connection],
    ) -> Result<Graph<String>, ValidationError> {
        let mut coords: FxHashMap<&str, Coordinate> = FxHashMap::default();
        coords.reserve(locations.len());

        for location in locations {
            if coords
                .insert(location.name.as_str(), location.coord)
                .is_some()
            {
                return Err(ValidationError::DuplicateNode {
                    key: location.name.clone(),
                });
            }
        }

        let edges = connections
            .iter()
            .map(|Connection(from, to)| {
                let a = coords
                    .get(from.as_str())
                    .ok_or_else(|| ValidationError::edge(from, to, EdgeErrorKind::SourceAbsent))?;
                let b = coords
                    .get(to.as_str())
                    .ok_or_else(|| ValidationError::edge(from, to, EdgeErrorKind::DestinationAbsent))?;

                Ok((from.clone(), to.clone(), self.metric.distance(*a, *b)))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let nodes = locations
            .iter()
            .map(|location| Node::with_coord(location.name.clone(), location.coord));

        let graph = Graph::new(nodes, edges)?;

        debug!(
            locations = graph.node_count(),
            connections = graph.edge_count(),
            radius = self.metric.radius(),
            "geographic graph built"
        );

        Ok(graph)
    }
}

/// Builds a geographic graph with the default metric. See [`GeoGraphBuilder`].
pub fn build_geo_graph(
    locations: &[Location],
    connections: &[Connection],
) -> Result<Graph<String>, ValidationError> {
    GeoGraphBuilder::new().build(locations, connections)
}
