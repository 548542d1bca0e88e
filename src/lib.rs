//! Small graph theory engine for teaching: random simple graphs, degree and
//! adjacency reports, and shortest routes between geographic locations.
//!
//! # Examples
//!
//! ```
//! use geograph::{compute_properties, find_shortest_path, generate_random_graph};
//!
//! let graph = generate_random_graph(5, 6, Some(42)).unwrap();
//! let props = compute_properties(&graph);
//! assert_eq!(props.degrees.total(), 12);
//!
//! let route = find_shortest_path(&graph, &0, &0).unwrap();
//! assert_eq!(route.path(), &[0]);
//! ```

pub mod algo;
pub mod core;
pub mod generate;
pub mod geo;
pub mod infra;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use crate::{
    algo::{compute_properties, find_shortest_path, PathResult, Properties, ShortestPath},
    core::{Error, Graph, NotFoundError, ValidationError},
    generate::{generate_random_graph, RandomGraph},
    geo::{build_geo_graph, haversine, Coordinate, GeoGraphBuilder},
};

pub mod prelude {
    pub use crate::{
        algo::{Properties, ShortestPath},
        core::{Graph, NodeKey},
        generate::RandomGraph,
        geo::{Coordinate, Dataset, GeoGraphBuilder},
    };
}
