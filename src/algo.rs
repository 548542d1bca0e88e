pub mod properties;
pub mod shortest_path;

pub use properties::{compute_properties, AdjacencyMatrix, DegreeReport, Properties};
pub use shortest_path::{find_shortest_path, Distances, PathResult, Search, ShortestPath, State};
