//! Location records supplied by the caller.
//!
//! The engine does not embed any geographic data. A [`Dataset`] is a plain
//! table of named locations and the connections between them, typically
//! deserialized from a JSON document:
//!
//! ```json
//! {
//!   "locations": [
//!     { "name": "Jakarta", "latitude": -6.2088, "longitude": 106.8456 },
//!     { "name": "Bandung", "latitude": -6.9175, "longitude": 107.6191 }
//!   ],
//!   "connections": [["Jakarta", "Bandung"]]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Coordinate;

/// A named place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(flatten)]
    pub coord: Coordinate,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coord: Coordinate::new(latitude, longitude),
        }
    }
}

/// Unordered pair of location names that are directly connected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection(pub String, pub String);

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self(from.into(), to.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

impl Dataset {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }
}
