//! Geographic coordinates and [great-circle distance].
//!
//! Distances are computed with the [Haversine formula] on a sphere with
//! Earth's mean radius of [6371 km](EARTH_RADIUS_KM). No rounding is applied;
//! formatting for display is left to the caller.
//!
//! [great-circle distance]: https://en.wikipedia.org/wiki/Great-circle_distance
//! [Haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
//!
//! # Examples
//!
//! ```
//! use geograph::geo::{haversine, Coordinate};
//!
//! let jakarta = Coordinate::new(-6.2088, 106.8456);
//! let bandung = Coordinate::new(-6.9175, 107.6191);
//!
//! let km = haversine(jakarta, bandung);
//! assert!((km - 116.0).abs() < 2.0);
//! ```

use serde::{Deserialize, Serialize};

mod builder;
mod dataset;

pub use builder::{build_geo_graph, GeoGraphBuilder};
pub use dataset::{Connection, Dataset, DatasetError, Location};

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine(*self, *other)
    }
}

/// Great-circle distance between two coordinates in kilometres, using Earth's
/// mean radius.
///
/// NaN in any input component yields NaN.
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    Haversine::EARTH.distance(a, b)
}

/// Haversine metric on a sphere of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius: f64,
}

impl Haversine {
    pub const EARTH: Haversine = Haversine {
        radius: EARTH_RADIUS_KM,
    };

    /// Metric on a sphere with given radius. Distances are reported in the
    /// unit of the radius.
    pub const fn with_radius(radius: f64) -> Self {
        Self { radius }
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }

    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let dlat = (b.latitude - a.latitude).to_radians();
        let dlon = (b.longitude - a.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        // Rounding can push `h` slightly above one for antipodal points. The
        // clamp keeps NaN as NaN.
        2.0 * self.radius * h.clamp(0.0, 1.0).sqrt().asin()
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Haversine::EARTH
    }
}
