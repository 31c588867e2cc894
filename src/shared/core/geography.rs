// Great-circle geometry on a spherical Earth.
//
// Purpose
// - Measure the surface distance between two latitude/longitude points.
//
// Boundaries
// - Pure functions only. No input or output, no error conditions.
// - Non-finite inputs propagate NaN. Callers must not pass them.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// Exactly two persisted components. Altitude is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    // Device readings may carry an altitude; it is dropped here.
    pub fn from_reading(latitude: f64, longitude: f64, _altitude: Option<f64>) -> Self {
        Self::new(latitude, longitude)
    }
}

// Haversine distance in meters. Inputs are degrees.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = lat_b - lat_a;
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().clamp(0.0, 1.0).asin()
}
