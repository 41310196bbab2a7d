//! Geofence evaluation: haversine distance on a spherical earth and the
//! OK / OUT_OF_RANGE / SEARCHING classification stored with every event.

use crate::models::coordinate::Coordinate;
use crate::models::gps_status::GpsStatus;
use serde::{Deserialize, Serialize};

/// Mean earth radius used by the spherical model.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Office location and allowed radius. Read-only after startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    pub office: Coordinate,
    pub radius_meters: f64,
}

impl GeofenceConfig {
    pub fn new(office: Coordinate, radius_meters: f64) -> Self {
        Self {
            office,
            radius_meters,
        }
    }

    fn is_valid(&self) -> bool {
        self.office.is_valid() && self.radius_meters.is_finite() && self.radius_meters >= 0.0
    }
}

/// Great-circle distance in meters between two coordinates.
///
/// The haversine term is clamped to [0, 1]: rounding can push it slightly
/// outside near antipodal points or for identical points, which would make
/// `asin` return NaN.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Classify a reported position against the configured geofence.
///
/// - no position → `Searching`
/// - malformed position or config → `OutOfRange`
/// - distance ≤ radius → `Ok`
pub fn evaluate(point: Option<Coordinate>, config: &GeofenceConfig) -> GpsStatus {
    let Some(point) = point else {
        return GpsStatus::Searching;
    };

    if !point.is_valid() || !config.is_valid() {
        return GpsStatus::OutOfRange;
    }

    let distance = distance_meters(point, config.office);
    if distance <= config.radius_meters {
        GpsStatus::Ok
    } else {
        GpsStatus::OutOfRange
    }
}
