//! Geofence classification logic.
//!
//! This module provides the great-circle distance calculation and the
//! in-zone test used to decide whether a check-in position counts as
//! on-site or remote.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic position in decimal degrees.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::Coords;
///
/// let office = Coords { lat: 12.9716, lng: 77.5946 };
/// assert!(office.lat > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// The outcome of classifying a position against a geofence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceResult {
    /// Great-circle distance from the position to the geofence center.
    pub distance_meters: f64,
    /// True when the distance does not exceed the geofence radius.
    pub in_zone: bool,
}

/// Computes the great-circle distance between two positions in meters.
///
/// Uses the haversine formula on a sphere of [`EARTH_RADIUS_METERS`].
/// Total over finite inputs; no geographic-range validation is applied.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{Coords, distance_meters};
///
/// let office = Coords { lat: 12.9716, lng: 77.5946 };
/// let nearby = Coords { lat: 12.9816, lng: 77.5946 };
/// let d = distance_meters(office, nearby);
/// assert!((d - 1111.95).abs() < 1.0);
/// ```
pub fn distance_meters(a: Coords, b: Coords) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Classifies a position against a circular geofence.
///
/// The position is in-zone when its distance to `center` is less than or
/// equal to `radius_meters`; a position exactly on the boundary is in-zone.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{classify, Coords};
///
/// let office = Coords { lat: 12.9716, lng: 77.5946 };
/// let result = classify(office, office, 2000.0);
/// assert!(result.in_zone);
/// assert_eq!(result.distance_meters, 0.0);
/// ```
pub fn classify(position: Coords, center: Coords, radius_meters: f64) -> GeofenceResult {
    let distance_meters = distance_meters(position, center);
    GeofenceResult {
        distance_meters,
        in_zone: distance_meters <= radius_meters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const OFFICE: Coords = Coords {
        lat: 12.9716,
        lng: 77.5946,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_meters(OFFICE, OFFICE), 0.0);
    }

    #[test]
    fn test_distance_one_hundredth_degree_north() {
        // 0.01 degrees of latitude is roughly 1.112 km on this sphere
        let north = Coords {
            lat: OFFICE.lat + 0.01,
            lng: OFFICE.lng,
        };
        let d = distance_meters(OFFICE, north);
        assert!((d - 1111.95).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_distance_to_mumbai_is_hundreds_of_kilometers() {
        let mumbai = Coords {
            lat: 19.0760,
            lng: 72.8777,
        };
        let d = distance_meters(OFFICE, mumbai);
        assert!(d > 800_000.0, "got {}", d);
        assert!(d < 900_000.0, "got {}", d);
    }

    #[test]
    fn test_classify_inside_radius() {
        let nearby = Coords {
            lat: OFFICE.lat + 0.01,
            lng: OFFICE.lng,
        };
        let result = classify(nearby, OFFICE, 2000.0);
        assert!(result.in_zone);
    }

    #[test]
    fn test_classify_outside_radius() {
        let far = Coords {
            lat: OFFICE.lat + 0.05,
            lng: OFFICE.lng,
        };
        let result = classify(far, OFFICE, 2000.0);
        assert!(!result.in_zone);
        assert!(result.distance_meters > 5000.0);
    }

    #[test]
    fn test_boundary_distance_is_in_zone() {
        let point = Coords {
            lat: OFFICE.lat + 0.01,
            lng: OFFICE.lng,
        };
        let d = distance_meters(point, OFFICE);

        let on_boundary = classify(point, OFFICE, d);
        assert!(on_boundary.in_zone);

        let radius_short_of_point = classify(point, OFFICE, d - 0.1);
        assert!(!radius_short_of_point.in_zone);
    }

    #[test]
    fn test_classify_reports_same_distance_as_distance_meters() {
        let point = Coords {
            lat: 13.0350,
            lng: 77.5970,
        };
        let result = classify(point, OFFICE, 2000.0);
        assert_eq!(result.distance_meters, distance_meters(point, OFFICE));
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(
            lat_a in -85.0f64..85.0,
            lng_a in -180.0f64..180.0,
            lat_b in -85.0f64..85.0,
            lng_b in -180.0f64..180.0,
        ) {
            let a = Coords { lat: lat_a, lng: lng_a };
            let b = Coords { lat: lat_b, lng: lng_b };
            let forward = distance_meters(a, b);
            let backward = distance_meters(b, a);
            prop_assert!((forward - backward).abs() < 1e-6);
        }

        #[test]
        fn prop_distance_is_non_negative(
            lat_a in -85.0f64..85.0,
            lng_a in -180.0f64..180.0,
            lat_b in -85.0f64..85.0,
            lng_b in -180.0f64..180.0,
        ) {
            let a = Coords { lat: lat_a, lng: lng_a };
            let b = Coords { lat: lat_b, lng: lng_b };
            prop_assert!(distance_meters(a, b) >= 0.0);
        }
    }
}
