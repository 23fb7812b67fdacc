//! Geographic utilities: great-circle distances and unit conversions.

use crate::Coordinates;

/// Earth radius in kilometers used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in meters.
///
/// Uses the haversine formula. Symmetric, returns exactly 0.0 for
/// identical points, and is total over finite inputs including
/// antipodal points.
///
/// # Example
/// ```
/// use eventmap::geo_utils::haversine_distance;
/// use eventmap::Coordinates;
///
/// let london = Coordinates::new(51.5074, -0.1278);
/// let paris = Coordinates::new(48.8566, 2.3522);
/// let dist = haversine_distance(&london, &paris);
/// assert!((dist - 343_560.0).abs() < 5_000.0);
/// ```
pub fn haversine_distance(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());

    EARTH_RADIUS_KM * 1000.0 * c
}

/// Great-circle distance between two coordinates in kilometers.
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    haversine_distance(a, b) / 1000.0
}

/// Whether two coordinates are within `radius_meters` of each other.
pub fn is_within(a: &Coordinates, b: &Coordinates, radius_meters: f64) -> bool {
    haversine_distance(a, b) <= radius_meters
}

/// Convert a metric distance to longitude degrees at a given latitude.
///
/// Used for bounding-box queries; the cosine is floored to keep the
/// conversion total near the poles.
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    meters / (111_320.0 * latitude.to_radians().cos().max(0.01))
}
