//! Tests for geo_utils module

use eventmap::geo_utils::*;
use eventmap::Coordinates;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    let p = Coordinates::new(37.7749, -122.4194);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let london = Coordinates::new(51.5074, -0.1278);
    let paris = Coordinates::new(48.8566, 2.3522);
    let dist = haversine_distance(&london, &paris);
    assert!(approx_eq(dist, 343_560.0, 5_000.0)); // Within 5km
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = Coordinates::new(37.7749, -122.4194);
    let b = Coordinates::new(37.7599, -122.4148);
    assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));

    let c = Coordinates::new(-33.8688, 151.2093);
    let d = Coordinates::new(51.5074, -0.1278);
    assert_eq!(haversine_distance(&c, &d), haversine_distance(&d, &c));
}

#[test]
fn test_haversine_distance_antipodal() {
    // Half the Earth's circumference, and no NaN from rounding
    let a = Coordinates::new(0.0, 0.0);
    let b = Coordinates::new(0.0, 180.0);
    let dist = haversine_distance(&a, &b);
    assert!(dist.is_finite());
    assert!(approx_eq(dist, 20_015_000.0, 50_000.0));
}

#[test]
fn test_distance_km_scales_meters() {
    let a = Coordinates::new(37.7749, -122.4194);
    let b = Coordinates::new(37.7599, -122.4148);
    let meters = haversine_distance(&a, &b);
    assert!(approx_eq(distance_km(&a, &b), meters / 1000.0, 1e-9));
}

#[test]
fn test_is_within() {
    // ~14m apart
    let a = Coordinates::new(37.7749, -122.4194);
    let b = Coordinates::new(37.7750, -122.4195);
    assert!(is_within(&a, &b, 100.0));
    assert!(!is_within(&a, &b, 10.0));
    // Zero radius still matches identical points
    assert!(is_within(&a, &a, 0.0));
}

#[test]
fn test_meters_to_degrees() {
    // At equator, 111km = 1 degree
    let deg = meters_to_degrees(111_320.0, 0.0);
    assert!(approx_eq(deg, 1.0, 0.01));

    // At higher latitude, same distance = more degrees
    let deg_45 = meters_to_degrees(111_320.0, 45.0);
    assert!(deg_45 > 1.0);
}
