//! Tests for resolver module

use eventmap::{AreaRegistry, CoordinateResolver, Coordinates, Event};

fn sample_registry() -> AreaRegistry {
    let mut registry = AreaRegistry::new();
    registry.insert("mission", "Mission District", Coordinates::new(37.7599, -122.4148));
    registry
}

#[test]
fn test_exact_coordinates_win() {
    let registry = sample_registry();
    let resolver = CoordinateResolver::new(&registry);

    // Even with a resolvable area, exact coordinates take priority
    let mut event = Event::with_coordinates("e1", "music", Coordinates::new(37.7749, -122.4194));
    event.area = Some("mission".to_string());

    let resolved = resolver.resolve(&event).unwrap();
    assert_eq!(resolved, Coordinates::new(37.7749, -122.4194));
}

#[test]
fn test_area_fallback() {
    let registry = sample_registry();
    let resolver = CoordinateResolver::new(&registry);

    let event = Event::with_area("e2", "food", "mission");
    let resolved = resolver.resolve(&event).unwrap();
    assert_eq!(resolved, registry.center_of("mission").unwrap());
}

#[test]
fn test_unresolvable_area() {
    let registry = sample_registry();
    let resolver = CoordinateResolver::new(&registry);

    let event = Event::with_area("e3", "art", "atlantis");
    assert!(resolver.resolve(&event).is_none());
}

#[test]
fn test_non_finite_coordinates_fall_back_to_area() {
    let registry = sample_registry();
    let resolver = CoordinateResolver::new(&registry);

    let mut event = Event::with_coordinates("e4", "music", Coordinates::new(f64::NAN, -122.0));
    event.area = Some("mission".to_string());

    let resolved = resolver.resolve(&event).unwrap();
    assert_eq!(resolved, registry.center_of("mission").unwrap());
}

#[test]
fn test_no_spatial_data() {
    let registry = sample_registry();
    let resolver = CoordinateResolver::new(&registry);

    let event = Event {
        id: "e5".to_string(),
        category: "music".to_string(),
        coordinates: None,
        area: None,
        location_kind: None,
    };
    assert!(resolver.resolve(&event).is_none());
}

#[test]
fn test_flexible_area_label() {
    let mut registry = sample_registry();
    registry.add_alias("The Mission", "mission");
    let resolver = CoordinateResolver::new(&registry);

    // Upstream free-text labels resolve through the alias table
    let event = Event::with_area("e6", "food", "The Mission");
    assert!(resolver.resolve(&event).is_some());

    // And case/spacing variants resolve through normalization
    let event = Event::with_area("e7", "food", "MISSION");
    assert!(resolver.resolve(&event).is_some());
}
