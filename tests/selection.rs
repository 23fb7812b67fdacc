//! Tests for selection module

use eventmap::selection::apply;
use eventmap::{
    Coordinates, SelectionAction, SelectionState, SelectionStateManager, DEFAULT_SELECTED_RADIUS_KM,
};

#[test]
fn test_toggle_area_adds_and_removes() {
    let mut manager = SelectionStateManager::new();

    manager.toggle_area("mission");
    assert_eq!(manager.selection().selected_areas, vec!["mission".to_string()]);

    manager.toggle_area("soma");
    assert_eq!(
        manager.selection().selected_areas,
        vec!["mission".to_string(), "soma".to_string()]
    );

    manager.toggle_area("mission");
    assert_eq!(manager.selection().selected_areas, vec!["soma".to_string()]);
}

#[test]
fn test_toggle_area_twice_restores_prior_state() {
    let mut manager = SelectionStateManager::new();
    manager.toggle_area("soma");
    let before = manager.selection().clone();

    manager.toggle_area("mission");
    manager.toggle_area("mission");

    assert_eq!(manager.selection(), &before);
}

#[test]
fn test_double_toggle_with_no_center_is_net_noop() {
    let mut manager = SelectionStateManager::new();

    manager.toggle_area("mission");
    manager.toggle_area("mission");

    assert!(manager.selection().selected_areas.is_empty());
    assert_eq!(manager.selection().selected_center, None);
    assert!(!manager.has_selection());
}

#[test]
fn test_removing_last_area_clears_center_too() {
    let mut manager = SelectionStateManager::new();

    manager.toggle_area("mission");
    manager.toggle_center(Coordinates::new(1.0, 1.0), 2.0);
    assert_eq!(
        manager.selection().selected_center,
        Some(Coordinates::new(1.0, 1.0))
    );

    // Removing the only area empties the area set, which clears the
    // center and radius as well, even though the center toggle was
    // never explicitly undone.
    manager.toggle_area("mission");

    assert_eq!(manager.selection(), &SelectionState::default());
}

#[test]
fn test_removing_non_last_area_keeps_center() {
    let mut manager = SelectionStateManager::new();

    manager.toggle_area("mission");
    manager.toggle_area("soma");
    manager.toggle_center(Coordinates::new(1.0, 1.0), 2.0);

    manager.toggle_area("mission");

    assert_eq!(manager.selection().selected_areas, vec!["soma".to_string()]);
    assert_eq!(
        manager.selection().selected_center,
        Some(Coordinates::new(1.0, 1.0))
    );
    assert_eq!(manager.selection().selected_radius_km, Some(2.0));
}

#[test]
fn test_toggle_center_sets_and_deselects() {
    let mut manager = SelectionStateManager::new();
    let center = Coordinates::new(37.7749, -122.4194);

    manager.toggle_center(center, 2.0);
    assert_eq!(manager.selection().selected_center, Some(center));
    assert_eq!(manager.selection().selected_radius_km, Some(2.0));

    // Toggling the exact same coordinates deselects
    manager.toggle_center(center, 2.0);
    assert_eq!(manager.selection().selected_center, None);
    assert_eq!(manager.selection().selected_radius_km, None);
}

#[test]
fn test_toggle_center_with_different_coordinates_replaces() {
    let mut manager = SelectionStateManager::new();

    manager.toggle_center(Coordinates::new(1.0, 1.0), 2.0);
    manager.toggle_center(Coordinates::new(2.0, 2.0), 3.0);

    assert_eq!(
        manager.selection().selected_center,
        Some(Coordinates::new(2.0, 2.0))
    );
    assert_eq!(manager.selection().selected_radius_km, Some(3.0));
}

#[test]
fn test_deselecting_center_keeps_areas() {
    let mut manager = SelectionStateManager::new();
    let center = Coordinates::new(1.0, 1.0);

    manager.toggle_area("mission");
    manager.toggle_center(center, 2.0);
    manager.toggle_center(center, 2.0);

    assert_eq!(manager.selection().selected_areas, vec!["mission".to_string()]);
    assert_eq!(manager.selection().selected_center, None);
}

#[test]
fn test_toggle_area_keeps_existing_center() {
    let mut manager = SelectionStateManager::new();
    let center = Coordinates::new(1.0, 1.0);

    manager.toggle_center(center, 2.0);
    manager.toggle_area("mission");

    assert_eq!(manager.selection().selected_center, Some(center));
    assert_eq!(manager.selection().selected_radius_km, Some(2.0));
}

#[test]
fn test_reducer_is_pure() {
    let state = SelectionState {
        selected_areas: vec!["mission".to_string()],
        selected_center: Some(Coordinates::new(1.0, 1.0)),
        selected_radius_km: Some(2.0),
    };
    let snapshot = state.clone();

    let _ = apply(&state, &SelectionAction::ToggleArea("mission".to_string()));
    let _ = apply(
        &state,
        &SelectionAction::ToggleCenter {
            center: Coordinates::new(1.0, 1.0),
            radius_km: 2.0,
        },
    );

    assert_eq!(state, snapshot);
}

#[test]
fn test_derived_filter() {
    let mut manager = SelectionStateManager::new();
    manager.toggle_area("soma");
    manager.toggle_center(Coordinates::new(37.7749, -122.4194), 2.0);

    let filter = manager.filter();

    assert_eq!(filter.areas, vec!["soma".to_string()]);
    assert_eq!(filter.center, Some(Coordinates::new(37.7749, -122.4194)));
    assert_eq!(filter.radius_km, Some(2.0));
    assert!(filter.include_approximate);
}

#[test]
fn test_derived_filter_normalizes_non_positive_radius() {
    let mut manager = SelectionStateManager::new();
    manager.toggle_center(Coordinates::new(37.7749, -122.4194), -5.0);

    // The state records the toggle, but the derived filter treats the
    // radius sub-filter as inactive.
    assert!(manager.has_selection());
    let filter = manager.filter();
    assert_eq!(filter.center, None);
    assert_eq!(filter.radius_km, None);
}

#[test]
fn test_default_radius_constant() {
    assert_eq!(DEFAULT_SELECTED_RADIUS_KM, 1.0);
}

#[test]
fn test_clear() {
    let mut manager = SelectionStateManager::new();
    manager.toggle_area("mission");
    manager.toggle_center(Coordinates::new(1.0, 1.0), 2.0);

    manager.clear();

    assert_eq!(manager.selection(), &SelectionState::default());
    assert!(!manager.has_selection());
}
