//! Marker clustering for map display.
//!
//! Groups resolved events into markers with a greedy, first-match,
//! non-recentering single pass:
//! - events are processed in input order;
//! - existing markers are scanned in creation order and the first one
//!   within clustering range wins;
//! - a marker's coordinates stay fixed at its first member's position,
//!   so the nominal center can drift from the true centroid as members
//!   accumulate.
//!
//! The pass is deterministic for a fixed input order; output order
//! equals marker creation order. Complexity is O(n·m) over n events and
//! m markers, acceptable for event volumes in the low thousands.

use log::debug;

use crate::geo_utils::is_within;
use crate::resolver::CoordinateResolver;
use crate::selection::SelectionState;
use crate::{ClusterConfig, Coordinates, Event, LocationKind, Marker};

/// Build markers from events for the current selection.
///
/// Events that resolve to no coordinate are skipped entirely. Each
/// marker's `is_selected` flag is the OR over its members' selection
/// matches: area membership in the selected areas, or resolved position
/// within the selection proximity tolerance of the selected center.
///
/// # Example
/// ```
/// use eventmap::{
///     build_markers, AreaRegistry, ClusterConfig, CoordinateResolver, Coordinates, Event,
///     SelectionState,
/// };
///
/// let registry = AreaRegistry::new();
/// let resolver = CoordinateResolver::new(&registry);
/// let events = vec![
///     Event::with_coordinates("a", "music", Coordinates::new(37.7749, -122.4194)),
///     Event::with_coordinates("b", "food", Coordinates::new(37.7750, -122.4195)),
/// ];
///
/// let markers = build_markers(
///     &events,
///     &resolver,
///     &SelectionState::default(),
///     &ClusterConfig::default(),
/// );
/// assert_eq!(markers.len(), 1);
/// assert!(markers[0].is_cluster);
/// ```
pub fn build_markers(
    events: &[Event],
    resolver: &CoordinateResolver<'_>,
    selection: &SelectionState,
    config: &ClusterConfig,
) -> Vec<Marker> {
    let mut markers: Vec<Marker> = Vec::new();

    for event in events {
        let Some(resolved) = resolver.resolve(event) else {
            continue;
        };

        let selected = event_matches_selection(event, &resolved, selection, config);

        // First marker within clustering range wins, scanned in creation order.
        if let Some(marker) = markers
            .iter_mut()
            .find(|m| is_within(&m.coordinates, &resolved, config.cluster_radius_meters))
        {
            marker.members.push(event.clone());
            marker.is_cluster = marker.members.len() > 1;
            marker.primary_category = primary_category(&marker.members);
            marker.is_selected = marker.is_selected || selected;
            continue;
        }

        markers.push(Marker {
            id: event.id.clone(),
            coordinates: resolved,
            members: vec![event.clone()],
            is_cluster: false,
            primary_category: event.category.clone(),
            area: event.area.clone(),
            is_selected: selected,
            location_kind: if event.coordinates.is_some_and(|c| c.is_valid()) {
                LocationKind::Exact
            } else {
                LocationKind::Approximate
            },
        });
    }

    debug!(
        "built {} markers from {} events (cluster radius {}m)",
        markers.len(),
        events.len(),
        config.cluster_radius_meters
    );
    markers
}

/// Majority-vote category over a marker's members.
///
/// Counts accumulate in member order and ties break in favor of the
/// category first seen among the tied ones, so the result is
/// deterministic for a fixed member order. No hash-map iteration order
/// is relied on.
pub fn primary_category(members: &[Event]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for event in members {
        match counts.iter_mut().find(|(c, _)| *c == event.category) {
            Some(entry) => entry.1 += 1,
            None => counts.push((event.category.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((category, count)),
        }
    }

    best.map(|(c, _)| c.to_string()).unwrap_or_default()
}

/// Per-event selection match used while building markers.
///
/// The proximity tolerance is the fixed `selection_proximity_meters`,
/// independent from `cluster_radius_meters` and from the selection's
/// own radius: those govern visual grouping and filtering, not marker
/// highlighting.
fn event_matches_selection(
    event: &Event,
    resolved: &Coordinates,
    selection: &SelectionState,
    config: &ClusterConfig,
) -> bool {
    if event
        .area
        .as_ref()
        .is_some_and(|a| selection.selected_areas.contains(a))
    {
        return true;
    }

    selection
        .selected_center
        .is_some_and(|center| is_within(&center, resolved, config.selection_proximity_meters))
}
