//! Composite location filtering.
//!
//! A location filter is the union of an area-membership test and a
//! radius test: an event passes if it satisfies any active sub-filter.
//! Selecting multiple areas, or an area plus a radius, broadens the
//! visible set rather than narrowing it.

use serde::{Deserialize, Serialize};

use crate::geo_utils::distance_km;
use crate::selection::SelectionState;
use crate::{AreaCode, Coordinates, Event, LocationKind};

fn default_true() -> bool {
    true
}

/// A composite location filter.
///
/// Absence of both `areas` and `center`/`radius_km` means "no location
/// restriction". The radius sub-filter is normalized at construction:
/// non-positive or non-finite radii deactivate it entirely, so `passes`
/// never has to re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    #[serde(default)]
    pub areas: Vec<AreaCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(default = "default_true")]
    pub include_approximate: bool,
}

impl Default for LocationFilter {
    fn default() -> Self {
        Self {
            areas: Vec::new(),
            center: None,
            radius_km: None,
            include_approximate: true,
        }
    }
}

impl LocationFilter {
    /// A filter with no location restriction.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// A filter restricted to a set of areas.
    pub fn with_areas(areas: Vec<AreaCode>) -> Self {
        Self {
            areas,
            ..Self::default()
        }
    }

    /// A filter restricted to a radius around a center.
    pub fn with_radius(center: Coordinates, radius_km: f64) -> Self {
        let mut filter = Self::default();
        filter.set_radius(Some(center), Some(radius_km));
        filter
    }

    /// Set or clear the radius sub-filter, normalizing invalid input.
    ///
    /// A missing center, a missing radius, or a non-positive/non-finite
    /// radius all deactivate the radius sub-filter.
    pub fn set_radius(&mut self, center: Option<Coordinates>, radius_km: Option<f64>) {
        match (center, radius_km) {
            (Some(center), Some(radius)) if radius.is_finite() && radius > 0.0 => {
                self.center = Some(center);
                self.radius_km = Some(radius);
            }
            _ => {
                self.center = None;
                self.radius_km = None;
            }
        }
    }

    /// Derive the filter for a selection state, 1:1.
    ///
    /// Approximately-located events are always included while a
    /// selection is active.
    pub fn from_selection(state: &SelectionState) -> Self {
        let mut filter = Self {
            areas: state.selected_areas.clone(),
            ..Self::default()
        };
        filter.set_radius(state.selected_center, state.selected_radius_km);
        filter
    }

    fn has_area_filter(&self) -> bool {
        !self.areas.is_empty()
    }

    fn has_radius_filter(&self) -> bool {
        self.center.is_some() && self.radius_km.is_some()
    }

    /// Decide whether an event satisfies this filter.
    ///
    /// Decision procedure, in order:
    /// 1. no spatial data at all → fail;
    /// 2. approximately-located event vs `include_approximate` gate
    ///    (a missing location kind counts as approximate);
    /// 3. no active sub-filter → pass;
    /// 4. area membership OR radius containment (union). Area-only
    ///    events never satisfy the radius sub-filter, even when their
    ///    area's center would be in range.
    ///
    /// # Example
    /// ```
    /// use eventmap::{Event, LocationFilter};
    ///
    /// let event = Event::with_area("e1", "music", "soma");
    /// let filter = LocationFilter::with_areas(vec!["soma".to_string()]);
    /// assert!(filter.passes(&event));
    /// ```
    pub fn passes(&self, event: &Event) -> bool {
        // Non-finite coordinates are treated as absent.
        let coordinates = event.coordinates.filter(|c| c.is_valid());
        if coordinates.is_none() && event.area.is_none() {
            return false;
        }

        let kind = event.location_kind.unwrap_or(LocationKind::Approximate);
        if kind == LocationKind::Approximate && !self.include_approximate {
            return false;
        }

        let has_area_filter = self.has_area_filter();
        let has_radius_filter = self.has_radius_filter();
        if !has_area_filter && !has_radius_filter {
            return true;
        }

        let matches_area = has_area_filter
            && event
                .area
                .as_ref()
                .is_some_and(|a| self.areas.contains(a));

        let matches_radius = match (self.center, self.radius_km, coordinates) {
            (Some(center), Some(radius_km), Some(coords)) => {
                distance_km(&center, &coords) <= radius_km
            }
            _ => false,
        };

        matches_area || matches_radius
    }
}

/// Filter a batch of events, preserving input order.
pub fn filter_events<'a>(events: &'a [Event], filter: &LocationFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.passes(e)).collect()
}

/// Parallel batch filtering. Semantically identical to [`filter_events`],
/// including output order.
#[cfg(feature = "parallel")]
pub fn filter_events_parallel<'a>(events: &'a [Event], filter: &LocationFilter) -> Vec<&'a Event> {
    use rayon::prelude::*;

    events.par_iter().filter(|e| filter.passes(e)).collect()
}
