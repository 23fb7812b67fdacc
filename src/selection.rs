//! Toggle-based multi-selection state.
//!
//! Transitions are modeled as a pure reducer over [`SelectionAction`]
//! so the asymmetric clearing rules are independently testable;
//! [`SelectionStateManager`] owns the one piece of mutable state in the
//! crate.

use serde::{Deserialize, Serialize};

use crate::filter::LocationFilter;
use crate::{AreaCode, Coordinates};

/// Radius applied when a center is selected without an explicit radius.
pub const DEFAULT_SELECTED_RADIUS_KM: f64 = 1.0;

/// The user's current selection: chosen areas and/or a chosen
/// center+radius, driving both marker highlighting and filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Selected area codes in toggle order. Order matters for display
    /// only, never for filter correctness.
    #[serde(default)]
    pub selected_areas: Vec<AreaCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_center: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_radius_km: Option<f64>,
}

impl SelectionState {
    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_areas.is_empty() && self.selected_center.is_none()
    }
}

/// A selection transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionAction {
    /// Append the area if absent, remove it if present. Removing the
    /// last selected area clears the entire selection, including any
    /// active center/radius.
    ToggleArea(AreaCode),
    /// Select the center, or deselect it when toggled with the exact
    /// same coordinates. Deselecting keeps any selected areas.
    ToggleCenter {
        center: Coordinates,
        radius_km: f64,
    },
}

/// Apply an action to a selection state, returning the next state.
///
/// Each toggle is idempotent as a pair: applying it twice with the same
/// operand restores the prior state for that operand.
///
/// # Example
/// ```
/// use eventmap::selection::{apply, SelectionAction, SelectionState};
///
/// let state = SelectionState::default();
/// let toggled = apply(&state, &SelectionAction::ToggleArea("mission".to_string()));
/// let restored = apply(&toggled, &SelectionAction::ToggleArea("mission".to_string()));
/// assert!(restored.is_empty());
/// ```
pub fn apply(state: &SelectionState, action: &SelectionAction) -> SelectionState {
    match action {
        SelectionAction::ToggleArea(code) => toggle_area(state, code),
        SelectionAction::ToggleCenter { center, radius_km } => {
            toggle_center(state, *center, *radius_km)
        }
    }
}

fn toggle_area(state: &SelectionState, code: &str) -> SelectionState {
    let mut next = state.clone();
    if let Some(pos) = next.selected_areas.iter().position(|a| a == code) {
        next.selected_areas.remove(pos);
        if next.selected_areas.is_empty() {
            // Removing the last area clears the whole selection.
            next.selected_center = None;
            next.selected_radius_km = None;
        }
    } else {
        next.selected_areas.push(code.to_string());
    }
    next
}

fn toggle_center(state: &SelectionState, center: Coordinates, radius_km: f64) -> SelectionState {
    let mut next = state.clone();
    if next.selected_center == Some(center) {
        // Deselect the center only; selected areas survive.
        next.selected_center = None;
        next.selected_radius_km = None;
    } else {
        next.selected_center = Some(center);
        next.selected_radius_km = Some(radius_km);
    }
    next
}

/// Owns the current selection state and applies toggle transitions.
#[derive(Debug, Clone, Default)]
pub struct SelectionStateManager {
    state: SelectionState,
}

impl SelectionStateManager {
    /// Create a manager with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    /// Toggle an area in or out of the selection.
    pub fn toggle_area(&mut self, code: impl Into<String>) {
        self.state = apply(&self.state, &SelectionAction::ToggleArea(code.into()));
    }

    /// Toggle a center+radius selection.
    pub fn toggle_center(&mut self, center: Coordinates, radius_km: f64) {
        self.state = apply(
            &self.state,
            &SelectionAction::ToggleCenter { center, radius_km },
        );
    }

    /// Clear the entire selection.
    pub fn clear(&mut self) {
        self.state = SelectionState::default();
    }

    /// Whether an area is currently selected.
    pub fn is_area_selected(&self, code: &str) -> bool {
        self.state.selected_areas.iter().any(|a| a == code)
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.state.is_empty()
    }

    /// Derive the location filter for the current selection.
    pub fn filter(&self) -> LocationFilter {
        LocationFilter::from_selection(&self.state)
    }
}
