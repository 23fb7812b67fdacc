//! # Event Map Engine
//!
//! Facade composing the area registry, selection state and clustering
//! configuration behind a single object:
//! - `EventMapEngine` - batch clustering and filtering entry points
//! - `MarkerIndex` - R-tree viewport queries over built markers

pub mod spatial_index;
pub use spatial_index::{MarkerIndex, MarkerPosition};

use crate::areas::AreaRegistry;
use crate::clustering::build_markers;
use crate::filter::{filter_events, LocationFilter};
use crate::resolver::CoordinateResolver;
use crate::selection::{SelectionState, SelectionStateManager, DEFAULT_SELECTED_RADIUS_KM};
use crate::{ClusterConfig, Coordinates, Event, Marker};

/// Engine facade over the clustering and filtering core.
///
/// Holds the static registry, the mutable selection state and the
/// clustering configuration. Events are supplied fresh on each call;
/// markers are rebuilt from scratch every time, with nothing retained
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct EventMapEngine {
    registry: AreaRegistry,
    selection: SelectionStateManager,
    config: ClusterConfig,
}

impl EventMapEngine {
    /// Create an engine with default clustering configuration.
    pub fn new(registry: AreaRegistry) -> Self {
        Self::with_config(registry, ClusterConfig::default())
    }

    /// Create an engine with custom clustering configuration.
    pub fn with_config(registry: AreaRegistry, config: ClusterConfig) -> Self {
        Self {
            registry,
            selection: SelectionStateManager::new(),
            config,
        }
    }

    /// The area registry this engine resolves against.
    pub fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    /// The clustering configuration.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    // ========================================================================
    // Spatial output
    // ========================================================================

    /// Build markers from events for the current selection.
    pub fn build_markers(&self, events: &[Event]) -> Vec<Marker> {
        let resolver = CoordinateResolver::new(&self.registry);
        build_markers(events, &resolver, self.selection.selection(), &self.config)
    }

    /// The location filter derived from the current selection.
    pub fn filter(&self) -> LocationFilter {
        self.selection.filter()
    }

    /// Events passing the current selection's filter, in input order.
    pub fn filtered_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, &self.filter())
    }

    // ========================================================================
    // Selection (delegates to SelectionStateManager)
    // ========================================================================

    /// Toggle an area in or out of the selection.
    pub fn toggle_area(&mut self, code: impl Into<String>) {
        self.selection.toggle_area(code);
    }

    /// Toggle a center+radius selection.
    pub fn toggle_center(&mut self, center: Coordinates, radius_km: f64) {
        self.selection.toggle_center(center, radius_km);
    }

    /// Toggle a center selection with the default radius.
    pub fn toggle_center_default(&mut self, center: Coordinates) {
        self.toggle_center(center, DEFAULT_SELECTED_RADIUS_KM);
    }

    /// The current selection state, for UI components that reflect it.
    pub fn selection(&self) -> &SelectionState {
        self.selection.selection()
    }

    /// Clear the entire selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Whether an area is currently selected.
    pub fn is_area_selected(&self, code: &str) -> bool {
        self.selection.is_area_selected(code)
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }
}
