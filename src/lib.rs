//! # Event Map
//!
//! Geospatial clustering and location-filter engine for interactive event maps.
//!
//! This library provides:
//! - Greedy proximity clustering of events into map markers
//! - Composite location filtering (union of area membership and radius)
//! - Toggle-based multi-selection state with a pure reducer
//! - Named-area registry with flexible alias resolution
//! - R-tree viewport queries over built markers
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch filtering with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use eventmap::{
//!     build_markers, AreaRegistry, ClusterConfig, CoordinateResolver, Coordinates, Event,
//!     SelectionState,
//! };
//!
//! let mut registry = AreaRegistry::new();
//! registry.insert("mission", "Mission District", Coordinates::new(37.7599, -122.4148));
//!
//! let events = vec![
//!     Event::with_coordinates("e1", "music", Coordinates::new(37.7749, -122.4194)),
//!     Event::with_area("e2", "food", "mission"),
//! ];
//!
//! let resolver = CoordinateResolver::new(&registry);
//! let markers = build_markers(
//!     &events,
//!     &resolver,
//!     &SelectionState::default(),
//!     &ClusterConfig::default(),
//! );
//! assert_eq!(markers.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{EventMapError, OptionExt, Result};

// Geographic utilities (haversine distance, unit conversions)
pub mod geo_utils;

// Named-area registry with alias resolution
pub mod areas;
pub use areas::{AreaInfo, AreaRegistry};

// Event-to-coordinate resolution
pub mod resolver;
pub use resolver::CoordinateResolver;

// Marker clustering
pub mod clustering;
pub use clustering::{build_markers, primary_category};

// Composite location filtering
pub mod filter;
#[cfg(feature = "parallel")]
pub use filter::filter_events_parallel;
pub use filter::{filter_events, LocationFilter};

// Multi-selection state
pub mod selection;
pub use selection::{
    SelectionAction, SelectionState, SelectionStateManager, DEFAULT_SELECTED_RADIUS_KM,
};

// Engine facade with viewport index
pub mod engine;
pub use engine::{EventMapEngine, MarkerIndex};

// Synthetic event generation for benchmarks and the CLI
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// Opaque key identifying a named area with a fixed canonical center.
pub type AreaCode = String;

/// A geographic coordinate pair.
///
/// Only finiteness is validated; out-of-range values are not clamped.
/// Serializes as `{ "lat": …, "lng": … }` to match the upstream event shape.
///
/// # Example
/// ```
/// use eventmap::Coordinates;
/// let point = Coordinates::new(37.7749, -122.4194); // San Francisco
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// How an event's position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// The event carries its own exact coordinates.
    Exact,
    /// The event is located only via its area's canonical center.
    Approximate,
}

/// An event as supplied by the data-fetch layer.
///
/// Only the spatially relevant subset of fields is modeled here. An event
/// with neither `coordinates` nor `area` has no spatial representation and
/// is excluded from clustering and from any active location filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaCode>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "locationType"
    )]
    pub location_kind: Option<LocationKind>,
}

impl Event {
    /// Create an exactly-located event.
    pub fn with_coordinates(
        id: impl Into<String>,
        category: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            coordinates: Some(coordinates),
            area: None,
            location_kind: Some(LocationKind::Exact),
        }
    }

    /// Create an event located only via a named area.
    pub fn with_area(
        id: impl Into<String>,
        category: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            coordinates: None,
            area: Some(area.into()),
            location_kind: Some(LocationKind::Approximate),
        }
    }

    /// Whether the event has any spatial data at all.
    pub fn has_spatial_data(&self) -> bool {
        self.coordinates.is_some() || self.area.is_some()
    }
}

/// A map marker representing one or more co-located events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Marker identifier: the id of the first member assigned to it.
    pub id: String,
    /// Position of the first member; never recomputed as members join.
    pub coordinates: Coordinates,
    /// Member events in assignment order.
    pub members: Vec<Event>,
    /// True exactly when the marker holds more than one member.
    pub is_cluster: bool,
    /// Majority-vote category over members, ties broken by first occurrence.
    pub primary_category: String,
    /// Area of the first member, if it had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaCode>,
    /// Whether any member matched the active selection.
    pub is_selected: bool,
    #[serde(rename = "locationType")]
    pub location_kind: LocationKind,
}

/// Bounding box for viewport queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds covering a set of markers.
    pub fn from_markers(markers: &[Marker]) -> Option<Self> {
        if markers.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for m in markers {
            min_lat = min_lat.min(m.coordinates.latitude);
            max_lat = max_lat.max(m.coordinates.latitude);
            min_lng = min_lng.min(m.coordinates.longitude);
            max_lng = max_lng.max(m.coordinates.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Configuration for the clustering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Radius in meters within which events collapse into one marker.
    /// Governs visual grouping only. Default: 100.0
    pub cluster_radius_meters: f64,

    /// Tolerance in meters for matching an event against the selected
    /// center. Independent from `cluster_radius_meters`, which governs
    /// visual grouping only. Default: 50.0
    pub selection_proximity_meters: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            cluster_radius_meters: 100.0,
            selection_proximity_meters: 50.0,
        }
    }
}
