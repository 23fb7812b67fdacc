//! Spatial indexing for viewport queries.
//!
//! Uses an R-tree to efficiently query built markers by geographic bounds.

use rstar::{RTree, RTreeObject, AABB};

use crate::geo_utils::meters_to_degrees;
use crate::{Bounds, Marker};

/// Marker position wrapper for R-tree spatial indexing.
#[derive(Debug, Clone)]
pub struct MarkerPosition {
    pub marker_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RTreeObject for MarkerPosition {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.longitude, self.latitude])
    }
}

/// Spatial index over built markers.
///
/// Markers are rebuilt from scratch on every clustering pass, so the
/// index is bulk-loaded from a finished marker list rather than
/// maintained incrementally.
#[derive(Debug)]
pub struct MarkerIndex {
    tree: RTree<MarkerPosition>,
}

impl Default for MarkerIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from a marker list.
    pub fn build(markers: &[Marker]) -> Self {
        let positions: Vec<MarkerPosition> = markers
            .iter()
            .map(|m| MarkerPosition {
                marker_id: m.id.clone(),
                latitude: m.coordinates.latitude,
                longitude: m.coordinates.longitude,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(positions),
        }
    }

    /// Query marker ids within a viewport.
    pub fn query_viewport(&self, bounds: &Bounds) -> Vec<String> {
        let search_bounds = AABB::from_corners(
            [bounds.min_lng, bounds.min_lat],
            [bounds.max_lng, bounds.max_lat],
        );

        self.tree
            .locate_in_envelope_intersecting(&search_bounds)
            .map(|p| p.marker_id.clone())
            .collect()
    }

    /// Find marker ids near a point, by bounding-box approximation.
    pub fn find_nearby(&self, latitude: f64, longitude: f64, radius_meters: f64) -> Vec<String> {
        let radius_degrees = meters_to_degrees(radius_meters, latitude);
        self.query_viewport(&Bounds {
            min_lat: latitude - radius_degrees,
            max_lat: latitude + radius_degrees,
            min_lng: longitude - radius_degrees,
            max_lng: longitude + radius_degrees,
        })
    }

    /// Number of indexed markers.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
