//! Resolves an event to a single best coordinate.

use log::warn;

use crate::areas::AreaRegistry;
use crate::{Coordinates, Event};

/// Resolves events to coordinates against a fixed area registry.
///
/// Exact coordinates on the event take absolute priority over an area
/// lookup. Pure apart from warning logs.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateResolver<'a> {
    registry: &'a AreaRegistry,
}

impl<'a> CoordinateResolver<'a> {
    /// Create a resolver over a registry.
    pub fn new(registry: &'a AreaRegistry) -> Self {
        Self { registry }
    }

    /// The registry this resolver reads from.
    pub fn registry(&self) -> &AreaRegistry {
        self.registry
    }

    /// Resolve an event to its best coordinate.
    ///
    /// Finite exact coordinates win; otherwise the event's area is
    /// resolved through the registry's flexible lookup. Returns `None`
    /// when neither yields a usable location; the event then has no
    /// spatial representation and is excluded from spatial output.
    pub fn resolve(&self, event: &Event) -> Option<Coordinates> {
        if let Some(coords) = event.coordinates {
            if coords.is_valid() {
                return Some(coords);
            }
            // Non-finite components degrade to the area lookup below.
            warn!(
                "Event '{}' has non-finite coordinates ({}, {})",
                event.id, coords.latitude, coords.longitude
            );
        }

        let area = event.area.as_deref()?;
        match self.registry.resolve_flexible(area) {
            Some(center) => Some(center),
            None => {
                warn!("Event '{}' references unresolvable area '{}'", event.id, area);
                None
            }
        }
    }
}
