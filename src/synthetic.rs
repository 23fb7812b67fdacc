//! Synthetic event generator for stress testing and benchmarking.
//!
//! Generates event sets scattered around a configurable number of
//! hotspots, providing deterministic (seeded) input for clustering
//! benchmarks and the CLI.
//!
//! # Example
//!
//! ```rust
//! use eventmap::synthetic::SyntheticScenario;
//!
//! let scenario = SyntheticScenario {
//!     hotspot_count: 5,
//!     events_per_hotspot: 10,
//!     ..Default::default()
//! };
//!
//! let events = scenario.generate();
//! assert_eq!(events.len(), 50);
//! // Same seed, same output.
//! assert_eq!(events, scenario.generate());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Coordinates, Event};

/// Configuration for a synthetic event set.
#[derive(Debug, Clone)]
pub struct SyntheticScenario {
    /// Map origin around which hotspots are placed.
    pub origin: Coordinates,
    /// Number of distinct hotspots.
    pub hotspot_count: usize,
    /// Events generated per hotspot.
    pub events_per_hotspot: usize,
    /// Spread of events around their hotspot in meters.
    pub hotspot_spread_meters: f64,
    /// Maximum hotspot offset from the origin in meters.
    pub map_extent_meters: f64,
    /// Categories cycled through the generated events.
    pub categories: Vec<String>,
    /// RNG seed for reproducible output.
    pub seed: u64,
}

impl Default for SyntheticScenario {
    fn default() -> Self {
        Self {
            origin: Coordinates::new(37.7749, -122.4194),
            hotspot_count: 10,
            events_per_hotspot: 20,
            hotspot_spread_meters: 40.0,
            map_extent_meters: 5_000.0,
            categories: vec![
                "music".to_string(),
                "food".to_string(),
                "art".to_string(),
                "sports".to_string(),
            ],
            seed: 42,
        }
    }
}

impl SyntheticScenario {
    /// Generate the event set for this scenario.
    pub fn generate(&self) -> Vec<Event> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut events = Vec::with_capacity(self.hotspot_count * self.events_per_hotspot);

        for h in 0..self.hotspot_count {
            let extent = self.map_extent_meters.max(1.0);
            let hotspot = offset_meters(
                self.origin,
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            );

            for i in 0..self.events_per_hotspot {
                let spread = self.hotspot_spread_meters.max(1.0);
                let coordinates = offset_meters(
                    hotspot,
                    rng.gen_range(-spread..spread),
                    rng.gen_range(-spread..spread),
                );

                let category = if self.categories.is_empty() {
                    "general".to_string()
                } else {
                    self.categories[events.len() % self.categories.len()].clone()
                };

                events.push(Event::with_coordinates(
                    format!("event-{h}-{i}"),
                    category,
                    coordinates,
                ));
            }
        }

        events
    }
}

/// Offset a coordinate by metric east/north deltas.
///
/// Flat-earth approximation, fine at city scale.
fn offset_meters(origin: Coordinates, east: f64, north: f64) -> Coordinates {
    let latitude = origin.latitude + north / 111_320.0;
    let longitude =
        origin.longitude + east / (111_320.0 * origin.latitude.to_radians().cos().max(0.01));
    Coordinates::new(latitude, longitude)
}
