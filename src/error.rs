//! Unified error handling for the eventmap crate.
//!
//! No failure mode in this core is fatal: unresolvable areas and invalid
//! coordinates degrade to "exclude this one event". The error type exists
//! for callers that want the reason (registry lookups, CLI I/O) rather
//! than the soft `Option`-returning paths.

use thiserror::Error;

/// Errors produced by the eventmap crate.
#[derive(Debug, Error)]
pub enum EventMapError {
    /// An area code was not found in the registry.
    #[error("Unknown area code '{code}'")]
    UnknownArea { code: String },

    /// An event carried non-finite coordinate components.
    #[error("Event '{event_id}' has non-finite coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        event_id: String,
        latitude: f64,
        longitude: f64,
    },

    /// I/O failure while loading events or registry configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in an events or registry file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EventMapError>;

/// Extension methods for converting `Option` into contextual errors.
pub trait OptionExt<T> {
    /// Convert `None` into an `UnknownArea` error for the given code.
    fn ok_or_unknown_area(self, code: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown_area(self, code: &str) -> Result<T> {
        self.ok_or_else(|| EventMapError::UnknownArea {
            code: code.to_string(),
        })
    }
}
