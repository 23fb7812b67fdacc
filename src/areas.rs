//! Named-area registry with flexible alias resolution.
//!
//! Area labels arrive from heterogeneous upstream sources with
//! inconsistent casing and spacing, so free-text resolution happens in
//! two stages: an exact alias-table match first, then a normalized retry
//! against the registered codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{OptionExt, Result};
use crate::{AreaCode, Coordinates};

/// A registered named area: display name plus canonical center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaInfo {
    pub display_name: String,
    pub center: Coordinates,
}

/// Static lookup of area codes to canonical coordinates.
///
/// Constructed once from configuration and never mutated at runtime.
/// The registry is an explicit object passed by reference into the
/// components that need it, so multiple region configurations (or test
/// fixtures) can coexist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRegistry {
    areas: HashMap<AreaCode, AreaInfo>,
    /// Free-text labels from upstream sources mapped to registered codes.
    #[serde(default)]
    aliases: HashMap<String, AreaCode>,
}

impl AreaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an area under a code.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        display_name: impl Into<String>,
        center: Coordinates,
    ) {
        self.areas.insert(
            code.into(),
            AreaInfo {
                display_name: display_name.into(),
                center,
            },
        );
    }

    /// Map a free-text label to a registered code.
    pub fn add_alias(&mut self, label: impl Into<String>, code: impl Into<String>) {
        self.aliases.insert(label.into(), code.into());
    }

    /// Look up an area by its exact code.
    pub fn get(&self, code: &str) -> Option<&AreaInfo> {
        self.areas.get(code)
    }

    /// Whether a code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.areas.contains_key(code)
    }

    /// Canonical center of a registered code.
    ///
    /// Total over valid codes; unknown codes return an error rather
    /// than a silent fallback.
    pub fn center_of(&self, code: &str) -> Result<Coordinates> {
        self.areas
            .get(code)
            .map(|a| a.center)
            .ok_or_unknown_area(code)
    }

    /// Resolve a free-text area label to a center coordinate.
    ///
    /// Resolution order:
    /// 1. exact match against the alias table;
    /// 2. normalize the label (lowercase, internal whitespace runs
    ///    replaced by a single hyphen) and retry as a code directly;
    /// 3. otherwise `None`; the caller decides whether to log or skip.
    ///
    /// # Example
    /// ```
    /// use eventmap::{AreaRegistry, Coordinates};
    ///
    /// let mut registry = AreaRegistry::new();
    /// registry.insert("south-beach", "South Beach", Coordinates::new(37.7785, -122.3892));
    /// registry.add_alias("SB Waterfront", "south-beach");
    ///
    /// assert!(registry.resolve_flexible("SB Waterfront").is_some());
    /// assert!(registry.resolve_flexible("South  Beach").is_some());
    /// assert!(registry.resolve_flexible("atlantis").is_none());
    /// ```
    pub fn resolve_flexible(&self, raw_name: &str) -> Option<Coordinates> {
        if let Some(code) = self.aliases.get(raw_name) {
            return self.areas.get(code).map(|a| a.center);
        }
        self.areas.get(&normalize_code(raw_name)).map(|a| a.center)
    }

    /// Display name for a free-text label, resolved alias-aware.
    pub fn display_name_of(&self, raw_name: &str) -> Option<&str> {
        let code = self
            .aliases
            .get(raw_name)
            .map(String::as_str)
            .unwrap_or(raw_name);
        self.areas
            .get(code)
            .or_else(|| self.areas.get(&normalize_code(raw_name)))
            .map(|a| a.display_name.as_str())
    }

    /// Iterate over registered codes.
    pub fn codes(&self) -> impl Iterator<Item = &AreaCode> {
        self.areas.keys()
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Normalize a free-text label into area-code form: lowercase with
/// internal whitespace runs collapsed to a single hyphen.
pub fn normalize_code(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
