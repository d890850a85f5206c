// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display unit registry for coinfmt
//!
//! Maps base denominations (what the chain tracks, e.g. `uatom`) to the
//! [`DisplayUnit`] shown to users (e.g. `ATOM`, exponent 6). Lookups are
//! exact and case-sensitive. The registry is plain data supplied by the
//! caller; coinfmt never discovers or caches units on its own.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use coinfmt::DisplayUnits;
//!
//! let units = DisplayUnits::with_common_defaults();
//! assert_eq!(units.get("uatom").map(|u| u.exponent), Some(6));
//!
//! // `Default` is the empty registry; callers opt in to the well-known units
//! assert!(DisplayUnits::default().is_empty());
//! ```
//!
//! # Example: Custom registry
//!
//! ```rust
//! use coinfmt::DisplayUnitsBuilder;
//!
//! let units = DisplayUnitsBuilder::new()
//!     .unit("wei", "ETH", 18)
//!     .unit("uusdc", "USDC", 6)
//!     .build();
//! assert_eq!(units.len(), 2);
//! ```
//!
//! # Example: Loading from JSON
//!
//! ```rust
//! use coinfmt::DisplayUnits;
//!
//! let units = DisplayUnits::from_json(r#"{"ujuno": {"denom": "JUNO", "exponent": 6}}"#)?;
//! assert_eq!(units.get("ujuno").map(|u| u.denom.as_str()), Some("JUNO"));
//! # Ok::<(), coinfmt::RegistryError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::spans;
use crate::types::DisplayUnit;

pub mod constants;

/// Mapping from base denomination to display unit
///
/// Use [`DisplayUnitsBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayUnits {
    units: HashMap<String, DisplayUnit>,
}

impl DisplayUnits {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with well-known Cosmos denominations
    ///
    /// | base     | display | exponent |
    /// |----------|---------|----------|
    /// | `ucosm`  | `COSM`  | 6        |
    /// | `ustake` | `STAKE` | 6        |
    /// | `uatom`  | `ATOM`  | 6        |
    /// | `uosmo`  | `OSMO`  | 6        |
    ///
    /// # Example
    ///
    /// ```rust
    /// use coinfmt::DisplayUnits;
    ///
    /// let units = DisplayUnits::with_common_defaults();
    /// assert_eq!(units.get("ustake").map(|u| u.denom.as_str()), Some("STAKE"));
    /// assert!(units.get("USTAKE").is_none());
    /// ```
    pub fn with_common_defaults() -> Self {
        let mut units = Self::new();
        // Test denominations used by wasmd/simapp devnets
        units.insert("ucosm", DisplayUnit::new("COSM", 6));
        units.insert("ustake", DisplayUnit::new("STAKE", 6));
        units.insert("uatom", DisplayUnit::new("ATOM", 6));
        units.insert("uosmo", DisplayUnit::new("OSMO", 6));
        units
    }

    /// Parse a registry from a JSON object keyed by base denomination
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] if the text is not an object of
    /// `{"denom": string, "exponent": non-negative integer}` values, and
    /// [`RegistryError::ExponentOutOfRange`] if an exponent exceeds
    /// [`DisplayUnit::MAX_EXPONENT`].
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let span = spans::load_display_units_json(json.len());
        let _guard = span.enter();

        let units: Self = serde_json::from_str(json).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected display unit registry");
        })?;
        if let Some((base_denom, unit)) = units
            .iter()
            .find(|(_, unit)| unit.exponent > DisplayUnit::MAX_EXPONENT)
        {
            tracing::warn!(
                base_denom = base_denom,
                exponent = unit.exponent,
                "Rejected display unit exponent"
            );
            return Err(RegistryError::exponent_out_of_range(
                base_denom,
                unit.exponent,
            ));
        }
        tracing::debug!(unit_count = units.len(), "Loaded display unit registry");
        Ok(units)
    }

    /// Read and parse a registry file
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read and
    /// [`RegistryError::Json`] if its content is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let span = spans::load_display_units_file(path);
        let _guard = span.enter();

        let json = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Register (or replace) the display unit for a base denomination
    ///
    /// Returns the previously registered unit, if any.
    pub fn insert(
        &mut self,
        base_denom: impl Into<String>,
        unit: DisplayUnit,
    ) -> Option<DisplayUnit> {
        self.units.insert(base_denom.into(), unit)
    }

    /// Look up the display unit for a base denomination (exact match)
    pub fn get(&self, base_denom: &str) -> Option<&DisplayUnit> {
        self.units.get(base_denom)
    }

    /// Check if a base denomination has a display unit
    pub fn contains(&self, base_denom: &str) -> bool {
        self.units.contains_key(base_denom)
    }

    /// Number of registered base denominations
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over `(base_denom, unit)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayUnit)> {
        self.units.iter().map(|(base, unit)| (base.as_str(), unit))
    }
}

impl<K: Into<String>> FromIterator<(K, DisplayUnit)> for DisplayUnits {
    fn from_iter<T: IntoIterator<Item = (K, DisplayUnit)>>(iter: T) -> Self {
        Self {
            units: iter
                .into_iter()
                .map(|(base, unit)| (base.into(), unit))
                .collect(),
        }
    }
}

/// Builder for [`DisplayUnits`]
///
/// # Example
///
/// ```rust
/// use coinfmt::DisplayUnitsBuilder;
///
/// let units = DisplayUnitsBuilder::with_defaults()
///     .unit("ujuno", "JUNO", 6)
///     .build();
/// assert!(units.contains("uatom"));
/// assert!(units.contains("ujuno"));
/// ```
#[derive(Debug, Default)]
pub struct DisplayUnitsBuilder {
    units: DisplayUnits,
}

impl DisplayUnitsBuilder {
    /// Create a new builder with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same units as
    /// [`DisplayUnits::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            units: DisplayUnits::with_common_defaults(),
        }
    }

    /// Register a display unit for a base denomination
    ///
    /// A later call for the same base denomination replaces the earlier one.
    pub fn unit(
        mut self,
        base_denom: impl Into<String>,
        display_denom: impl Into<String>,
        exponent: u32,
    ) -> Self {
        self.units
            .insert(base_denom, DisplayUnit::new(display_denom, exponent));
        self
    }

    /// Register a prebuilt display unit for a base denomination
    pub fn display_unit(mut self, base_denom: impl Into<String>, unit: DisplayUnit) -> Self {
        self.units.insert(base_denom, unit);
        self
    }

    /// Build the final registry
    pub fn build(self) -> DisplayUnits {
        self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let units = DisplayUnits::default();
        assert!(units.is_empty());

        let units = DisplayUnits::with_common_defaults();
        assert_eq!(units.len(), 4);
        assert_eq!(units.get("ucosm"), Some(&DisplayUnit::new("COSM", 6)));
        assert_eq!(units.get("ustake"), Some(&DisplayUnit::new("STAKE", 6)));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let units = DisplayUnits::with_common_defaults();
        assert!(units.get("UCOSM").is_none());
        assert!(units.get("ucosm ").is_none());
        assert!(units.get("COSM").is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let units = DisplayUnitsBuilder::new()
            .unit("wei", "ETH", 18)
            .display_unit("satoshi", DisplayUnit::new("BTC", 8))
            .build();

        assert_eq!(units.get("wei"), Some(&DisplayUnit::new("ETH", 18)));
        assert_eq!(units.get("satoshi"), Some(&DisplayUnit::new("BTC", 8)));
        assert!(!units.contains("uatom"));
    }

    #[test]
    fn test_builder_later_unit_replaces_earlier() {
        let units = DisplayUnitsBuilder::with_defaults()
            .unit("uatom", "MATOM", 12)
            .build();

        assert_eq!(units.get("uatom"), Some(&DisplayUnit::new("MATOM", 12)));
        assert_eq!(units.len(), 4);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut units = DisplayUnits::new();
        assert!(units.insert("ucosm", DisplayUnit::new("COSM", 6)).is_none());
        let previous = units.insert("ucosm", DisplayUnit::new("MCOSM", 3));
        assert_eq!(previous, Some(DisplayUnit::new("COSM", 6)));
    }

    #[test]
    fn test_from_iterator() {
        let units: DisplayUnits = vec![("ucosm", DisplayUnit::new("COSM", 6))]
            .into_iter()
            .collect();
        assert!(units.contains("ucosm"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "ucosm": {"denom": "COSM", "exponent": 6},
            "wei": {"denom": "ETH", "exponent": 18}
        }"#;
        let units = DisplayUnits::from_json(json).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units.get("wei"), Some(&DisplayUnit::new("ETH", 18)));
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(matches!(
            DisplayUnits::from_json(r#"{"ucosm": {"denom": "COSM"}}"#),
            Err(RegistryError::Json(_))
        ));
        assert!(matches!(
            DisplayUnits::from_json(r#"["ucosm"]"#),
            Err(RegistryError::Json(_))
        ));
        assert!(matches!(
            DisplayUnits::from_json(r#"{"ucosm": {"denom": "COSM", "exponent": -6}}"#),
            Err(RegistryError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_oversized_exponent() {
        let json = r#"{
            "ucosm": {"denom": "COSM", "exponent": 6},
            "uhuge": {"denom": "HUGE", "exponent": 4000000000}
        }"#;
        assert!(matches!(
            DisplayUnits::from_json(json),
            Err(RegistryError::ExponentOutOfRange {
                ref base_denom,
                exponent: 4_000_000_000,
            }) if base_denom == "uhuge"
        ));
    }

    #[test]
    fn test_from_json_accepts_max_exponent() {
        let json = r#"{"ubig": {"denom": "BIG", "exponent": 255}}"#;
        let units = DisplayUnits::from_json(json).unwrap();
        assert_eq!(
            units.get("ubig").map(|u| u.exponent),
            Some(DisplayUnit::MAX_EXPONENT)
        );
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = DisplayUnits::from_json_file("/nonexistent/coinfmt/units.json");
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }

    #[test]
    fn test_serialization_round_trip() {
        let units = DisplayUnits::with_common_defaults();
        let json = serde_json::to_string(&units).unwrap();
        let restored = DisplayUnits::from_json(&json).unwrap();
        assert_eq!(units, restored);
    }
}
