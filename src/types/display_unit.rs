// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display denomination type

use serde::{Deserialize, Serialize};

/// Human-facing denomination and its power-of-ten distance from the base unit
///
/// `display_amount = base_amount / 10^exponent`. For example a chain that
/// tracks `uatom` (micro-ATOM) displays `ATOM` with exponent 6.
///
/// # Examples
///
/// ```
/// use coinfmt::DisplayUnit;
///
/// let atom = DisplayUnit::new("ATOM", 6);
/// assert_eq!(atom.denom, "ATOM");
/// assert_eq!(atom.exponent, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayUnit {
    /// Denomination shown to users (e.g. `"ATOM"`)
    pub denom: String,
    /// Number of fractional digits between the base unit and this unit
    pub exponent: u32,
}

impl DisplayUnit {
    /// Largest exponent accepted when a registry is loaded from JSON
    ///
    /// Rendering allocates one byte per fractional digit, so an unbounded
    /// exponent from untrusted data could exhaust memory.
    pub const MAX_EXPONENT: u32 = 255;

    /// Create a new display unit
    ///
    /// The exponent is not bounded here; registries loaded with
    /// [`DisplayUnits::from_json`](crate::DisplayUnits::from_json) reject
    /// exponents above [`Self::MAX_EXPONENT`].
    pub fn new(denom: impl Into<String>, exponent: u32) -> Self {
        Self {
            denom: denom.into(),
            exponent,
        }
    }
}

impl std::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (10^{})", self.denom, self.exponent)
    }
}
