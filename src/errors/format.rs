// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for multi-coin formatting.

/// Errors that can occur while formatting a coin collection.
///
/// Formatting never produces partial output: if any coin cannot be rendered,
/// the whole call fails with the denomination that was missing.
///
/// # Examples
///
/// ```rust
/// use coinfmt::{format_coins, Coin, DisplayUnits, FormatError};
///
/// let coins = vec![Coin::parse("5", "unknown")?];
/// let err = format_coins(&coins, &DisplayUnits::new()).unwrap_err();
/// assert_eq!(err, FormatError::UnmappedDenom { denom: "unknown".to_string() });
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No display unit is registered for the coin's base denomination.
    ///
    /// Lookups are exact and case-sensitive, so `"UCOSM"` does not match a
    /// unit registered under `"ucosm"`.
    #[error("No display unit registered for denomination {denom:?}")]
    UnmappedDenom {
        /// The base denomination that had no display unit
        denom: String,
    },
}

impl FormatError {
    /// Create an `UnmappedDenom` error for a base denomination.
    pub fn unmapped_denom(denom: impl Into<String>) -> Self {
        FormatError::UnmappedDenom {
            denom: denom.into(),
        }
    }
}
