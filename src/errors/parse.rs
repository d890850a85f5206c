// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for numeric and coin string parsing.
//!
//! Every variant carries the offending input so callers can report exactly
//! which value was rejected.

/// Errors raised when a string violates the canonical digit grammar.
///
/// The canonical grammar is: ASCII decimal digits only, no sign, no exponent
/// notation, no leading zeros other than the literal `"0"`. Decimals add an
/// optional `.` followed by at least one digit.
///
/// # Examples
///
/// ```rust
/// use coinfmt::{ParseError, Uint};
///
/// let err = Uint::parse("0123").unwrap_err();
/// assert!(matches!(err, ParseError::LeadingZero { .. }));
/// assert_eq!(err.to_string(), "Leading zero in numeric string \"0123\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was the empty string.
    #[error("Empty numeric string")]
    Empty,

    /// The input carried a minus sign.
    ///
    /// On-chain amounts are unsigned, so negative values are never rendered.
    #[error("Negative value not allowed: {input:?}")]
    Negative {
        /// The rejected input
        input: String,
    },

    /// A character outside the digit grammar was found.
    ///
    /// This covers `+` signs, exponent notation (`1e18`), whitespace and
    /// grouping separators in the input.
    #[error("Invalid character {character:?} at position {position} in {input:?}")]
    InvalidCharacter {
        /// The rejected input
        input: String,
        /// Byte offset of the offending character
        position: usize,
        /// The offending character
        character: char,
    },

    /// The integer (or whole) part had a leading zero.
    #[error("Leading zero in numeric string {input:?}")]
    LeadingZero {
        /// The rejected input
        input: String,
    },

    /// A decimal contained more than one `.`.
    #[error("Multiple decimal points in {input:?}")]
    MultipleDecimalPoints {
        /// The rejected input
        input: String,
    },

    /// A decimal started with `.` (e.g. `".5"`).
    #[error("Missing whole part in {input:?}")]
    MissingWholePart {
        /// The rejected input
        input: String,
    },

    /// A decimal ended with `.` (e.g. `"1."`).
    #[error("Missing fractional digits after decimal point in {input:?}")]
    MissingFraction {
        /// The rejected input
        input: String,
    },

    /// A decimal's power-of-ten scale does not fit in 32 bits.
    #[error("Decimal scale out of range in {input:?}")]
    ScaleOutOfRange {
        /// The rejected input
        input: String,
    },

    /// A coin string did not have the `<amount><denom>` shape.
    #[error("Invalid coin {input:?}: {reason}")]
    InvalidCoin {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ParseError {
    /// Create an `InvalidCoin` error with a reason.
    pub fn invalid_coin(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::InvalidCoin {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
