// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary-precision unsigned integer stored as a canonical digit string

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ParseError;
use crate::format::group_digits;

/// Non-negative integer of unbounded size, kept as its exact decimal digits
///
/// On-chain amounts routinely exceed the 53-bit mantissa of an `f64` (one
/// token on an 18-decimal chain is already `10^18` base units), so this type
/// never converts to a machine number. It only guarantees the digits obey the
/// canonical grammar: non-empty, ASCII digits, no sign, and no leading zeros
/// other than the literal `"0"`.
///
/// # Examples
///
/// ```
/// use coinfmt::Uint;
///
/// let amount = Uint::parse("1000000000000000000000000")?;
/// assert_eq!(amount.len(), 25);
/// assert_eq!(amount.grouped(), "1'000'000'000'000'000'000'000'000");
///
/// assert!(Uint::parse("1e18").is_err());
/// assert!(Uint::parse("007").is_err());
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uint(String);

impl Uint {
    /// The value zero
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Parse a canonical digit string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] identifying the input if it is empty, signed,
    /// contains a non-digit, or has a leading zero.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        validate_integer(input, input, 0)?;
        Ok(Self(input.to_string()))
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of decimal digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a canonical digit string has at least one digit
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Render with `'` between every group of three digits, counted from the right
    ///
    /// # Examples
    ///
    /// ```
    /// use coinfmt::Uint;
    ///
    /// assert_eq!(Uint::from(1234567u64).grouped(), "1'234'567");
    /// assert_eq!(Uint::from(999u64).grouped(), "999");
    /// ```
    pub fn grouped(&self) -> String {
        group_digits(&self.0)
    }

    /// Consume and return the digit string
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Check `part` against the integer grammar.
///
/// `input` is the full string being parsed and `offset` is where `part`
/// starts inside it, so errors report positions in the caller's terms.
pub(crate) fn validate_integer(input: &str, part: &str, offset: usize) -> Result<(), ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    if input.starts_with('-') {
        return Err(ParseError::Negative {
            input: input.to_string(),
        });
    }
    validate_digits(input, part, offset)?;
    if part.len() > 1 && part.starts_with('0') {
        return Err(ParseError::LeadingZero {
            input: input.to_string(),
        });
    }
    Ok(())
}

/// Check that every character of `part` is an ASCII digit.
pub(crate) fn validate_digits(input: &str, part: &str, offset: usize) -> Result<(), ParseError> {
    match part.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(ParseError::InvalidCharacter {
            input: input.to_string(),
            position: offset + position,
            character,
        }),
        None => Ok(()),
    }
}

impl FromStr for Uint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uint {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_integer(&value, &value, 0)?;
        Ok(Self(value))
    }
}

impl From<Uint> for String {
    fn from(value: Uint) -> Self {
        value.0
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u128> for Uint {
    fn from(value: u128) -> Self {
        Self(value.to_string())
    }
}

impl From<U256> for Uint {
    fn from(value: U256) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Uint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
