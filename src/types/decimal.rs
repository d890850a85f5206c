// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary-precision non-negative decimal stored as digit strings
//!
//! Shifting the decimal point is done by slicing and padding the digits, so
//! no value ever passes through a fixed-width or floating-point type.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::integer::{validate_digits, validate_integer, Uint};
use crate::config::constants::DECIMAL_POINT;
use crate::errors::ParseError;
use crate::format::group_digits;

/// Non-negative decimal of unbounded precision: `<whole>[.<fraction>]`
///
/// The whole part follows the [`Uint`] grammar. The fraction, when present,
/// is one or more digits and is kept exactly as supplied, trailing zeros
/// included, because `"1.500000"` and `"1.5"` carry different display
/// precision.
///
/// # Examples
///
/// ```
/// use coinfmt::{Decimal, Uint};
///
/// let value = Decimal::parse("1234.5000")?;
/// assert_eq!(value.whole(), "1234");
/// assert_eq!(value.fraction(), Some("5000"));
///
/// // 1 base unit of a 6-decimal token
/// let atomics = Decimal::from_atomics(&Uint::from(1u64), 6);
/// assert_eq!(atomics.to_string(), "0.000001");
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal {
    whole: String,
    fraction: String,
}

impl Decimal {
    /// Largest power-of-ten scale accepted from a [`BigDecimal`]
    pub const MAX_SCALE: u32 = 1024;

    /// Parse a canonical decimal string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] identifying the input if the whole part breaks
    /// the integer grammar, if there is more than one `.`, or if either side
    /// of the `.` is empty.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let Some((whole, fraction)) = input.split_once(DECIMAL_POINT) else {
            validate_integer(input, input, 0)?;
            return Ok(Self::integer(input));
        };

        if whole.is_empty() {
            return Err(ParseError::MissingWholePart {
                input: input.to_string(),
            });
        }
        validate_integer(input, whole, 0)?;

        let fraction_offset = whole.len() + DECIMAL_POINT.len_utf8();
        if fraction.contains(DECIMAL_POINT) {
            return Err(ParseError::MultipleDecimalPoints {
                input: input.to_string(),
            });
        }
        if fraction.is_empty() {
            return Err(ParseError::MissingFraction {
                input: input.to_string(),
            });
        }
        validate_digits(input, fraction, fraction_offset)?;

        Ok(Self {
            whole: whole.to_string(),
            fraction: fraction.to_string(),
        })
    }

    /// Convert a base-unit amount to display units: `amount / 10^exponent`
    ///
    /// The result has exactly `exponent` fractional digits. When the amount
    /// has no more digits than the exponent, the whole part is `"0"` and the
    /// fraction is left-padded with zeros. An exponent of 0 yields an
    /// integer with no decimal point.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinfmt::{Decimal, Uint};
    ///
    /// let amount = Uint::from(1_234_567u64);
    /// assert_eq!(Decimal::from_atomics(&amount, 6).to_string(), "1.234567");
    /// assert_eq!(Decimal::from_atomics(&amount, 9).to_string(), "0.001234567");
    /// assert_eq!(Decimal::from_atomics(&amount, 0).to_string(), "1234567");
    /// ```
    pub fn from_atomics(amount: &Uint, exponent: u32) -> Self {
        Self::integer(amount.as_str()).scale_down(exponent)
    }

    /// Divide by `10^places`, moving the decimal point left
    ///
    /// Every existing digit is kept, so the fraction grows by `places`.
    pub fn scale_down(&self, places: u32) -> Self {
        let places = places as usize;
        let digits = format!("{}{}", self.whole, self.fraction);

        let (whole, fraction) = if places >= self.whole.len() {
            let padding = "0".repeat(places - self.whole.len());
            (String::new(), format!("{padding}{digits}"))
        } else {
            let point = self.whole.len() - places;
            (digits[..point].to_string(), digits[point..].to_string())
        };

        Self::from_parts(whole, fraction)
    }

    /// Multiply by `10^places`, moving the decimal point right
    ///
    /// Fractional digits move into the whole part; when the fraction runs
    /// out, the whole part is padded with zeros.
    pub fn scale_up(&self, places: u32) -> Self {
        let places = places as usize;
        let mut digits = format!("{}{}", self.whole, self.fraction);
        let point = self.whole.len() + places;

        if point >= digits.len() {
            digits.push_str(&"0".repeat(point - digits.len()));
            return Self::from_parts(digits, String::new());
        }

        let fraction = digits.split_off(point);
        Self::from_parts(digits, fraction)
    }

    /// Integer part, always at least one digit
    pub fn whole(&self) -> &str {
        &self.whole
    }

    /// Fractional digits, or `None` when there is no decimal point
    pub fn fraction(&self) -> Option<&str> {
        if self.fraction.is_empty() {
            None
        } else {
            Some(&self.fraction)
        }
    }

    /// Check if the value has no decimal point
    pub fn is_integer(&self) -> bool {
        self.fraction.is_empty()
    }

    /// Render with the whole part grouped by `'` and the fraction untouched
    ///
    /// # Examples
    ///
    /// ```
    /// use coinfmt::Decimal;
    ///
    /// assert_eq!(Decimal::parse("1234.5678")?.grouped(), "1'234.5678");
    /// # Ok::<(), coinfmt::ParseError>(())
    /// ```
    pub fn grouped(&self) -> String {
        let mut out = group_digits(&self.whole);
        if !self.fraction.is_empty() {
            out.push(DECIMAL_POINT);
            out.push_str(&self.fraction);
        }
        out
    }

    /// Convert to a [`BigDecimal`] for arithmetic
    ///
    /// The scale of the result equals the number of fractional digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinfmt::Decimal;
    ///
    /// let big = Decimal::parse("1.500")?.to_big_decimal();
    /// assert_eq!(big.as_bigint_and_exponent().1, 3);
    /// # Ok::<(), coinfmt::ParseError>(())
    /// ```
    pub fn to_big_decimal(&self) -> BigDecimal {
        let mantissa = self
            .whole
            .bytes()
            .chain(self.fraction.bytes())
            .fold(BigInt::default(), |acc, digit| {
                acc * 10u32 + u32::from(digit - b'0')
            });
        BigDecimal::new(mantissa, self.fraction.len() as i64)
    }

    fn integer(digits: &str) -> Self {
        Self {
            whole: digits.to_string(),
            fraction: String::new(),
        }
    }

    /// Build from raw parts, restoring the canonical whole part.
    fn from_parts(whole: String, fraction: String) -> Self {
        let trimmed = whole.trim_start_matches('0');
        let whole = if trimmed.is_empty() {
            "0".to_string()
        } else if trimmed.len() == whole.len() {
            whole
        } else {
            trimmed.to_string()
        };
        Self { whole, fraction }
    }
}

impl From<Uint> for Decimal {
    fn from(value: Uint) -> Self {
        Self {
            whole: value.into_inner(),
            fraction: String::new(),
        }
    }
}

impl TryFrom<BigDecimal> for Decimal {
    type Error = ParseError;

    /// Rejects negative values and scales beyond [`Decimal::MAX_SCALE`] in
    /// either direction. Negative scales (`12e3`) are expanded with
    /// zeros so the result never uses exponent notation.
    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        let (mantissa, scale) = value.as_bigint_and_exponent();
        let digits = mantissa.to_string();
        if digits.starts_with('-') {
            return Err(ParseError::Negative {
                input: value.to_string(),
            });
        }

        let places = match u32::try_from(scale.unsigned_abs()) {
            Ok(places) if places <= Self::MAX_SCALE => places,
            _ => {
                return Err(ParseError::ScaleOutOfRange {
                    input: value.to_string(),
                })
            }
        };

        let integer = Self::integer(&digits);
        if scale >= 0 {
            Ok(integer.scale_down(places))
        } else {
            Ok(integer.scale_up(places))
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Decimal {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.whole)?;
        if !self.fraction.is_empty() {
            write!(f, "{}{}", DECIMAL_POINT, self.fraction)?;
        }
        Ok(())
    }
}
