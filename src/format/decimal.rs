// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal formatting: group the whole part, keep the fraction verbatim

use crate::errors::ParseError;
use crate::types::Decimal;

/// Format a canonical decimal string
///
/// The whole part is grouped like [`format_integer`](crate::format_integer).
/// The fraction, if any, follows a `.` with no grouping and no trimming of
/// trailing zeros. Without a decimal point this is the same as
/// `format_integer`.
///
/// # Errors
///
/// Returns [`ParseError`] if `value` is not a canonical decimal string.
///
/// # Examples
///
/// ```
/// use coinfmt::format_decimal;
///
/// assert_eq!(format_decimal("1234.5678")?, "1'234.5678");
/// assert_eq!(format_decimal("1234567.0000001")?, "1'234'567.0000001");
/// assert_eq!(format_decimal("1234")?, "1'234");
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
pub fn format_decimal(value: &str) -> Result<String, ParseError> {
    Decimal::parse(value).map(|decimal| decimal.grouped())
}
