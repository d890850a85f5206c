// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Digit grouping for integers

use crate::config::constants::{GROUP_SEPARATOR, GROUP_SIZE};
use crate::errors::ParseError;
use crate::types::Uint;

/// Format a canonical integer string with `'` between triads
///
/// Only separators are added; the digits are never rounded or truncated.
///
/// # Errors
///
/// Returns [`ParseError`] if `digits` is not a canonical integer string.
///
/// # Examples
///
/// ```
/// use coinfmt::format_integer;
///
/// assert_eq!(format_integer("1234")?, "1'234");
/// assert_eq!(format_integer("1234567")?, "1'234'567");
/// assert_eq!(format_integer("123")?, "123");
/// assert!(format_integer("-1234").is_err());
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
pub fn format_integer(digits: &str) -> Result<String, ParseError> {
    Uint::parse(digits).map(|value| value.grouped())
}

/// Insert a separator every three characters, counting from the right.
///
/// Callers guarantee `digits` is ASCII.
pub(crate) fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / GROUP_SIZE);
    for (i, digit) in digits.char_indices() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out
}
