// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed separators of the rendered text format
//!
//! These four literals are the entire output format. Existing displays parse
//! them back by eye, so they are constants rather than configuration.

/// Inserted between groups of three integer digits: `1'234'567`
pub const GROUP_SEPARATOR: char = '\'';

/// Separates the whole part from the fraction: `1.5`
pub const DECIMAL_POINT: char = '.';

/// Placed between an amount and its display denomination: `1.5 ATOM`
pub const DENOM_SEPARATOR: char = ' ';

/// Joins formatted coins in a collection: `1 ATOM, 2 OSMO`
pub const COIN_SEPARATOR: &str = ", ";

/// Number of digits in each group
pub const GROUP_SIZE: usize = 3;
