// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for coinfmt operations.
//!
//! Telemetry concerns are kept out of the formatting logic: instead of using
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use std::path::Path;

use tracing::Span;

/// Create span for formatting a coin collection.
///
/// Parent: caller's span
/// Children: format_coin spans (one per coin)
#[inline]
pub(crate) fn format_coins(coin_count: usize, unit_count: usize) -> Span {
    tracing::debug_span!(
        "coinfmt.format_coins",
        coin_count = coin_count,
        unit_count = unit_count,
    )
}

/// Create span for formatting a single coin against its display unit.
///
/// Parent: format_coins span, or the caller's span
#[inline]
pub(crate) fn format_coin(base_denom: &str, display_denom: &str, exponent: u32) -> Span {
    tracing::trace_span!(
        "coinfmt.format_coin",
        base_denom = base_denom,
        display_denom = display_denom,
        exponent = exponent,
    )
}

/// Create span for loading a display unit registry from a JSON file.
///
/// Parent: None (root span for this operation)
/// Children: load_display_units_json span
#[inline]
pub(crate) fn load_display_units_file(path: &Path) -> Span {
    tracing::info_span!(
        "coinfmt.load_display_units_file",
        path = %path.display(),
    )
}

/// Create span for parsing a display unit registry from JSON text.
///
/// Parent: load_display_units_file span, or the caller's span
#[inline]
pub(crate) fn load_display_units_json(bytes: usize) -> Span {
    tracing::debug_span!("coinfmt.load_display_units_json", bytes = bytes)
}
