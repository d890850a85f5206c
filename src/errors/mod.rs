// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the coinfmt library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ParseError`],
//!   [`FormatError`], [`RegistryError`])
//! - **Unified error type** ([`CoinfmtError`]) for callers that only need to
//!   propagate failures
//!
//! # Examples
//!
//! ```rust
//! use coinfmt::{format_coins, parse_coins, CoinfmtError, DisplayUnits};
//!
//! fn render(input: &str) -> Result<String, CoinfmtError> {
//!     let coins = parse_coins(input)?;
//!     Ok(format_coins(&coins, &DisplayUnits::with_common_defaults())?)
//! }
//!
//! assert_eq!(render("1500000uatom")?, "1.500000 ATOM");
//! assert!(matches!(render("-1uatom"), Err(CoinfmtError::Parse(_))));
//! assert!(matches!(render("1unknown"), Err(CoinfmtError::Format(_))));
//! # Ok::<(), CoinfmtError>(())
//! ```

mod format;
mod parse;
mod registry;

pub use format::FormatError;
pub use parse::ParseError;
pub use registry::RegistryError;

/// Unified error type for all coinfmt operations.
///
/// All module-specific error types convert to `CoinfmtError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum CoinfmtError {
    /// Error from parsing a numeric or coin string.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from formatting a coin collection.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Error from loading a display unit registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
