// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Precision-safe text rendering for blockchain amounts.
//!
//! coinfmt turns machine-precision on-chain values into stable, human-readable
//! strings for wallets and explorers:
//!
//! - [`format_integer`]: `"1234567"` → `"1'234'567"`
//! - [`format_decimal`]: `"1234.5678"` → `"1'234.5678"`
//! - [`format_coin`]: `1 ucosm` with `COSM`/6 → `"0.000001 COSM"`
//! - [`format_coins`]: coin lists joined with `", "`
//! - [`format_bytes`]: standard base64
//!
//! Amounts are kept as digit strings end to end and never pass through
//! `f64`, so values beyond 53 bits of mantissa render exactly.
//!
//! # Example
//!
//! ```rust
//! use coinfmt::{format_coins, parse_coins, DisplayUnits};
//!
//! let units = DisplayUnits::with_common_defaults();
//! let coins = parse_coins("1ucosm,3ustake")?;
//! assert_eq!(format_coins(&coins, &units)?, "0.000001 COSM, 0.000003 STAKE");
//! # Ok::<(), coinfmt::CoinfmtError>(())
//! ```

mod config;
mod errors;
mod format;
mod spans;
mod types;

pub use config::constants;
pub use config::{DisplayUnits, DisplayUnitsBuilder};
pub use errors::{CoinfmtError, FormatError, ParseError, RegistryError};
pub use format::{format_bytes, format_coin, format_coins, format_decimal, format_integer};
pub use types::{parse_coins, Coin, Decimal, DisplayUnit, Uint};
