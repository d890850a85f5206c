// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the values coinfmt renders.
//!
//! This module provides value types for:
//! - Arbitrary-precision integers and decimals kept as digit strings
//! - Coins (base-unit amount plus denomination)
//! - Display units (display denomination plus exponent)
//!
//! # Type Relationships
//!
//! ```text
//! Coin { Uint, denom }
//!     |
//!     | from_atomics(DisplayUnit.exponent)
//!     ↓
//! Decimal (exact, no f64)
//!     |
//!     | grouped()
//!     ↓
//! "1'234.567890 ATOM"
//! ```

mod coin;
mod decimal;
mod display_unit;
mod integer;

pub use coin::{parse_coins, Coin};
pub use decimal::Decimal;
pub use display_unit::DisplayUnit;
pub use integer::Uint;

// Note: Public types are re-exported from lib.rs, not here
