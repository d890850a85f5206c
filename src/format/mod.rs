// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Text rendering for integers, decimals, coins and byte buffers.
//!
//! Every function here is a pure transform: no I/O, no shared state, and no
//! floating-point arithmetic. The output format is made of four literal
//! separators only (see [`constants`](crate::constants)).

mod bytes;
mod coin;
mod coins;
mod decimal;
mod integer;

pub use bytes::format_bytes;
pub use coin::format_coin;
pub use coins::format_coins;
pub use decimal::format_decimal;
pub use integer::format_integer;

pub(crate) use integer::group_digits;
