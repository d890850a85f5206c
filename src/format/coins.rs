// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-coin formatting against a display unit registry

use super::coin::format_coin;
use crate::config::constants::COIN_SEPARATOR;
use crate::config::DisplayUnits;
use crate::errors::FormatError;
use crate::spans;
use crate::types::Coin;

/// Format a coin collection, joining the results with `", "`
///
/// Each coin's base denomination is looked up in `units` and rendered with
/// [`format_coin`]. Input order and duplicates are preserved; coins sharing a
/// denomination are not summed. An empty slice yields an empty string.
///
/// # Errors
///
/// Returns [`FormatError::UnmappedDenom`] for the first coin whose
/// denomination has no display unit. No partial output is produced.
///
/// # Examples
///
/// ```
/// use coinfmt::{format_coins, Coin, DisplayUnits};
///
/// let units = DisplayUnits::with_common_defaults();
/// let coins = vec![Coin::new(1u64, "ucosm"), Coin::new(3u64, "ustake")];
/// assert_eq!(format_coins(&coins, &units)?, "0.000001 COSM, 0.000003 STAKE");
/// assert_eq!(format_coins(&[], &units)?, "");
/// # Ok::<(), coinfmt::FormatError>(())
/// ```
pub fn format_coins(coins: &[Coin], units: &DisplayUnits) -> Result<String, FormatError> {
    let span = spans::format_coins(coins.len(), units.len());
    let _guard = span.enter();

    let formatted = coins
        .iter()
        .map(|coin| -> Result<String, FormatError> {
            let unit = units.get(&coin.denom).ok_or_else(|| {
                tracing::debug!(denom = %coin.denom, "No display unit for denomination");
                FormatError::unmapped_denom(&coin.denom)
            })?;
            Ok(format_coin(coin, unit))
        })
        .collect::<Result<Vec<_>, FormatError>>()?;

    Ok(formatted.join(COIN_SEPARATOR))
}
