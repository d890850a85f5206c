// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single-coin formatting in a display denomination

use crate::config::constants::DENOM_SEPARATOR;
use crate::spans;
use crate::types::{Coin, Decimal, DisplayUnit};

/// Format a coin in the given display unit
///
/// The base-unit amount is divided by `10^unit.exponent` by moving the
/// decimal point within its digits, grouped, and followed by a space and
/// `unit.denom`. The output always has exactly `unit.exponent` fractional
/// digits, and no decimal point when the exponent is 0.
///
/// The unit is applied as given; it is not checked against `coin.denom`.
///
/// # Examples
///
/// ```
/// use coinfmt::{format_coin, Coin, DisplayUnit};
///
/// let unit = DisplayUnit::new("COSM", 6);
/// assert_eq!(format_coin(&Coin::new(1u64, "ucosm"), &unit), "0.000001 COSM");
/// assert_eq!(
///     format_coin(&Coin::new(1_234_567_000_000u64, "ucosm"), &unit),
///     "1'234'567.000000 COSM"
/// );
/// ```
pub fn format_coin(coin: &Coin, unit: &DisplayUnit) -> String {
    let span = spans::format_coin(&coin.denom, &unit.denom, unit.exponent);
    let _guard = span.enter();

    let mut out = Decimal::from_atomics(&coin.amount, unit.exponent).grouped();
    out.push(DENOM_SEPARATOR);
    out.push_str(&unit.denom);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Uint;

    fn cosm() -> DisplayUnit {
        DisplayUnit::new("COSM", 6)
    }

    #[test]
    fn test_smallest_unit() {
        let coin = Coin::new(1u64, "ucosm");
        assert_eq!(format_coin(&coin, &cosm()), "0.000001 COSM");
    }

    #[test]
    fn test_exact_exponent_width() {
        let coin = Coin::new(123456u64, "ucosm");
        assert_eq!(format_coin(&coin, &cosm()), "0.123456 COSM");
    }

    #[test]
    fn test_whole_amount_keeps_fraction_digits() {
        let coin = Coin::new(1_000_000u64, "ucosm");
        assert_eq!(format_coin(&coin, &cosm()), "1.000000 COSM");
    }

    #[test]
    fn test_zero_amount() {
        let coin = Coin::new(Uint::zero(), "ucosm");
        assert_eq!(format_coin(&coin, &cosm()), "0.000000 COSM");
        assert_eq!(format_coin(&coin, &DisplayUnit::new("ucosm", 0)), "0 ucosm");
    }

    #[test]
    fn test_zero_exponent_has_no_decimal_point() {
        let coin = Coin::new(1_234_567u64, "ucosm");
        assert_eq!(
            format_coin(&coin, &DisplayUnit::new("ucosm", 0)),
            "1'234'567 ucosm"
        );
    }

    #[test]
    fn test_eighteen_decimals_beyond_f64() {
        // 123,456,789.123456789012345678 ETH in wei; not representable as f64
        let coin = Coin::parse("123456789123456789012345678", "wei").unwrap();
        assert_eq!(
            format_coin(&coin, &DisplayUnit::new("ETH", 18)),
            "123'456'789.123456789012345678 ETH"
        );
    }

    #[test]
    fn test_exponent_longer_than_amount() {
        let coin = Coin::new(42u64, "wei");
        assert_eq!(
            format_coin(&coin, &DisplayUnit::new("ETH", 18)),
            "0.000000000000000042 ETH"
        );
    }
}
