// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single-denomination coin amount

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::integer::Uint;
use crate::errors::ParseError;

/// Characters allowed in a denomination after its leading letter
const DENOM_PUNCTUATION: &[char] = &['/', ':', '.', '_', '-'];

/// An amount in the smallest indivisible unit of a denomination
///
/// The amount is a [`Uint`], so the canonical digit grammar is enforced when
/// the coin is built and formatting a coin cannot fail on a malformed amount.
///
/// # Examples
///
/// ```
/// use coinfmt::Coin;
///
/// let coin = Coin::parse("1500000", "uatom")?;
/// assert_eq!(coin.amount.as_str(), "1500000");
/// assert_eq!(coin.denom, "uatom");
///
/// // Cosmos coin-string form
/// let same: Coin = "1500000uatom".parse()?;
/// assert_eq!(coin, same);
/// assert_eq!(same.to_string(), "1500000uatom");
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Amount in base units
    pub amount: Uint,
    /// Base denomination (e.g. `"uatom"`)
    pub denom: String,
}

impl Coin {
    /// Create a coin from a validated amount
    pub fn new(amount: impl Into<Uint>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }

    /// Create a coin from an amount string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `amount` is not a canonical integer string.
    pub fn parse(amount: &str, denom: impl Into<String>) -> Result<Self, ParseError> {
        Ok(Self {
            amount: Uint::parse(amount)?,
            denom: denom.into(),
        })
    }
}

impl FromStr for Coin {
    type Err = ParseError;

    /// Parse `<amount><denom>`, e.g. `"1234ucosm"` or `"5ibc/27394FB0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('-') {
            return Err(ParseError::Negative {
                input: s.to_string(),
            });
        }

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (amount, denom) = s.split_at(split);
        if amount.is_empty() {
            return Err(ParseError::invalid_coin(s, "missing amount"));
        }
        if denom.is_empty() {
            return Err(ParseError::invalid_coin(s, "missing denomination"));
        }
        if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ParseError::invalid_coin(
                s,
                "denomination must start with a letter",
            ));
        }
        if let Some(c) = denom
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !DENOM_PUNCTUATION.contains(c))
        {
            return Err(ParseError::invalid_coin(
                s,
                format!("invalid character {c:?} in denomination"),
            ));
        }

        let amount = Uint::parse(amount)
            .map_err(|e| ParseError::invalid_coin(s, e.to_string()))?;
        Ok(Self::new(amount, denom))
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parse a comma-separated coin list such as `"1ucosm, 3ustake"`
///
/// Whitespace around each entry is ignored and an empty or blank input
/// yields an empty list. Order and duplicates are preserved.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first entry that is not a valid coin.
///
/// # Examples
///
/// ```
/// use coinfmt::{parse_coins, Coin};
///
/// let coins = parse_coins("1ucosm,3ustake")?;
/// assert_eq!(coins, vec![Coin::new(1u64, "ucosm"), Coin::new(3u64, "ustake")]);
/// assert!(parse_coins("")?.is_empty());
/// # Ok::<(), coinfmt::ParseError>(())
/// ```
pub fn parse_coins(input: &str) -> Result<Vec<Coin>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(|part| part.trim().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_creation() {
        let coin = Coin::new(1000u64, "ucosm");
        assert_eq!(coin.amount, Uint::from(1000u64));
        assert_eq!(coin.denom, "ucosm");
    }

    #[test]
    fn test_coin_parse_rejects_malformed_amount() {
        assert!(matches!(
            Coin::parse("1.5", "ucosm"),
            Err(ParseError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            Coin::parse("-1", "ucosm"),
            Err(ParseError::Negative { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let coin: Coin = "1234ucosm".parse().unwrap();
        assert_eq!(coin, Coin::new(1234u64, "ucosm"));

        let ibc: Coin = "5ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
            .parse()
            .unwrap();
        assert_eq!(ibc.amount.as_str(), "5");
        assert!(ibc.denom.starts_with("ibc/"));
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "ucosm".parse::<Coin>(),
            Err(ParseError::InvalidCoin { .. })
        ));
        assert!(matches!(
            "1234".parse::<Coin>(),
            Err(ParseError::InvalidCoin { .. })
        ));
        assert!(matches!(
            "-5ucosm".parse::<Coin>(),
            Err(ParseError::Negative { .. })
        ));
        assert!(matches!(
            "05ucosm".parse::<Coin>(),
            Err(ParseError::InvalidCoin { .. })
        ));
        assert!(matches!(
            "5 ucosm".parse::<Coin>(),
            Err(ParseError::InvalidCoin { .. })
        ));
        assert!(matches!(
            "5u$".parse::<Coin>(),
            Err(ParseError::InvalidCoin { .. })
        ));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Coin::new(42u64, "uatom").to_string(), "42uatom");
    }

    #[test]
    fn test_parse_coins_preserves_order_and_duplicates() {
        let coins = parse_coins("3ustake, 1ucosm,3ustake").unwrap();
        assert_eq!(
            coins,
            vec![
                Coin::new(3u64, "ustake"),
                Coin::new(1u64, "ucosm"),
                Coin::new(3u64, "ustake"),
            ]
        );
    }

    #[test]
    fn test_parse_coins_empty() {
        assert!(parse_coins("").unwrap().is_empty());
        assert!(parse_coins("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_coins_rejects_empty_entry() {
        assert!(parse_coins("1ucosm,,2ucosm").is_err());
    }

    #[test]
    fn test_serialization() {
        let coin = Coin::new(1u64, "ucosm");
        let json = serde_json::to_string(&coin).unwrap();
        assert_eq!(json, r#"{"amount":"1","denom":"ucosm"}"#);
        let deserialized: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(coin, deserialized);
    }

    #[test]
    fn test_deserialization_rejects_malformed_amount() {
        let result = serde_json::from_str::<Coin>(r#"{"amount":"1e6","denom":"ucosm"}"#);
        assert!(result.is_err());
    }
}
