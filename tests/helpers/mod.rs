// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for coinfmt integration tests

use coinfmt::{Coin, DisplayUnits, DisplayUnitsBuilder};

/// Install a test-writer subscriber so span and event output shows up in
/// failing test logs. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("coinfmt=trace"))
        .with_test_writer()
        .try_init();
}

/// Helper to create a coin from an amount string
#[allow(dead_code)]
pub fn coin(amount: &str, denom: &str) -> Coin {
    Coin::parse(amount, denom).expect("test amounts are canonical")
}

/// Registry covering Cosmos test denoms plus 18- and 0-decimal units
#[allow(dead_code)]
pub fn test_units() -> DisplayUnits {
    DisplayUnitsBuilder::with_defaults()
        .unit("wei", "ETH", 18)
        .unit("unit", "UNIT", 0)
        .build()
}
