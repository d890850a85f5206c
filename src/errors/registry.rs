// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading display-unit registries.

use std::path::PathBuf;

/// Errors that can occur while loading a [`DisplayUnits`](crate::DisplayUnits)
/// registry from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry JSON was malformed or had the wrong shape.
    #[error("Invalid display unit registry: {0}")]
    Json(#[from] serde_json::Error),

    /// A display unit's exponent exceeds [`DisplayUnit::MAX_EXPONENT`].
    ///
    /// [`DisplayUnit::MAX_EXPONENT`]: crate::DisplayUnit::MAX_EXPONENT
    #[error(
        "Exponent {exponent} for denomination {base_denom:?} exceeds the maximum of {max}",
        max = crate::DisplayUnit::MAX_EXPONENT
    )]
    ExponentOutOfRange {
        /// Base denomination whose unit was rejected
        base_denom: String,
        /// The rejected exponent
        exponent: u32,
    },

    /// The registry file could not be read.
    #[error("Failed to read display unit registry {}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Create an `ExponentOutOfRange` error for a base denomination.
    pub fn exponent_out_of_range(base_denom: impl Into<String>, exponent: u32) -> Self {
        RegistryError::ExponentOutOfRange {
            base_denom: base_denom.into(),
            exponent,
        }
    }

    /// Create an `Io` error for a registry path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}
