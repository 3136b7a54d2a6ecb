// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Number of fractional digits a value is expressed in.
///
/// Used for two distinct roles that share representation:
/// - a price source's reporting precision (how many fractional digits
///   its raw integer readings carry), and
/// - an asset's native display precision (e.g. a token's decimal count).
///
/// Most sources report at 8 digits and most assets display at 18, but
/// neither is assumed:
/// - USDC: 6 digits
/// - WBTC: 8 digits
/// - ETH and most ERC-20s: 18 digits
///
/// # Examples
///
/// ```
/// use ratescan::Precision;
///
/// let source = Precision::new(8);
/// assert_eq!(source.as_u8(), 8);
/// assert_eq!(Precision::CANONICAL.as_u8(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precision(u8);

impl Precision {
    /// Canonical precision all prices are normalized to (18 digits)
    pub const CANONICAL: Self = Self(18);

    /// Create a new precision value
    pub const fn new(digits: u8) -> Self {
        Self(digits)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// The scaling factor for this precision: `10^digits`.
    ///
    /// Returns `None` when the factor exceeds the 256-bit range, which
    /// happens above 77 digits. Callers surface that as an arithmetic
    /// overflow rather than scaling with a wrapped factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use ratescan::Precision;
    ///
    /// assert_eq!(Precision::new(6).pow10(), Some(U256::from(1_000_000u64)));
    /// assert_eq!(Precision::new(200).pow10(), None);
    /// ```
    pub fn pow10(&self) -> Option<U256> {
        U256::from(10u64).checked_pow(U256::from(self.0))
    }
}

impl From<u8> for Precision {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.0)
    }
}
