// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical fixed-point price type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::normalize::CANONICAL_SCALE;

/// A price in canonical fixed-point form at 18 fractional digits.
///
/// This is the common representation every raw source reading is brought
/// into before cross-asset arithmetic. A value of `2 * 10^18` reads as
/// 2.0 units of the quote side per unit of the base side.
///
/// Values are always non-negative. Sources reporting at more than 18
/// digits pass through normalization unscaled, so a reading from such a
/// source is carried here at its original precision (see
/// [`normalize`](crate::normalize())).
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use ratescan::NormalizedPrice;
///
/// let price = NormalizedPrice::new(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(format!("{price}"), "1.500000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct NormalizedPrice(U256);

impl NormalizedPrice {
    /// Zero price
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new normalized price
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the price is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<U256> for NormalizedPrice {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NormalizedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.0 / CANONICAL_SCALE;
        let frac = (self.0 % CANONICAL_SCALE).to_string();
        write!(f, "{units}.{frac:0>18}")
    }
}
