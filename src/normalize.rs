// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal normalization to canonical 18-digit fixed point

use alloy_primitives::U256;

use crate::errors::RateError;
use crate::types::precision::Precision;
use crate::types::price::NormalizedPrice;

/// The canonical fixed-point scale: `10^18`.
pub const CANONICAL_SCALE: U256 = U256::from_limbs([1_000_000_000_000_000_000u64, 0, 0, 0]);

/// Bring a raw price at `source_precision` fractional digits into
/// canonical 18-digit fixed-point form.
///
/// Sources below canonical precision are scaled up exactly by
/// `10^(18 - source_precision)`. Sources at or above canonical
/// precision pass through unchanged; in particular a reading above 18
/// digits is NOT scaled down, so it stays at its original precision and
/// downstream arithmetic treats it as if it were canonical. That
/// boundary is intentional and must be handled by the embedder (by not
/// registering such sources, or by accepting the skew).
///
/// Scaling never truncates and never wraps; a product outside the
/// 256-bit range fails with [`RateError::ArithmeticOverflow`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use ratescan::{normalize, Precision, CANONICAL_SCALE};
///
/// // 2000.00000000 reported at 8 digits
/// let raw = U256::from(200_000_000_000u64);
/// let price = normalize(raw, Precision::new(8)).unwrap();
/// assert_eq!(price.as_u256(), U256::from(2000u64) * CANONICAL_SCALE);
/// ```
pub fn normalize(price: U256, source_precision: Precision) -> Result<NormalizedPrice, RateError> {
    let canonical = Precision::CANONICAL.as_u8();
    if source_precision.as_u8() >= canonical {
        return Ok(NormalizedPrice::new(price));
    }

    let gap = Precision::new(canonical - source_precision.as_u8());
    let factor = gap.pow10().ok_or(RateError::ArithmeticOverflow)?;
    price
        .checked_mul(factor)
        .map(NormalizedPrice::new)
        .ok_or(RateError::ArithmeticOverflow)
}
