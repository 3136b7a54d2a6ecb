// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-asset rate computation
//!
//! Computes how many quote-asset smallest units equal one base-asset
//! smallest unit, scaled to canonical 18-digit fixed point. Two code
//! paths produce identical results:
//!
//! - a fast path for legs that share both source precision and asset
//!   precision, where every per-leg scaling term cancels algebraically
//! - a general path that normalizes each leg by its own source
//!   precision and folds the asset-level precision difference into the
//!   ratio
//!
//! Intermediates run in 512-bit arithmetic so a full-range 256-bit
//! numerator cannot wrap; a result outside 256 bits fails with
//! `ArithmeticOverflow`.

use alloy_primitives::{U256, U512};

use crate::errors::RateError;
use crate::normalize::{normalize, CANONICAL_SCALE};
use crate::types::precision::Precision;
use crate::types::price::NormalizedPrice;

/// One side of a cross-rate computation: a raw unsigned price together
/// with the precisions that interpret it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PriceLeg {
    /// Raw price magnitude at `source_precision` fractional digits
    pub price: U256,
    /// Fractional digits of the reporting source
    pub source_precision: Precision,
    /// Native display precision of the asset itself
    pub asset_precision: Precision,
}

/// Exchange rate of `base` expressed in `quote`, at canonical precision.
pub(crate) fn cross_price(base: &PriceLeg, quote: &PriceLeg) -> Result<NormalizedPrice, RateError> {
    if base.source_precision == quote.source_precision
        && base.asset_precision == quote.asset_precision
    {
        return fast_path(base.price, quote.price);
    }
    general_path(base, quote)
}

/// `base * 10^18 / quote`. Valid only when both legs share source and
/// asset precision, where the per-leg scaling terms cancel.
fn fast_path(base: U256, quote: U256) -> Result<NormalizedPrice, RateError> {
    if quote.is_zero() {
        return Err(RateError::DivisionByZero);
    }
    let numerator = widen(base) * widen(CANONICAL_SCALE);
    narrow(numerator / widen(quote)).map(NormalizedPrice::new)
}

/// Normalize each leg by its own source precision, then fold in the
/// asset-level precision difference:
///
/// `norm_base * 10^18 * 10^(quote_asset) / norm_quote / 10^(base_asset)`
fn general_path(base: &PriceLeg, quote: &PriceLeg) -> Result<NormalizedPrice, RateError> {
    let norm_base = normalize(base.price, base.source_precision)?;
    let norm_quote = normalize(quote.price, quote.source_precision)?;
    if norm_quote.is_zero() {
        return Err(RateError::DivisionByZero);
    }

    let quote_units = quote
        .asset_precision
        .pow10()
        .ok_or(RateError::ArithmeticOverflow)?;
    let base_units = base
        .asset_precision
        .pow10()
        .ok_or(RateError::ArithmeticOverflow)?;

    let numerator = widen(norm_base.as_u256())
        .checked_mul(widen(CANONICAL_SCALE))
        .and_then(|value| value.checked_mul(widen(quote_units)))
        .ok_or(RateError::ArithmeticOverflow)?;

    let result = numerator / widen(norm_quote.as_u256()) / widen(base_units);
    narrow(result).map(NormalizedPrice::new)
}

fn widen(value: U256) -> U512 {
    let limbs = value.as_limbs();
    U512::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

fn narrow(value: U512) -> Result<U256, RateError> {
    let limbs = value.as_limbs();
    if limbs[4] != 0 || limbs[5] != 0 || limbs[6] != 0 || limbs[7] != 0 {
        return Err(RateError::ArithmeticOverflow);
    }
    Ok(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}
