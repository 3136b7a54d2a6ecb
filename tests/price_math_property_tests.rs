// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for price normalization and cross rates
//!
//! These tests use proptest to validate the arithmetic invariants
//! across a wide range of prices and precisions.

mod helpers;

use std::sync::Arc;

use alloy_primitives::U256;
use helpers::{asset, MockAssetMetadata, MockPriceSource};
use proptest::prelude::*;
use ratescan::{normalize, Precision, RateEngine, CANONICAL_SCALE};

proptest! {
    /// Property: below canonical precision, normalization multiplies by
    /// exactly 10^(18 - precision)
    #[test]
    fn prop_normalize_scales_exactly(
        price in any::<u128>(),
        precision in 0u8..18,
    ) {
        let factor = Precision::new(18 - precision).pow10().unwrap();
        let expected = U256::from(price) * factor;

        let normalized = normalize(U256::from(price), Precision::new(precision)).unwrap();
        prop_assert_eq!(
            normalized.as_u256(),
            expected,
            "scaling must be exact at precision {}",
            precision
        );
    }

    /// Property: at or above canonical precision, normalization is the
    /// identity
    #[test]
    fn prop_normalize_identity_at_or_above_canonical(
        price in any::<u128>(),
        precision in 18u8..=40,
    ) {
        let normalized = normalize(U256::from(price), Precision::new(precision)).unwrap();
        prop_assert_eq!(normalized.as_u256(), U256::from(price));
    }

    /// Property: normalization of any u128-range price never overflows
    /// and never returns zero for a nonzero input
    #[test]
    fn prop_normalize_preserves_nonzero(
        price in 1u128..,
        precision in 0u8..=40,
    ) {
        let normalized = normalize(U256::from(price), Precision::new(precision)).unwrap();
        prop_assert!(!normalized.is_zero());
    }

    /// Property: when both sides share source and asset precision, the
    /// engine's cross rate equals the general formula computed
    /// longhand, which pins the fast path to the general path
    #[test]
    fn prop_fast_path_matches_general_formula(
        base_price in 1u64..,
        quote_price in 1u64..,
        source_precision in 0u8..=18,
        asset_precision in 0u8..=18,
    ) {
        let metadata = MockAssetMetadata::uniform(asset_precision);
        let mut engine = RateEngine::new(Box::new(metadata));
        engine
            .register_source(
                asset(1),
                Arc::new(MockPriceSource::new(source_precision).with_latest(base_price as i128)),
            )
            .unwrap();
        engine
            .register_source(
                asset(2),
                Arc::new(MockPriceSource::new(source_precision).with_latest(quote_price as i128)),
            )
            .unwrap();

        let rate = engine.current_cross_price(asset(1), asset(2)).unwrap();

        // General formula with u64 inputs stays inside 256 bits:
        // norm <= 2^64 * 10^18 and the numerator gains at most 10^36
        let norm_base = normalize(U256::from(base_price), Precision::new(source_precision))
            .unwrap()
            .as_u256();
        let norm_quote = normalize(U256::from(quote_price), Precision::new(source_precision))
            .unwrap()
            .as_u256();
        let units = Precision::new(asset_precision).pow10().unwrap();
        let expected = norm_base * CANONICAL_SCALE * units / norm_quote / units;

        prop_assert_eq!(
            rate.as_u256(),
            expected,
            "paths diverged at source precision {} asset precision {}",
            source_precision,
            asset_precision
        );
    }

    /// Property: a cross rate of an asset against itself is exactly 1.0
    /// whenever both legs read the same source state
    #[test]
    fn prop_self_rate_is_unit(
        price in 1u64..,
        source_precision in 0u8..=18,
    ) {
        let mut engine = RateEngine::new(Box::new(MockAssetMetadata::uniform(18)));
        for id in [1u8, 2] {
            engine
                .register_source(
                    asset(id),
                    Arc::new(MockPriceSource::new(source_precision).with_latest(price as i128)),
                )
                .unwrap();
        }

        let rate = engine.current_cross_price(asset(1), asset(2)).unwrap();
        prop_assert_eq!(rate.as_u256(), CANONICAL_SCALE);
    }
}
