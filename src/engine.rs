// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rate engine: current prices, cross rates, historical cross rates

use std::sync::Arc;

use alloy_primitives::{I256, U256};
use tracing::{debug, info};

use crate::cross::{cross_price, PriceLeg};
use crate::errors::RateError;
use crate::normalize::normalize;
use crate::registry::{SourceBinding, SourceRegistry};
use crate::source::{AssetMetadata, PriceSource};
use crate::types::asset::AssetId;
use crate::types::price::NormalizedPrice;
use crate::types::round::RoundId;

/// Price oracle aggregation engine.
///
/// Holds the asset registry and the asset metadata collaborator, and
/// exposes the read and registration operations. Every read queries the
/// bound source directly; nothing is cached across calls except the
/// precision snapshots captured at registration.
///
/// The engine is an owned value, not process state: construct as many
/// independent instances as needed (one per test, one per tenant).
/// Mutation happens only through [`register_source`]
/// (`&mut self`); reads take `&self`, and a binding is replaced as a
/// single unit, so a concurrent embedding that serializes writes sees
/// each binding either entirely old or entirely new.
///
/// [`register_source`]: RateEngine::register_source
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use ratescan::RateEngine;
///
/// let mut engine = RateEngine::new(Box::new(metadata));
/// engine.register_source(weth, Arc::new(weth_feed))?;
/// engine.register_source(usdc, Arc::new(usdc_feed))?;
///
/// let rate = engine.current_cross_price(weth, usdc)?;
/// println!("WETH/USDC: {rate}");
/// ```
pub struct RateEngine {
    registry: SourceRegistry,
    metadata: Box<dyn AssetMetadata>,
}

impl RateEngine {
    /// Create an engine with an empty registry.
    ///
    /// `metadata` resolves each asset's native display precision at
    /// registration time.
    pub fn new(metadata: Box<dyn AssetMetadata>) -> Self {
        Self {
            registry: SourceRegistry::new(),
            metadata,
        }
    }

    /// Register or replace the price source for `asset`.
    ///
    /// Queries the source's reporting precision and the asset's display
    /// precision, then stores the binding as one unit. A first-time
    /// asset is appended to the enumeration order; a re-registered
    /// asset keeps its position and has all three fields refreshed.
    ///
    /// Who may call this is the embedding service's concern; the engine
    /// performs no authorization.
    pub fn register_source(
        &mut self,
        asset: AssetId,
        source: Arc<dyn PriceSource>,
    ) -> Result<(), RateError> {
        let source_precision = source.precision()?;
        let asset_precision = self.metadata.precision(asset)?;

        self.registry.bind(
            asset,
            SourceBinding::new(source, source_precision, asset_precision),
        );
        info!(
            asset = %asset,
            source_precision = %source_precision,
            asset_precision = %asset_precision,
            "registered price source"
        );
        Ok(())
    }

    /// The source handle currently bound to `asset`.
    pub fn source(&self, asset: AssetId) -> Result<Arc<dyn PriceSource>, RateError> {
        self.binding(asset).map(SourceBinding::source)
    }

    /// Snapshot of every registration, in registration order.
    ///
    /// Recomputed on each call; the returned handles are the bound
    /// sources themselves.
    pub fn bindings(&self) -> Vec<(AssetId, Arc<dyn PriceSource>)> {
        self.registry
            .iter()
            .map(|(asset, binding)| (asset, binding.source()))
            .collect()
    }

    /// Whether `asset` has a registered source
    pub fn is_registered(&self, asset: AssetId) -> bool {
        self.registry.contains(asset)
    }

    /// Number of registered assets
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no assets are registered
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Current price of `asset` at canonical 18-digit precision.
    ///
    /// Queries the bound source's latest reading and normalizes it by
    /// the precision snapshot on the binding.
    pub fn current_price(&self, asset: AssetId) -> Result<NormalizedPrice, RateError> {
        let binding = self.binding(asset)?;
        let raw = unsigned_price(binding.source().latest()?, asset)?;
        let price = normalize(raw, binding.source_precision())?;
        debug!(asset = %asset, price = %price, "current price");
        Ok(price)
    }

    /// Current exchange rate of `base` expressed in `quote`, at
    /// canonical 18-digit precision.
    pub fn current_cross_price(
        &self,
        base: AssetId,
        quote: AssetId,
    ) -> Result<NormalizedPrice, RateError> {
        let base_binding = self.binding(base)?;
        let quote_binding = self.binding(quote)?;

        let base_leg = leg(
            unsigned_price(base_binding.source().latest()?, base)?,
            base_binding,
        );
        let quote_leg = leg(
            unsigned_price(quote_binding.source().latest()?, quote)?,
            quote_binding,
        );

        let price = cross_price(&base_leg, &quote_leg)?;
        debug!(base = %base, quote = %quote, price = %price, "current cross price");
        Ok(price)
    }

    /// Exchange rate of `base` in `quote` as it stood at `timestamp`,
    /// reconstructed from the given rounds.
    ///
    /// Each round must have been in effect at `timestamp`: started at
    /// or before it, and not yet superseded by its successor round
    /// (`timestamp` strictly inside `[started_at, next_started_at)`,
    /// with a zero `next_started_at` meaning the round is still
    /// current). A round outside its window fails with
    /// [`RateError::OutOfRange`] naming the offending asset; the engine
    /// never substitutes a different round.
    pub fn historical_cross_price(
        &self,
        base: AssetId,
        base_round: RoundId,
        quote: AssetId,
        quote_round: RoundId,
        timestamp: u64,
    ) -> Result<NormalizedPrice, RateError> {
        let base_binding = self.binding(base)?;
        let quote_binding = self.binding(quote)?;

        let base_source = base_binding.source();
        let base_data = base_source.round_data(base_round)?;
        let base_next = base_source.round_started_at(base_round.next())?;

        let quote_source = quote_binding.source();
        let quote_data = quote_source.round_data(quote_round)?;
        let quote_next = quote_source.round_started_at(quote_round.next())?;

        if !round_in_effect(base_data.started_at, base_next, timestamp) {
            return Err(RateError::OutOfRange {
                asset: base,
                round: base_round,
                timestamp,
            });
        }
        if !round_in_effect(quote_data.started_at, quote_next, timestamp) {
            return Err(RateError::OutOfRange {
                asset: quote,
                round: quote_round,
                timestamp,
            });
        }

        let base_leg = leg(unsigned_price(base_data.price, base)?, base_binding);
        let quote_leg = leg(unsigned_price(quote_data.price, quote)?, quote_binding);

        let price = cross_price(&base_leg, &quote_leg)?;
        debug!(
            base = %base,
            base_round = %base_round,
            quote = %quote,
            quote_round = %quote_round,
            timestamp = timestamp,
            price = %price,
            "historical cross price"
        );
        Ok(price)
    }

    fn binding(&self, asset: AssetId) -> Result<&SourceBinding, RateError> {
        self.registry
            .get(asset)
            .ok_or(RateError::UnknownAsset { asset })
    }
}

fn leg(price: U256, binding: &SourceBinding) -> PriceLeg {
    PriceLeg {
        price,
        source_precision: binding.source_precision(),
        asset_precision: binding.asset_precision(),
    }
}

/// Reject negative raw readings instead of reinterpreting them as
/// unsigned magnitudes.
fn unsigned_price(raw: I256, asset: AssetId) -> Result<U256, RateError> {
    if raw.is_negative() {
        return Err(RateError::NegativePrice { asset });
    }
    Ok(raw.unsigned_abs())
}

/// Whether a round was in effect at `timestamp`.
///
/// The window is `[started_at, next_started_at)`; a zero
/// `next_started_at` leaves the round open-ended, and a zero
/// `started_at` marks a round that does not exist yet.
pub(crate) fn round_in_effect(started_at: u64, next_started_at: u64, timestamp: u64) -> bool {
    if started_at == 0 || started_at > timestamp {
        return false;
    }
    next_started_at == 0 || next_started_at > timestamp
}
