// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Collaborator traits for price data and asset metadata
//!
//! The engine consumes external data exclusively through the two traits
//! in this module. Implement [`PriceSource`] over whatever backend holds
//! the per-asset price rounds (an on-chain feed adapter, a database, a
//! replay log) and [`AssetMetadata`] over whatever resolves an asset's
//! native display precision.
//!
//! # Design Philosophy
//!
//! - **Synchronous**: all methods are synchronous; the engine performs
//!   no background work, so a blocking adapter at the seam is the
//!   embedder's choice to make
//! - **Minimal**: only the queries the engine actually issues
//! - **Object-safe**: both traits are used as trait objects
//!   (`Arc<dyn PriceSource>`, `Box<dyn AssetMetadata>`) for runtime
//!   pluggability
//!
//! # Example: a fixed-table source
//!
//! ```rust,ignore
//! use ratescan::{PriceSource, RoundData, RoundId, Precision, SourceError};
//! use alloy_primitives::I256;
//!
//! struct TableSource {
//!     precision: Precision,
//!     rounds: Vec<RoundData>,
//! }
//!
//! impl PriceSource for TableSource {
//!     fn latest(&self) -> Result<I256, SourceError> {
//!         self.rounds
//!             .last()
//!             .map(|round| round.price)
//!             .ok_or_else(|| SourceError::Unavailable("no rounds yet".into()))
//!     }
//!
//!     fn round_data(&self, round: RoundId) -> Result<RoundData, SourceError> {
//!         Ok(self
//!             .rounds
//!             .get(round.as_u64() as usize)
//!             .copied()
//!             .unwrap_or(RoundData { price: I256::ZERO, started_at: 0 }))
//!     }
//!
//!     fn round_started_at(&self, round: RoundId) -> Result<u64, SourceError> {
//!         Ok(self.round_data(round)?.started_at)
//!     }
//!
//!     fn precision(&self) -> Result<Precision, SourceError> {
//!         Ok(self.precision)
//!     }
//! }
//! ```

use alloy_primitives::I256;

use crate::errors::SourceError;
use crate::types::asset::AssetId;
use crate::types::precision::Precision;
use crate::types::round::{RoundData, RoundId};

/// External provider of price readings for exactly one asset.
///
/// Readings are organized into sequential rounds; each round's price
/// stays in effect from its start timestamp until the next round
/// begins.
///
/// # Contract
///
/// - [`round_started_at`](PriceSource::round_started_at) returns 0 for
///   a round that does not exist or has not started
/// - [`round_data`](PriceSource::round_data) may return a reading with
///   `started_at == 0` for a missing round, or fail with
///   [`SourceError::MissingRound`]; the engine treats both as
///   "round not in effect"
/// - Raw prices are signed at the transport level; the engine rejects
///   negative values, so implementations that can never go negative
///   need no special handling
pub trait PriceSource: Send + Sync {
    /// The source's most recent raw price.
    fn latest(&self) -> Result<I256, SourceError>;

    /// The raw price and start timestamp recorded for `round`.
    fn round_data(&self, round: RoundId) -> Result<RoundData, SourceError>;

    /// The timestamp at which `round` became effective, or 0 if the
    /// round has not started.
    fn round_started_at(&self, round: RoundId) -> Result<u64, SourceError>;

    /// The number of fractional digits this source's raw prices are
    /// expressed in.
    ///
    /// Queried once at registration time and cached on the binding; a
    /// live change is not observed until the asset is re-registered.
    fn precision(&self) -> Result<Precision, SourceError>;
}

/// Resolver for an asset's native display precision.
///
/// Queried once per asset at registration time (the token-decimals
/// lookup in an EVM deployment); the result is cached on the binding.
pub trait AssetMetadata: Send + Sync {
    /// The number of fractional digits the asset natively displays in.
    fn precision(&self, asset: AssetId) -> Result<Precision, SourceError>;
}
