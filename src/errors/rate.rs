// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for rate engine operations.

use crate::types::asset::AssetId;
use crate::types::round::RoundId;

use super::SourceError;

/// Errors that can occur during price and rate computations.
///
/// Each variant is terminal for the operation that raised it; no retry
/// or fallback happens inside the engine.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    /// The operation referenced an asset with no registered binding.
    ///
    /// Not retriable until a source is registered for the asset.
    #[error("no price source registered for asset {asset}")]
    UnknownAsset {
        /// Asset the caller referenced
        asset: AssetId,
    },

    /// A historical round was not in effect at the requested timestamp.
    ///
    /// The round either has not started, started after the requested
    /// time, or was superseded by its successor at or before the
    /// requested time. Retriable only with different round indices
    /// chosen by the caller; the engine never searches for a round
    /// itself.
    #[error("round {round} for asset {asset} was not in effect at timestamp {timestamp}")]
    OutOfRange {
        /// Asset whose round failed the validity check
        asset: AssetId,
        /// Round index the caller supplied
        round: RoundId,
        /// Timestamp the caller asked about
        timestamp: u64,
    },

    /// The normalized quote price used as a divisor was zero.
    #[error("quote price normalized to zero")]
    DivisionByZero,

    /// A scaling or multiplication step exceeded the representable range.
    #[error("price arithmetic exceeded the representable range")]
    ArithmeticOverflow,

    /// A source reported a negative raw price.
    ///
    /// Negative readings are rejected rather than reinterpreted as
    /// unsigned magnitudes.
    #[error("source for asset {asset} reported a negative price")]
    NegativePrice {
        /// Asset whose source produced the reading
        asset: AssetId,
    },

    /// A collaborator query failed.
    ///
    /// Wraps [`SourceError`] from the price source or asset metadata
    /// collaborators.
    #[error("price source error: {0}")]
    Source(#[from] SourceError),
}
