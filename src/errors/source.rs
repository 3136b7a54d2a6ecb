// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for external collaborator failures.

use crate::types::round::RoundId;

/// Errors raised by the collaborators behind
/// [`PriceSource`](crate::PriceSource) and
/// [`AssetMetadata`](crate::AssetMetadata).
///
/// Implementations choose what to raise; the engine propagates these
/// unchanged inside [`RateError::Source`](crate::RateError::Source).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The collaborator could not be queried.
    ///
    /// Covers transport failures, stalled backends, and missing
    /// metadata. The string carries implementation-specific detail.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source holds no data for the requested round.
    ///
    /// Implementations may raise this instead of returning a reading
    /// with a zero start timestamp; the engine accepts either.
    #[error("no data recorded for round {0}")]
    MissingRound(RoundId),
}
