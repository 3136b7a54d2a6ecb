// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Round index and round reading types

use alloy_primitives::I256;
use serde::{Deserialize, Serialize};

/// Index of a discrete price update round on a source.
///
/// Round indices increase over time; each round's reading stays in
/// effect from its start timestamp until the next round begins.
///
/// # Examples
///
/// ```
/// use ratescan::RoundId;
///
/// let round = RoundId::new(41);
/// assert_eq!(round.next(), RoundId::new(42));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RoundId(u64);

impl RoundId {
    /// Create a new round index
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The round that supersedes this one
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for RoundId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single round's reading as reported by a price source.
///
/// Raw readings are signed because source transports carry them that
/// way; the engine rejects negative values before any arithmetic
/// (see [`RateError::NegativePrice`](crate::RateError::NegativePrice)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    /// Raw price at the source's reporting precision (not normalized)
    pub price: I256,
    /// Wall-clock seconds at which this round became effective.
    /// Zero means the round does not exist or has not started.
    pub started_at: u64,
}
