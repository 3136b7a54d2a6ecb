// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for ratescan integration tests
//!
//! Provides mock implementations of the collaborator traits to enable
//! testing without real price feeds.

use std::collections::{BTreeMap, HashMap};

use alloy_primitives::{Address, I256, U256};
use ratescan::{AssetId, Precision, PriceSource, RoundData, RoundId, SourceError};

/// Mock PriceSource for driving RateEngine logic in tests
///
/// Allows complete control over the latest reading, the recorded
/// rounds, and the failure mode.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockPriceSource::new(8)
///     .with_latest(200_000_000_000)
///     .with_round(7, 200_000_000_000, 100)
///     .with_round(8, 210_000_000_000, 200);
///
/// engine.register_source(weth, Arc::new(source))?;
/// ```
pub struct MockPriceSource {
    precision: Precision,
    latest: I256,
    rounds: BTreeMap<u64, RoundData>,
    available: bool,
    fail_reads: bool,
    strict_rounds: bool,
}

impl MockPriceSource {
    /// Create a source reporting at `precision` fractional digits,
    /// with a zero latest reading and no rounds
    pub fn new(precision: u8) -> Self {
        Self {
            precision: Precision::new(precision),
            latest: I256::ZERO,
            rounds: BTreeMap::new(),
            available: true,
            fail_reads: false,
            strict_rounds: false,
        }
    }

    /// Set the latest raw reading
    pub fn with_latest(mut self, price: i128) -> Self {
        self.latest = i256(price);
        self
    }

    /// Record a round with the given raw price and start timestamp
    #[allow(dead_code)]
    pub fn with_round(mut self, round: u64, price: i128, started_at: u64) -> Self {
        self.rounds.insert(
            round,
            RoundData {
                price: i256(price),
                started_at,
            },
        );
        self
    }

    /// Make every query fail with `SourceError::Unavailable`
    #[allow(dead_code)]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Keep `precision()` healthy but fail every price read, modeling
    /// a source that goes dark after registration
    #[allow(dead_code)]
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Fail round queries for unrecorded rounds with
    /// `SourceError::MissingRound` instead of returning a reading with
    /// a zero start timestamp
    #[allow(dead_code)]
    pub fn strict_rounds(mut self) -> Self {
        self.strict_rounds = true;
        self
    }

    fn check_available(&self) -> Result<(), SourceError> {
        if self.available {
            Ok(())
        } else {
            Err(SourceError::Unavailable("mock source offline".into()))
        }
    }

    fn check_readable(&self) -> Result<(), SourceError> {
        self.check_available()?;
        if self.fail_reads {
            return Err(SourceError::Unavailable("mock read failure".into()));
        }
        Ok(())
    }
}

impl PriceSource for MockPriceSource {
    fn latest(&self) -> Result<I256, SourceError> {
        self.check_readable()?;
        Ok(self.latest)
    }

    fn round_data(&self, round: RoundId) -> Result<RoundData, SourceError> {
        self.check_readable()?;
        match self.rounds.get(&round.as_u64()) {
            Some(data) => Ok(*data),
            None if self.strict_rounds => Err(SourceError::MissingRound(round)),
            None => Ok(RoundData {
                price: I256::ZERO,
                started_at: 0,
            }),
        }
    }

    fn round_started_at(&self, round: RoundId) -> Result<u64, SourceError> {
        self.check_readable()?;
        Ok(self
            .rounds
            .get(&round.as_u64())
            .map(|data| data.started_at)
            .unwrap_or(0))
    }

    fn precision(&self) -> Result<Precision, SourceError> {
        self.check_available()?;
        Ok(self.precision)
    }
}

/// Mock AssetMetadata with per-asset precisions and an optional
/// fallback
pub struct MockAssetMetadata {
    precisions: HashMap<AssetId, Precision>,
    fallback: Option<Precision>,
}

impl MockAssetMetadata {
    /// Metadata that knows no assets; every lookup fails
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            precisions: HashMap::new(),
            fallback: None,
        }
    }

    /// Metadata reporting the same precision for every asset
    pub fn uniform(precision: u8) -> Self {
        Self {
            precisions: HashMap::new(),
            fallback: Some(Precision::new(precision)),
        }
    }

    /// Set the precision for a specific asset
    #[allow(dead_code)]
    pub fn with_precision(mut self, asset: AssetId, precision: u8) -> Self {
        self.precisions.insert(asset, Precision::new(precision));
        self
    }
}

impl ratescan::AssetMetadata for MockAssetMetadata {
    fn precision(&self, asset: AssetId) -> Result<Precision, SourceError> {
        self.precisions
            .get(&asset)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| SourceError::Unavailable(format!("no metadata for asset {asset}")))
    }
}

/// Helper to build a distinct AssetId from a byte pattern
pub fn asset(byte: u8) -> AssetId {
    AssetId::new(Address::repeat_byte(byte))
}

/// Helper to build a signed 256-bit value from an i128
pub fn i256(value: i128) -> I256 {
    if value >= 0 {
        I256::from_raw(U256::from(value as u128))
    } else {
        -I256::from_raw(U256::from(value.unsigned_abs()))
    }
}

/// Install a fmt subscriber for test output; safe to call repeatedly
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
