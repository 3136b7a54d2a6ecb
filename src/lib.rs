// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Price oracle aggregation core: decimal normalization, cross-asset
//! rates, and historical round validation.
//!
//! Bind one [`PriceSource`] per tracked asset on a [`RateEngine`], then
//! read current prices, current cross rates, or historical cross rates
//! reconstructed from specific rounds. All prices come back as
//! [`NormalizedPrice`] values at canonical 18-digit fixed point.

mod cross;
mod engine;
mod errors;
mod normalize;
mod registry;
mod source;
mod types;

pub use engine::RateEngine;
pub use errors::{RateError, SourceError};
pub use normalize::{normalize, CANONICAL_SCALE};
pub use registry::{SourceBinding, SourceRegistry};
pub use source::{AssetMetadata, PriceSource};
pub use types::asset::AssetId;
pub use types::precision::Precision;
pub use types::price::NormalizedPrice;
pub use types::round::{RoundData, RoundId};
