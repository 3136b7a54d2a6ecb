// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ratescan library.
//!
//! Two error types cover the whole surface:
//!
//! - [`RateError`] - every failure a [`RateEngine`](crate::RateEngine)
//!   operation can return
//! - [`SourceError`] - failures raised by the external collaborators
//!   behind [`PriceSource`](crate::PriceSource) and
//!   [`AssetMetadata`](crate::AssetMetadata), wrapped into
//!   [`RateError::Source`] when they surface through the engine
//!
//! Every error is terminal for the call that raised it: operations
//! either return a fully valid value or an error, never a partial or
//! fallback result. The library does not log or suppress errors on its
//! own; surfacing them is the caller's responsibility.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ratescan::{RateEngine, RateError};
//!
//! match engine.current_cross_price(weth, usdc) {
//!     Ok(price) => println!("WETH/USDC: {price}"),
//!     Err(RateError::UnknownAsset { asset }) => {
//!         eprintln!("register a source for {asset} first");
//!     }
//!     Err(RateError::OutOfRange { asset, round, timestamp }) => {
//!         eprintln!("round {round} of {asset} was not live at {timestamp}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

mod rate;
mod source;

pub use rate::RateError;
pub use source::SourceError;
