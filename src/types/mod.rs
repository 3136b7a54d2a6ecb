// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across ratescan.
//!
//! This module provides newtype wrappers for the domain concepts:
//! - Asset identifiers
//! - Decimal precision of sources and assets
//! - Canonical fixed-point prices
//! - Round indices and round readings

pub mod asset;
pub mod precision;
pub mod price;
pub mod round;

// Note: Public types are re-exported from lib.rs, not here
