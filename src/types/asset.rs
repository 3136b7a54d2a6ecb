// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset identifier type

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identifier of a tracked asset.
///
/// Wraps the asset's on-chain address. The registry keys every binding by
/// this identifier, and asset metadata lookups use it to resolve the
/// asset's native display precision.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use ratescan::AssetId;
///
/// let weth = AssetId::new(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
/// assert_eq!(weth.address(), address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AssetId(Address);

impl AssetId {
    /// Create a new asset identifier
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Get the inner address
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for AssetId {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
