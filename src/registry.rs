// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset to price source registry

use std::collections::HashMap;
use std::sync::Arc;

use crate::source::PriceSource;
use crate::types::asset::AssetId;
use crate::types::precision::Precision;

/// Everything the engine holds for one tracked asset.
///
/// The source handle is shared with the collaborator that owns the
/// source; both precisions are snapshots taken when the binding was
/// created. A binding is only ever replaced as a whole unit, so readers
/// never observe a source paired with another source's precisions.
pub struct SourceBinding {
    source: Arc<dyn PriceSource>,
    source_precision: Precision,
    asset_precision: Precision,
}

impl SourceBinding {
    /// Create a binding from a source handle and precision snapshots
    pub fn new(
        source: Arc<dyn PriceSource>,
        source_precision: Precision,
        asset_precision: Precision,
    ) -> Self {
        Self {
            source,
            source_precision,
            asset_precision,
        }
    }

    /// The bound source handle
    pub fn source(&self) -> Arc<dyn PriceSource> {
        Arc::clone(&self.source)
    }

    /// Fractional digits of the source's raw prices, as captured at
    /// registration
    pub const fn source_precision(&self) -> Precision {
        self.source_precision
    }

    /// The asset's native display precision, as captured at
    /// registration
    pub const fn asset_precision(&self) -> Precision {
        self.asset_precision
    }
}

impl std::fmt::Debug for SourceBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceBinding")
            .field("source_precision", &self.source_precision)
            .field("asset_precision", &self.asset_precision)
            .finish_non_exhaustive()
    }
}

/// Mapping from asset to [`SourceBinding`], remembering registration
/// order for enumeration.
///
/// A binding is created on first registration and replaced in place on
/// re-registration; the asset keeps its original position in the order.
/// Bindings are never removed.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    bindings: HashMap<AssetId, SourceBinding>,
    order: Vec<AssetId>,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the binding for `asset`.
    ///
    /// First-time assets are appended to the enumeration order;
    /// re-registered assets keep their position.
    pub fn bind(&mut self, asset: AssetId, binding: SourceBinding) {
        if self.bindings.insert(asset, binding).is_none() {
            self.order.push(asset);
        }
    }

    /// Look up the binding for `asset`
    pub fn get(&self, asset: AssetId) -> Option<&SourceBinding> {
        self.bindings.get(&asset)
    }

    /// Whether `asset` has a binding
    pub fn contains(&self, asset: AssetId) -> bool {
        self.bindings.contains_key(&asset)
    }

    /// Number of registered assets
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no assets are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate bindings in registration order
    pub fn iter(&self) -> impl Iterator<Item = (AssetId, &SourceBinding)> + '_ {
        self.order
            .iter()
            .filter_map(|asset| self.bindings.get(asset).map(|binding| (*asset, binding)))
    }
}
