//! Route-scoped state for the model/splat viewer subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! A viewer route provider owns one `ViewerState` per mounted subtree and
//! supplies it via context so nested viewer pages consume asset identity
//! and file bytes without prop drilling.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::query::QueryState;
use crate::net::types::AssetKind;

/// Per-asset viewer state: which asset the route addresses and its
/// latest-file payload.
#[derive(Clone, Debug)]
pub struct ViewerState {
    pub kind: AssetKind,
    pub asset_id: Option<String>,
    pub file: QueryState<Vec<u8>>,
}

impl ViewerState {
    pub fn for_kind(kind: AssetKind) -> Self {
        Self { kind, asset_id: None, file: QueryState::default() }
    }

    /// Swap the addressed asset on a route-param change. File bytes are
    /// asset-scoped and must not leak across assets.
    pub fn reset_for_route_change(&mut self, next_asset_id: Option<String>) {
        self.asset_id = next_asset_id;
        self.file = QueryState::default();
    }
}
