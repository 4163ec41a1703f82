//! Surface diff engine implementation.

use super::changes::{AssetDiff, EndpointDiff, TokenDiff};
use super::traits::ArtifactDiffer;
use super::{AssetDiffResult, NetworkDiffResult, TokenDiffResult};
use crate::model::ArtifactSet;
use serde::{Deserialize, Serialize};

/// The three typed diffs of one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDiff {
    pub network: NetworkDiffResult,
    pub assets: AssetDiffResult,
    pub tokens: TokenDiffResult,
}

impl SurfaceDiff {
    /// Whether no artifact type reports a structural change.
    ///
    /// Asset totals moving without any category change still counts as a
    /// change here.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.network.is_empty()
            && self.assets.is_empty()
            && !self.assets.totals.has_changed()
            && self.tokens.is_empty()
    }
}

/// Runs every artifact differencer over a current/previous pair.
pub struct SurfaceDiffEngine {
    network: EndpointDiff,
    assets: AssetDiff,
    tokens: TokenDiff,
}

impl SurfaceDiffEngine {
    /// Create a new diff engine
    #[must_use]
    pub const fn new() -> Self {
        Self {
            network: EndpointDiff::new(),
            assets: AssetDiff::new(),
            tokens: TokenDiff::new(),
        }
    }

    /// Diff the current generation against the previous one.
    pub fn diff(&self, current: &ArtifactSet, previous: &ArtifactSet) -> SurfaceDiff {
        let network = self.network.diff(&current.network, &previous.network);
        let assets = self.assets.diff(&current.assets, &previous.assets);
        let tokens = self.tokens.diff(&current.tokens, &previous.tokens);

        tracing::debug!(
            "{}: {} changes, {}: {} changes, {}: {} changes",
            self.network.name(),
            network.change_count(),
            self.assets.name(),
            assets.change_count(),
            self.tokens.name(),
            tokens.change_count(),
        );

        SurfaceDiff {
            network,
            assets,
            tokens,
        }
    }
}

impl Default for SurfaceDiffEngine {
    fn default() -> Self {
        Self::new()
    }
}
