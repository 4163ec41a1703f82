//! Artifact loading stage.
//!
//! Loads both generations of every artifact of one platform. Load outcomes
//! are kept alongside the documents so callers can report what was missing
//! or malformed.

use super::workspace::PlatformPaths;
use crate::loader::{load_artifact, LoadStatus};
use crate::model::{ArtifactKind, ArtifactSet};
use std::path::Path;

/// One generation (current or previous) of a platform's artifacts.
#[derive(Debug, Clone, Default)]
pub struct LoadedGeneration {
    pub artifacts: ArtifactSet,
    /// Load status per artifact, in [`ArtifactKind::ALL`] order
    pub statuses: Vec<(ArtifactKind, LoadStatus)>,
}

impl LoadedGeneration {
    /// Artifacts that were absent or malformed.
    pub fn fallbacks(&self) -> impl Iterator<Item = &(ArtifactKind, LoadStatus)> {
        self.statuses
            .iter()
            .filter(|(_, status)| *status != LoadStatus::Loaded)
    }
}

/// Load the network, asset and token artifacts at the given paths.
#[must_use]
pub fn load_generation(
    network: Option<&Path>,
    assets: Option<&Path>,
    tokens: Option<&Path>,
) -> LoadedGeneration {
    let network = load_artifact(network);
    let assets = load_artifact(assets);
    let tokens = load_artifact(tokens);

    LoadedGeneration {
        statuses: vec![
            (ArtifactKind::Network, network.status),
            (ArtifactKind::Assets, assets.status),
            (ArtifactKind::Tokens, tokens.status),
        ],
        artifacts: ArtifactSet {
            network: network.document,
            assets: assets.document,
            tokens: tokens.document,
        },
    }
}

/// Load the current and previous generations of one platform.
#[must_use]
pub fn load_platform(paths: &PlatformPaths) -> (LoadedGeneration, LoadedGeneration) {
    let current = move |kind| Some(paths.artifact(kind).current.as_path());
    let previous = move |kind| paths.artifact(kind).previous.as_deref();

    let current_generation = load_generation(
        current(ArtifactKind::Network),
        current(ArtifactKind::Assets),
        current(ArtifactKind::Tokens),
    );
    let previous_generation = load_generation(
        previous(ArtifactKind::Network),
        previous(ArtifactKind::Assets),
        previous(ArtifactKind::Tokens),
    );

    for (kind, status) in current_generation.fallbacks() {
        tracing::debug!("{}: current {} artifact {:?}", paths.platform, kind, status);
    }
    for (kind, status) in previous_generation.fallbacks() {
        tracing::debug!("{}: previous {} artifact {:?}", paths.platform, kind, status);
    }

    (current_generation, previous_generation)
}
