//! Workspace layout and artifact path resolution.

use crate::baseline::baseline_path;
use crate::config::WorkspaceConfig;
use crate::model::{ArtifactKind, Platform};
use crate::utils::sibling_with_marker;
use std::path::{Path, PathBuf};

/// Marker of the previous-run copy (`<stem>.prev.json`).
pub const PREVIOUS_RUN_MARKER: &str = "prev";

/// File name of the parity report under the reports directory.
pub const PARITY_REPORT_NAME: &str = "cross-platform-parity.md";

/// Where artifacts and reports live inside a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
    reports_dir: String,
    tokens_dir: String,
}

impl WorkspaceLayout {
    /// Layout with the default directory names under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(&WorkspaceConfig {
            root: root.into(),
            ..WorkspaceConfig::default()
        })
    }

    #[must_use]
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self {
            root: config.root.clone(),
            reports_dir: config.reports_dir.clone(),
            tokens_dir: config.tokens_dir.clone(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<reports>/<platform>`; also the default output directory.
    #[must_use]
    pub fn report_dir(&self, platform: Platform) -> PathBuf {
        self.root.join(&self.reports_dir).join(platform.as_str())
    }

    /// Current location of one artifact of one platform.
    #[must_use]
    pub fn current_artifact(&self, platform: Platform, kind: ArtifactKind) -> PathBuf {
        let dir = match kind {
            ArtifactKind::Network | ArtifactKind::Assets => self.report_dir(platform),
            ArtifactKind::Tokens => self.root.join(&self.tokens_dir).join(platform.as_str()),
        };
        dir.join(kind.file_name())
    }

    /// Default parity report location.
    #[must_use]
    pub fn parity_report(&self) -> PathBuf {
        self.root.join(&self.reports_dir).join(PARITY_REPORT_NAME)
    }

    /// Resolve every path a platform run needs.
    ///
    /// `previous_root` and `output_dir` are roots holding one directory per
    /// platform.
    #[must_use]
    pub fn platform_paths(
        &self,
        platform: Platform,
        previous_root: Option<&Path>,
        output_dir: Option<&Path>,
    ) -> PlatformPaths {
        let platform_previous_root = previous_root.map(|root| root.join(platform.as_str()));
        let artifacts = ArtifactKind::ALL.map(|kind| {
            let current = self.current_artifact(platform, kind);
            let previous = resolve_previous(&current, platform_previous_root.as_deref());
            ArtifactPaths {
                kind,
                current,
                previous,
            }
        });
        let output_dir = output_dir.map_or_else(
            || self.report_dir(platform),
            |dir| dir.join(platform.as_str()),
        );

        PlatformPaths {
            platform,
            artifacts,
            output_dir,
        }
    }
}

/// Current and resolved previous location of one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub kind: ArtifactKind,
    pub current: PathBuf,
    /// `None` when no previous generation exists
    pub previous: Option<PathBuf>,
}

/// All resolved paths of one platform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPaths {
    pub platform: Platform,
    /// Network, assets, tokens, in that order
    pub artifacts: [ArtifactPaths; 3],
    pub output_dir: PathBuf,
}

impl PlatformPaths {
    #[must_use]
    pub fn artifact(&self, kind: ArtifactKind) -> &ArtifactPaths {
        match kind {
            ArtifactKind::Network => &self.artifacts[0],
            ArtifactKind::Assets => &self.artifacts[1],
            ArtifactKind::Tokens => &self.artifacts[2],
        }
    }

    /// Current artifact paths, in artifact order.
    #[must_use]
    pub fn current_paths(&self) -> Vec<&Path> {
        self.artifacts.iter().map(|a| a.current.as_path()).collect()
    }
}

/// Find the previous generation of `current`.
///
/// First existing match wins: `<previous_root>/<file name>`, then the
/// `.baseline` sibling, then the `.prev` sibling.
#[must_use]
pub fn resolve_previous(current: &Path, previous_root: Option<&Path>) -> Option<PathBuf> {
    let from_root = previous_root.and_then(|root| current.file_name().map(|name| root.join(name)));
    let candidates = from_root.into_iter().chain([
        baseline_path(current),
        sibling_with_marker(current, PREVIOUS_RUN_MARKER),
    ]);

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(
                "Previous artifact for {}: {}",
                current.display(),
                candidate.display()
            );
            return Some(candidate);
        }
    }
    tracing::debug!("No previous artifact for {}", current.display());
    None
}
