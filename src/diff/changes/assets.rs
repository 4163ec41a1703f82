//! Asset manifest differencer.

use crate::diff::traits::{partition_keys, ArtifactDiffer};
use crate::diff::{AssetDiffResult, AssetTotals, CategoryChange, CategoryEntry};
use crate::model::{AssetManifest, CategoryStats};

/// Computes category-level changes between two asset manifests.
///
/// A shared category is changed when its file count or byte size differs.
/// Manifest totals are carried through untouched, independent of the
/// per-category comparison.
pub struct AssetDiff;

impl AssetDiff {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entry(key: &str, stats: CategoryStats) -> CategoryEntry {
        CategoryEntry {
            category: key.to_string(),
            count: stats.count,
            bytes: stats.bytes,
        }
    }
}

impl Default for AssetDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactDiffer for AssetDiff {
    type Artifact = AssetManifest;
    type Output = AssetDiffResult;

    fn diff(&self, current: &AssetManifest, previous: &AssetManifest) -> AssetDiffResult {
        let partition = partition_keys(&current.categories, &previous.categories);

        let added = partition
            .added
            .iter()
            .map(|key| Self::entry(key, current.categories[*key]))
            .collect();
        let removed = partition
            .removed
            .iter()
            .map(|key| Self::entry(key, previous.categories[*key]))
            .collect();
        let changed = partition
            .shared
            .iter()
            .filter_map(|key| {
                let before = previous.categories[*key];
                let after = current.categories[*key];
                (before != after).then(|| CategoryChange {
                    category: (*key).to_string(),
                    before,
                    after,
                })
            })
            .collect();

        AssetDiffResult {
            added,
            removed,
            changed,
            totals: AssetTotals {
                current: current.totals,
                previous: previous.totals,
            },
        }
    }

    fn name(&self) -> &'static str {
        "AssetDiff"
    }
}
