//! Diff result structures.

use crate::model::{CategoryStats, ManifestTotals};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Added/removed/changed partition of one artifact's key space.
///
/// `added` and `removed` hold entries of type `E`, `changed` holds entries of
/// type `C`, and `totals` carries counts fixed when the result was built.
/// All lists are sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult<E, C, T> {
    pub added: Vec<E>,
    pub removed: Vec<E>,
    pub changed: Vec<C>,
    pub totals: T,
}

impl<E, C, T> DiffResult<E, C, T> {
    /// Number of structural changes: `added + removed + changed`.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// Whether no key was added, removed or changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl<E, C, T: Default> Default for DiffResult<E, C, T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            totals: T::default(),
        }
    }
}

/// Network endpoint diff.
pub type NetworkDiffResult = DiffResult<EndpointEntry, EndpointChange, ChangeTotals>;
/// Asset category diff.
pub type AssetDiffResult = DiffResult<CategoryEntry, CategoryChange, AssetTotals>;
/// Design-token screen diff; added/removed entries are screen identifiers.
pub type TokenDiffResult = DiffResult<String, ScreenChange, ScreenTotals>;

/// A before/after pair for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange<T> {
    pub before: T,
    pub after: T,
}

// ============================================================================
// Network
// ============================================================================

/// Snapshot of an endpoint that was added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointEntry {
    pub endpoint: String,
    pub hosts: BTreeSet<String>,
    pub status_codes: BTreeMap<String, u64>,
}

/// An endpoint present in both generations whose observations differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointChange {
    pub endpoint: String,
    pub changes: EndpointFieldChanges,
}

/// Per-field deltas of a changed endpoint; unchanged fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointFieldChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<FieldChange<BTreeSet<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_codes: Option<FieldChange<BTreeMap<String, u64>>>,
}

impl EndpointFieldChanges {
    /// Names of the fields that changed, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.hosts.is_some() {
            names.push("hosts");
        }
        if self.status_codes.is_some() {
            names.push("status_codes");
        }
        names
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_none() && self.status_codes.is_none()
    }
}

/// Counts for a keyed diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTotals {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub current: usize,
    pub previous: usize,
}

// ============================================================================
// Assets
// ============================================================================

/// Snapshot of an asset category that was added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub count: u64,
    pub bytes: u64,
}

/// An asset category whose count or size changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChange {
    pub category: String,
    pub before: CategoryStats,
    pub after: CategoryStats,
}

/// Manifest-level totals of both generations, copied verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTotals {
    pub current: ManifestTotals,
    pub previous: ManifestTotals,
}

impl AssetTotals {
    /// Absolute difference in total file count.
    #[must_use]
    pub fn file_delta(&self) -> u64 {
        self.current.files.abs_diff(self.previous.files)
    }

    /// Whether either manifest total moved.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.current != self.previous
    }
}

// ============================================================================
// Design tokens
// ============================================================================

/// A screen whose metrics or status changed.
///
/// Metric and status changes are tracked independently: a status flip with
/// identical metrics has `metrics_changed == false` and differing statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenChange {
    pub screen: String,
    pub metrics_changed: bool,
    pub status_before: Option<String>,
    pub status_after: Option<String>,
}

impl ScreenChange {
    #[must_use]
    pub fn status_changed(&self) -> bool {
        self.status_before != self.status_after
    }
}

/// Screen counts of both generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTotals {
    pub current: usize,
    pub previous: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = TokenDiffResult::default();
        assert!(result.is_empty());
        assert_eq!(result.change_count(), 0);
        assert_eq!(result.totals, ScreenTotals::default());
    }

    #[test]
    fn test_file_delta_is_absolute() {
        let totals = AssetTotals {
            current: ManifestTotals { files: 7, bytes: 0 },
            previous: ManifestTotals { files: 10, bytes: 0 },
        };
        assert_eq!(totals.file_delta(), 3);
    }

    #[test]
    fn test_unchanged_endpoint_fields_are_omitted_from_json() {
        let change = EndpointChange {
            endpoint: "GET /a".to_string(),
            changes: EndpointFieldChanges {
                hosts: None,
                status_codes: Some(FieldChange {
                    before: BTreeMap::from([("200".to_string(), 1)]),
                    after: BTreeMap::from([("500".to_string(), 1)]),
                }),
            },
        };
        let json = serde_json::to_value(&change).unwrap();
        assert!(json["changes"].get("hosts").is_none());
        assert_eq!(json["changes"]["status_codes"]["after"]["500"], 1);
        assert_eq!(change.changes.field_names(), vec!["status_codes"]);
    }
}
