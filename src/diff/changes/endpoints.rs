//! Endpoint inventory differencer.

use crate::diff::traits::{partition_keys, ArtifactDiffer};
use crate::diff::{
    ChangeTotals, EndpointChange, EndpointEntry, EndpointFieldChanges, FieldChange,
    NetworkDiffResult,
};
use crate::model::{EndpointInventory, EndpointRecord};

/// Computes endpoint-level changes between two network inventories.
///
/// A shared endpoint is changed when its host set or its status-code counts
/// differ by value.
pub struct EndpointDiff;

impl EndpointDiff {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entry(key: &str, record: &EndpointRecord) -> EndpointEntry {
        EndpointEntry {
            endpoint: key.to_string(),
            hosts: record.hosts.clone(),
            status_codes: record.status_codes.clone(),
        }
    }

    fn field_changes(current: &EndpointRecord, previous: &EndpointRecord) -> EndpointFieldChanges {
        EndpointFieldChanges {
            hosts: (current.hosts != previous.hosts).then(|| FieldChange {
                before: previous.hosts.clone(),
                after: current.hosts.clone(),
            }),
            status_codes: (current.status_codes != previous.status_codes).then(|| FieldChange {
                before: previous.status_codes.clone(),
                after: current.status_codes.clone(),
            }),
        }
    }
}

impl Default for EndpointDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactDiffer for EndpointDiff {
    type Artifact = EndpointInventory;
    type Output = NetworkDiffResult;

    fn diff(&self, current: &EndpointInventory, previous: &EndpointInventory) -> NetworkDiffResult {
        let partition = partition_keys(&current.endpoints, &previous.endpoints);

        let added: Vec<EndpointEntry> = partition
            .added
            .iter()
            .map(|key| Self::entry(key, &current.endpoints[*key]))
            .collect();
        let removed: Vec<EndpointEntry> = partition
            .removed
            .iter()
            .map(|key| Self::entry(key, &previous.endpoints[*key]))
            .collect();
        let changed: Vec<EndpointChange> = partition
            .shared
            .iter()
            .filter_map(|key| {
                let changes =
                    Self::field_changes(&current.endpoints[*key], &previous.endpoints[*key]);
                (!changes.is_empty()).then(|| EndpointChange {
                    endpoint: (*key).to_string(),
                    changes,
                })
            })
            .collect();

        let totals = ChangeTotals {
            added: added.len(),
            removed: removed.len(),
            changed: changed.len(),
            current: current.endpoints.len(),
            previous: previous.endpoints.len(),
        };

        NetworkDiffResult {
            added,
            removed,
            changed,
            totals,
        }
    }

    fn name(&self) -> &'static str {
        "EndpointDiff"
    }
}
