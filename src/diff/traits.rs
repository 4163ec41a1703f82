//! Trait definitions for artifact differencers.
//!
//! Each artifact type gets its own differencer; they share this contract so
//! the engine and the benchmarks can drive them uniformly.

use std::collections::BTreeMap;

/// Computes the structural diff of one artifact type.
pub trait ArtifactDiffer: Send + Sync {
    /// The artifact document this differencer compares.
    type Artifact;
    /// The diff produced.
    type Output;

    /// Compare the current generation against the previous one.
    fn diff(&self, current: &Self::Artifact, previous: &Self::Artifact) -> Self::Output;

    /// Name of this differencer for logging.
    fn name(&self) -> &'static str;
}

/// Sorted key partition of two keyed documents.
#[derive(Debug, Default)]
pub struct KeyPartition<'a> {
    /// Keys only in the current generation
    pub added: Vec<&'a str>,
    /// Keys only in the previous generation
    pub removed: Vec<&'a str>,
    /// Keys in both generations
    pub shared: Vec<&'a str>,
}

/// Split the keys of `current` and `previous` into added, removed and shared.
///
/// Both inputs are ordered maps, so every output list is sorted.
pub fn partition_keys<'a, A, B>(
    current: &'a BTreeMap<String, A>,
    previous: &'a BTreeMap<String, B>,
) -> KeyPartition<'a> {
    let mut partition = KeyPartition::default();

    for key in current.keys() {
        if previous.contains_key(key) {
            partition.shared.push(key.as_str());
        } else {
            partition.added.push(key.as_str());
        }
    }
    partition.removed = previous
        .keys()
        .filter(|key| !current.contains_key(*key))
        .map(String::as_str)
        .collect();

    partition
}
