//! Structural diff engine for surface artifacts.
//!
//! # Architecture
//!
//! The diff system is built on one trait:
//!
//! - [`ArtifactDiffer`](traits::ArtifactDiffer): compares two generations of
//!   one artifact type
//! - Individual differencers in the [`changes`] module
//!
//! Every differencer partitions the union of both key spaces into `added`,
//! `removed` and `changed` (see [`partition_keys`]). Keys present in both
//! generations with structurally equal values never appear in any list.
//!
//! # Example
//!
//! ```ignore
//! use surface_diff::diff::SurfaceDiffEngine;
//!
//! let engine = SurfaceDiffEngine::new();
//! let diff = engine.diff(&current, &previous);
//! println!("{} endpoint changes", diff.network.change_count());
//! ```

pub mod changes;
mod engine;
mod result;
pub mod traits;

pub use engine::{SurfaceDiff, SurfaceDiffEngine};
pub use result::{
    AssetDiffResult, AssetTotals, CategoryChange, CategoryEntry, ChangeTotals, DiffResult,
    EndpointChange, EndpointEntry, EndpointFieldChanges, FieldChange, NetworkDiffResult,
    ScreenChange, ScreenTotals, TokenDiffResult,
};
pub use traits::{partition_keys, ArtifactDiffer, KeyPartition};
