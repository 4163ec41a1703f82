//! Data model for captured release artifacts.
//!
//! Three artifact documents are produced per platform by the capture tooling:
//! an endpoint inventory, an asset manifest summary and a design-token
//! inventory. They are deserialized into the typed structures here before
//! any diffing happens, so missing fields are a modelled case rather than a
//! lookup that silently yields nothing.

mod artifact;
mod platform;

pub use artifact::{
    ArtifactSet, AssetManifest, CategoryStats, EndpointInventory, EndpointRecord, ManifestTotals,
    ScreenTokens, TokenInventory,
};
pub use platform::{ArtifactKind, Platform, PlatformSelector};
