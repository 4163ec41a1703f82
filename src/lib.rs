//! **Release-over-release diff and risk engine for captured mobile app surfaces.**
//!
//! Capture tooling records three artifacts per platform and release: the
//! network endpoints the app talked to, a summary of the bundled assets, and
//! the design tokens measured per screen. `surface-diff` compares each
//! artifact against its previous generation, scores the structural change,
//! classifies it as `stable`, `review` or `attention`, and writes a
//! machine-readable JSON report alongside a condensed Markdown narrative.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: typed artifact documents ([`EndpointInventory`],
//!   [`AssetManifest`], [`TokenInventory`]) and the [`Platform`] identifiers.
//! - **[`loader`]**: fail-open loading; a missing or malformed artifact is an
//!   empty document with a [`LoadStatus`] saying why.
//! - **[`diff`]**: one differencer per artifact type, driven together by the
//!   [`SurfaceDiffEngine`].
//! - **[`risk`]**: the score and its classification.
//! - **[`reports`]**: the JSON and narrative renderers and the parity table.
//! - **[`pipeline`]**: workspace layout, previous-artifact resolution and the
//!   multi-platform [`RunCoordinator`].
//! - **[`baseline`]**: snapshots of the current artifacts for the next run.
//! - **[`parity`]**: iOS/Android design-token comparison.
//!
//! ## Diffing Two Generations
//!
//! ```no_run
//! use std::path::Path;
//! use surface_diff::{load_artifact, ArtifactDiffer, EndpointInventory};
//! use surface_diff::diff::changes::EndpointDiff;
//!
//! let current = load_artifact::<EndpointInventory>(Some(Path::new("reports/ios/network-summary.json")));
//! let previous = load_artifact::<EndpointInventory>(Some(Path::new("reports/ios/network-summary.baseline.json")));
//!
//! let network = EndpointDiff::new().diff(&current.document, &previous.document);
//! println!("{} endpoint change(s)", network.change_count());
//! ```
//!
//! ## Running a Whole Workspace
//!
//! ```no_run
//! use surface_diff::{Platform, RunCoordinator, RunOptions, WorkspaceLayout};
//!
//! let coordinator = RunCoordinator::new(WorkspaceLayout::new("."), RunOptions::default());
//! let outcome = coordinator.run(&Platform::ALL);
//! for report in outcome.reports() {
//!     println!("{}: {} (score {})", report.platform, report.risk.label, report.risk.score);
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod baseline;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod loader;
pub mod model;
pub mod parity;
pub mod pipeline;
pub mod reports;
pub mod risk;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, RiskConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, ParityConfig, WorkspaceConfig};
pub use diff::{ArtifactDiffer, SurfaceDiff, SurfaceDiffEngine};
pub use error::{ErrorContext, Result, SurfaceDiffError};
pub use loader::{load_artifact, LoadStatus, Loaded};
pub use model::{
    ArtifactKind, ArtifactSet, AssetManifest, EndpointInventory, Platform, PlatformSelector,
    TokenInventory,
};
pub use parity::{compare as compare_parity, ParityFinding, ParityKind};
pub use pipeline::{RunCoordinator, RunOptions, RunOutcome, WorkspaceLayout};
pub use reports::{Report, ReportFormat, ReportGenerator};
pub use risk::{assess, RiskAssessment, RiskLevel};
