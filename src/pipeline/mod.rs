//! Pipeline orchestration for surface diffs.
//!
//! This module provides the orchestration behind the commands: workspace
//! path resolution, load → diff → report stages, the multi-platform run
//! coordinator and the parity run.

mod coordinator;
mod diff_stage;
mod load_stage;
mod output;
mod parity_stage;
mod report_stage;
mod workspace;

pub use coordinator::{PlatformFailure, PlatformRun, RunCoordinator, RunOptions, RunOutcome};
pub use diff_stage::compute_diff;
pub use load_stage::{load_generation, load_platform, LoadedGeneration};
pub use output::{write_output, OutputTarget};
pub use parity_stage::{run_parity, ParityOutcome};
pub use report_stage::output_report;
pub use workspace::{
    resolve_previous, ArtifactPaths, PlatformPaths, WorkspaceLayout, PARITY_REPORT_NAME,
    PREVIOUS_RUN_MARKER,
};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, whatever the risk level
    pub const SUCCESS: i32 = 0;
    /// An error occurred (write failure, invalid config, bad arguments)
    pub const ERROR: i32 = 3;
}
