//! Run coordination across platforms.
//!
//! Each platform is processed independently: resolve paths, load, diff,
//! assess, write both reports, and optionally store a baseline. A failing
//! platform never stops the others.

use super::diff_stage::compute_diff;
use super::load_stage::load_platform;
use super::report_stage::output_report;
use super::workspace::WorkspaceLayout;
use crate::baseline;
use crate::config::DiffConfig;
use crate::diff::SurfaceDiffEngine;
use crate::error::{ErrorContext, Result, SurfaceDiffError};
use crate::model::Platform;
use crate::reports::Report;
use crate::risk::RiskThresholds;
use rayon::prelude::*;
use std::path::PathBuf;

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root holding previous artifacts as `<root>/<platform>/<file>`
    pub previous_root: Option<PathBuf>,
    /// Root receiving outputs as `<root>/<platform>/`
    pub output_dir: Option<PathBuf>,
    /// Store the current artifacts as the next baseline
    pub store_baseline: bool,
    /// Process platforms on the rayon pool
    pub parallel: bool,
    /// Pretty-print the JSON report
    pub pretty: bool,
    pub thresholds: RiskThresholds,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            previous_root: None,
            output_dir: None,
            store_baseline: false,
            parallel: false,
            pretty: true,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn from_config(config: &DiffConfig) -> Self {
        Self {
            previous_root: config.paths.previous_root.clone(),
            output_dir: config.paths.output_dir.clone(),
            store_baseline: config.store_baseline,
            parallel: config.behavior.parallel,
            pretty: config.output.pretty,
            thresholds: config.risk.thresholds(),
        }
    }
}

/// Result of processing one platform.
#[derive(Debug, Clone)]
pub struct PlatformRun {
    pub report: Report,
    /// `diff-summary.json` and `diff-summary.md`
    pub written: Vec<PathBuf>,
    /// Baseline files written, empty unless requested
    pub baselines: Vec<PathBuf>,
}

/// A platform whose processing failed.
#[derive(Debug)]
pub struct PlatformFailure {
    pub platform: Platform,
    pub error: SurfaceDiffError,
}

/// Outcome of a run over one or more platforms.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Successful platforms, in request order
    pub runs: Vec<PlatformRun>,
    pub failures: Vec<PlatformFailure>,
    /// Sum of risk scores over successful platforms; only set when two or
    /// more platforms were requested
    pub aggregate_score: Option<u64>,
}

impl RunOutcome {
    #[must_use]
    pub fn reports(&self) -> Vec<&Report> {
        self.runs.iter().map(|run| &run.report).collect()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Wires loading, diffing, rendering and baselines together per platform.
pub struct RunCoordinator {
    layout: WorkspaceLayout,
    options: RunOptions,
    engine: SurfaceDiffEngine,
}

impl RunCoordinator {
    #[must_use]
    pub const fn new(layout: WorkspaceLayout, options: RunOptions) -> Self {
        Self {
            layout,
            options,
            engine: SurfaceDiffEngine::new(),
        }
    }

    /// Process every platform and collect the outcome.
    pub fn run(&self, platforms: &[Platform]) -> RunOutcome {
        let results: Vec<(Platform, Result<PlatformRun>)> = if self.options.parallel {
            platforms
                .par_iter()
                .map(|&platform| (platform, self.process_platform(platform)))
                .collect()
        } else {
            platforms
                .iter()
                .map(|&platform| (platform, self.process_platform(platform)))
                .collect()
        };

        let mut outcome = RunOutcome::default();
        for (platform, result) in results {
            match result {
                Ok(run) => outcome.runs.push(run),
                Err(error) => {
                    tracing::error!("{platform}: {error}");
                    outcome.failures.push(PlatformFailure { platform, error });
                }
            }
        }

        if platforms.len() >= 2 {
            let total = outcome
                .runs
                .iter()
                .fold(0u64, |acc, run| acc.saturating_add(run.report.risk.score));
            tracing::info!("Aggregate diff score: {total}");
            outcome.aggregate_score = Some(total);
        }

        outcome
    }

    /// Process a single platform.
    pub fn process_platform(&self, platform: Platform) -> Result<PlatformRun> {
        let paths = self.layout.platform_paths(
            platform,
            self.options.previous_root.as_deref(),
            self.options.output_dir.as_deref(),
        );

        let (current, previous) = load_platform(&paths);
        let (diff, risk) = compute_diff(
            &self.engine,
            &current.artifacts,
            &previous.artifacts,
            &self.options.thresholds,
        );
        tracing::info!("{platform}: risk {} (score {})", risk.label, risk.score);

        let report = Report::new(platform, diff, risk);
        let written = output_report(&report, &paths.output_dir, self.options.pretty)
            .with_context(|| format!("writing {platform} diff summary"))?;
        for path in &written {
            tracing::info!("Wrote {}", path.display());
        }

        let baselines = if self.options.store_baseline {
            let stored = baseline::snapshot(&paths.current_paths())
                .with_context(|| format!("storing {platform} baseline"))?;
            tracing::info!("{platform}: stored {} baseline file(s)", stored.len());
            stored
        } else {
            Vec::new()
        };

        Ok(PlatformRun {
            report,
            written,
            baselines,
        })
    }
}
