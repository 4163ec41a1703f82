//! Diff command handler.
//!
//! Implements the `diff` subcommand: compare the current and previous
//! artifacts of each selected platform and write the diff summaries.

use crate::config::DiffConfig;
use crate::pipeline::{exit_codes, RunCoordinator, RunOptions, RunOutcome, WorkspaceLayout};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The risk level never affects the exit code; only a platform that could
/// not be processed does.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let platforms = config.selector.platforms();
    let layout = WorkspaceLayout::from_config(&config.workspace);
    let options = RunOptions::from_config(&config);

    tracing::debug!(
        "Diffing {} under {}",
        config.selector,
        layout.root().display()
    );

    let outcome = RunCoordinator::new(layout, options).run(&platforms);

    if !config.behavior.quiet {
        print!("{}", summary_lines(&outcome));
    }

    Ok(determine_exit_code(&outcome))
}

/// One line per processed platform, plus the aggregate when present.
fn summary_lines(outcome: &RunOutcome) -> String {
    let mut out = String::new();
    for run in &outcome.runs {
        out.push_str(&format!(
            "{}: {} (score {})\n",
            run.report.platform, run.report.risk.label, run.report.risk.score
        ));
    }
    for failure in &outcome.failures {
        out.push_str(&format!("{}: failed: {}\n", failure.platform, failure.error));
    }
    if let Some(total) = outcome.aggregate_score {
        out.push_str(&format!("Aggregate diff score: {total}\n"));
    }
    out
}

fn determine_exit_code(outcome: &RunOutcome) -> i32 {
    if outcome.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    }
}
