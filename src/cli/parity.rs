//! Parity command handler.

use crate::config::ParityConfig;
use crate::pipeline::{exit_codes, run_parity as run_parity_stage, WorkspaceLayout};
use anyhow::{Context, Result};

/// Run the parity command, returning the desired exit code.
///
/// Findings are informational; the exit code is non-zero only when the
/// report cannot be written, which surfaces as an error.
#[allow(clippy::needless_pass_by_value)]
pub fn run_parity(config: ParityConfig) -> Result<i32> {
    let layout = WorkspaceLayout::from_config(&config.workspace);
    let outcome = run_parity_stage(&layout, config.report.as_deref())
        .context("cross-platform parity check failed")?;

    if !config.behavior.quiet {
        println!(
            "{} parity finding(s), report at {}",
            outcome.findings.len(),
            outcome.report_path.display()
        );
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, BehaviorConfig, WorkspaceConfig};
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path, report: Option<std::path::PathBuf>) -> ParityConfig {
        let app = AppConfig {
            workspace: WorkspaceConfig {
                root: root.to_path_buf(),
                ..WorkspaceConfig::default()
            },
            behavior: BehaviorConfig {
                quiet: true,
                parallel: false,
            },
            ..AppConfig::default()
        };
        ParityConfig::from_app_config(&app, report)
    }

    #[test]
    fn test_run_parity_writes_default_report() {
        let tmp = TempDir::new().unwrap();
        let ios = tmp.path().join("design-tokens/ios/tokens.json");
        fs::create_dir_all(ios.parent().unwrap()).unwrap();
        fs::write(&ios, r#"{"screens": {"home": {"metrics": {"w": 1}}}}"#).unwrap();

        let code = run_parity(config_for(tmp.path(), None)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report =
            fs::read_to_string(tmp.path().join("reports/cross-platform-parity.md")).unwrap();
        assert!(report.contains("| missing_on_android | home |"));
    }

    #[test]
    fn test_run_parity_unwritable_report_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("blocker"), "").unwrap();
        let report = tmp.path().join("blocker").join("parity.md");

        assert!(run_parity(config_for(tmp.path(), Some(report))).is_err());
    }
}
