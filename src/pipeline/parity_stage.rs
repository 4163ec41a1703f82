//! Cross-platform parity stage.

use super::workspace::WorkspaceLayout;
use crate::error::{ErrorContext, Result};
use crate::loader::load_artifact;
use crate::model::{ArtifactKind, Platform, TokenInventory};
use crate::parity::{compare, ParityFinding};
use crate::reports::render_parity;
use crate::utils::write_atomic;
use std::path::{Path, PathBuf};

/// Findings and where they were written.
#[derive(Debug, Clone)]
pub struct ParityOutcome {
    pub findings: Vec<ParityFinding>,
    pub report_path: PathBuf,
}

/// Compare current iOS and Android tokens and write the parity report.
///
/// The report goes to `report` when given, otherwise to the layout's default
/// parity location.
pub fn run_parity(layout: &WorkspaceLayout, report: Option<&Path>) -> Result<ParityOutcome> {
    let load = |platform| {
        let path = layout.current_artifact(platform, ArtifactKind::Tokens);
        load_artifact::<TokenInventory>(Some(path.as_path())).into_document()
    };
    let findings = compare(&load(Platform::Ios), &load(Platform::Android));

    let report_path = report.map_or_else(|| layout.parity_report(), Path::to_path_buf);
    let markdown = render_parity(&findings)?;
    write_atomic(&report_path, markdown.as_bytes())
        .context("writing parity report")?;

    if findings.is_empty() {
        tracing::info!("No parity issues. Wrote {}", report_path.display());
    } else {
        tracing::warn!(
            "{} parity difference(s) found. Wrote {}",
            findings.len(),
            report_path.display()
        );
    }

    Ok(ParityOutcome {
        findings,
        report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_inventories_are_aligned() {
        let tmp = TempDir::new().unwrap();
        let layout = WorkspaceLayout::new(tmp.path());

        let outcome = run_parity(&layout, None).unwrap();
        assert!(outcome.findings.is_empty());
        assert_eq!(outcome.report_path, layout.parity_report());
        let text = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(text.contains("All tracked artefacts are aligned"));
    }

    #[test]
    fn test_explicit_report_path() {
        let tmp = TempDir::new().unwrap();
        let layout = WorkspaceLayout::new(tmp.path());
        let ios_tokens = layout.current_artifact(Platform::Ios, ArtifactKind::Tokens);
        fs::create_dir_all(ios_tokens.parent().unwrap()).unwrap();
        fs::write(&ios_tokens, r#"{"screens": {"home": {}}}"#).unwrap();

        let target = tmp.path().join("custom").join("parity.md");
        let outcome = run_parity(&layout, Some(&target)).unwrap();
        assert_eq!(outcome.findings.len(), 1);
        assert!(fs::read_to_string(&target)
            .unwrap()
            .contains("| missing_on_android | home |"));
    }
}
