//! Report output stage.
//!
//! Renders a report and writes both documents into the platform's output
//! directory.

use crate::error::Result;
use crate::reports::{render_with, Report};
use crate::utils::write_atomic;
use std::path::{Path, PathBuf};

/// Render `report` and write `diff-summary.json` and `diff-summary.md`.
///
/// Each file is written atomically. Returns the written paths.
pub fn output_report(report: &Report, output_dir: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
    let rendered = render_with(report, pretty)?;

    let mut written = Vec::with_capacity(2);
    for (name, contents) in rendered.files() {
        let path = output_dir.join(name);
        write_atomic(&path, contents.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::SurfaceDiff;
    use crate::model::Platform;
    use crate::risk::{RiskAssessment, RiskThresholds};
    use tempfile::TempDir;

    #[test]
    fn test_writes_both_documents() {
        let tmp = TempDir::new().unwrap();
        let report = Report::new(
            Platform::Ios,
            SurfaceDiff::default(),
            RiskAssessment::from_score(0, &RiskThresholds::default()),
        );
        let out = tmp.path().join("ios");

        let written = output_report(&report, &out, false).unwrap();
        assert_eq!(
            written,
            vec![out.join("diff-summary.json"), out.join("diff-summary.md")]
        );
        let json = std::fs::read_to_string(&written[0]).unwrap();
        assert!(json.starts_with("{\"platform\":\"ios\""));
    }
}
