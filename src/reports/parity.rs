//! Cross-platform parity Markdown.

use super::ReportError;
use crate::parity::ParityFinding;
use std::fmt::Write;

/// Render parity findings as a Markdown document.
pub fn render_parity(findings: &[ParityFinding]) -> Result<String, ReportError> {
    let mut out = String::new();
    writeln!(out, "# Cross-Platform Parity")?;
    writeln!(out)?;

    if findings.is_empty() {
        writeln!(out, "All tracked artefacts are aligned between iOS and Android.")?;
        return Ok(out);
    }

    writeln!(out, "| Type | Item | Detail |")?;
    writeln!(out, "| --- | --- | --- |")?;
    for finding in findings {
        writeln!(
            out,
            "| {} | {} | {} |",
            finding.kind,
            escape_cell(&finding.item),
            escape_cell(&finding.detail)
        )?;
    }
    Ok(out)
}

/// Keep a value inside its table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
