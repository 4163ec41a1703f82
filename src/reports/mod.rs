//! Report generation for surface diffs.
//!
//! Two renderings are produced for every [`Report`]:
//! - JSON: the full payload with stable key order, for automation
//! - Narrative: condensed Markdown for people, capped at
//!   [`NARRATIVE_EXAMPLE_LIMIT`] examples per list
//!
//! The cross-platform parity document is rendered by [`render_parity`].

mod json;
mod narrative;
mod parity;
mod types;

pub use json::JsonReporter;
pub use narrative::{NarrativeReporter, NARRATIVE_EXAMPLE_LIMIT};
pub use parity::render_parity;
pub use types::{Report, ReportFormat};

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report
    fn generate(&self, report: &Report) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Both renderings of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Structured JSON document
    pub structured: String,
    /// Markdown narrative
    pub narrative: String,
}

impl RenderedReport {
    /// Pairs of `(file name, contents)` in write order.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 2] {
        [
            (ReportFormat::Json.file_name(), self.structured.as_str()),
            (ReportFormat::Narrative.file_name(), self.narrative.as_str()),
        ]
    }
}

/// Render a report as pretty JSON and Markdown narrative.
pub fn render(report: &Report) -> Result<RenderedReport, ReportError> {
    render_with(report, true)
}

/// Render a report, choosing whether the JSON is pretty-printed.
pub fn render_with(report: &Report, pretty: bool) -> Result<RenderedReport, ReportError> {
    Ok(RenderedReport {
        structured: JsonReporter::new().pretty(pretty).generate(report)?,
        narrative: NarrativeReporter::new().generate(report)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::SurfaceDiff;
    use crate::model::Platform;
    use crate::risk::{RiskAssessment, RiskThresholds};

    #[test]
    fn test_render_produces_both_documents() {
        let report = Report::new(
            Platform::Ios,
            SurfaceDiff::default(),
            RiskAssessment::from_score(0, &RiskThresholds::default()),
        );
        let rendered = render(&report).unwrap();
        assert!(rendered.structured.contains("\"platform\": \"ios\""));
        assert!(rendered.narrative.starts_with("# IOS Diff Summary"));

        let names: Vec<_> = rendered.files().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["diff-summary.json", "diff-summary.md"]);
    }

    #[test]
    fn test_generators_report_their_format() {
        let report = Report::new(
            Platform::Android,
            SurfaceDiff::default(),
            RiskAssessment::from_score(0, &RiskThresholds::default()),
        );
        let narrative = NarrativeReporter::new();
        assert!(narrative.generate(&report).unwrap().contains("ANDROID"));
        assert_eq!(narrative.format(), ReportFormat::Narrative);
        assert_eq!(JsonReporter::new().format(), ReportFormat::Json);
    }
}
