//! Markdown narrative generator.
//!
//! The narrative is the scannable rendering of a [`Report`]: risk headline
//! first, then one section per artifact type that has findings. Each list
//! shows at most [`NARRATIVE_EXAMPLE_LIMIT`] entries followed by a count of
//! the rest; the JSON report always keeps everything.

use super::{Report, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{AssetDiffResult, NetworkDiffResult, ScreenChange, TokenDiffResult};
use std::fmt::Write;

/// Maximum number of examples listed per added/removed/changed list.
pub const NARRATIVE_EXAMPLE_LIMIT: usize = 5;

const ADDED: &str = "➕";
const REMOVED: &str = "➖";
const CHANGED: &str = "∆";

/// Markdown narrative reporter
pub struct NarrativeReporter {
    limit: usize,
}

impl NarrativeReporter {
    /// Create a new narrative reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: NARRATIVE_EXAMPLE_LIMIT,
        }
    }

    /// Write up to `limit` example lines, then a remainder line if truncated.
    fn write_examples<T>(
        &self,
        out: &mut String,
        items: &[T],
        marker: &str,
        describe: impl Fn(&T) -> String,
    ) -> Result<(), ReportError> {
        for item in items.iter().take(self.limit) {
            writeln!(out, "  - {marker} {}", describe(item))?;
        }
        if items.len() > self.limit {
            writeln!(out, "  - … {} more", items.len() - self.limit)?;
        }
        Ok(())
    }

    fn write_network(&self, out: &mut String, network: &NetworkDiffResult) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "## Network")?;
        writeln!(out, "- Added: {}", network.added.len())?;
        writeln!(out, "- Removed: {}", network.removed.len())?;
        writeln!(out, "- Changed: {}", network.changed.len())?;
        self.write_examples(out, &network.added, ADDED, |e| e.endpoint.clone())?;
        self.write_examples(out, &network.removed, REMOVED, |e| e.endpoint.clone())?;
        self.write_examples(out, &network.changed, CHANGED, |c| {
            format!("{} ({})", c.endpoint, c.changes.field_names().join(", "))
        })
    }

    fn write_assets(&self, out: &mut String, assets: &AssetDiffResult) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "## Assets")?;
        writeln!(out, "- Current files: {}", assets.totals.current.files)?;
        writeln!(out, "- Previous files: {}", assets.totals.previous.files)?;
        let (before, after) = (assets.totals.previous.bytes, assets.totals.current.bytes);
        if before != after {
            writeln!(out, "- Total bytes: {before} → {after}")?;
        }
        self.write_examples(out, &assets.added, ADDED, |e| {
            format!("{} ({} files)", e.category, e.count)
        })?;
        self.write_examples(out, &assets.removed, REMOVED, |e| {
            format!("{} ({} files)", e.category, e.count)
        })?;
        self.write_examples(out, &assets.changed, CHANGED, |c| {
            format!("{}: {} → {}", c.category, c.before.count, c.after.count)
        })
    }

    fn write_tokens(&self, out: &mut String, tokens: &TokenDiffResult) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "## Design Tokens")?;
        writeln!(out, "- Screens tracked: {}", tokens.totals.current)?;
        writeln!(out, "- Added screens: {}", tokens.added.len())?;
        writeln!(out, "- Removed screens: {}", tokens.removed.len())?;
        writeln!(out, "- Changed screens: {}", tokens.changed.len())?;
        self.write_examples(out, &tokens.added, ADDED, Clone::clone)?;
        self.write_examples(out, &tokens.removed, REMOVED, Clone::clone)?;
        self.write_examples(out, &tokens.changed, CHANGED, describe_screen_change)
    }
}

fn describe_screen_change(change: &ScreenChange) -> String {
    let mut parts = Vec::new();
    if change.metrics_changed {
        parts.push("metrics".to_string());
    }
    if change.status_changed() {
        parts.push(format!(
            "status {} → {}",
            change.status_before.as_deref().unwrap_or("none"),
            change.status_after.as_deref().unwrap_or("none"),
        ));
    }
    format!("{} ({})", change.screen, parts.join(", "))
}

impl Default for NarrativeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for NarrativeReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {} Diff Summary", report.platform.as_str().to_uppercase())?;
        writeln!(out)?;
        writeln!(
            out,
            "- Risk: **{}** (score {})",
            report.risk.label, report.risk.score
        )?;

        let network_findings = !report.network.is_empty();
        let asset_findings = !report.assets.is_empty() || report.assets.totals.has_changed();
        let token_findings = !report.tokens.is_empty();

        if network_findings {
            self.write_network(&mut out, &report.network)?;
        }
        if asset_findings {
            self.write_assets(&mut out, &report.assets)?;
        }
        if token_findings {
            self.write_tokens(&mut out, &report.tokens)?;
        }
        if !(network_findings || asset_findings || token_findings) {
            writeln!(out, "- No structural changes detected.")?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Narrative
    }
}
