//! Report type definitions.

use crate::diff::{AssetDiffResult, NetworkDiffResult, SurfaceDiff, TokenDiffResult};
use crate::model::Platform;
use crate::risk::RiskAssessment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON document
    Json,
    /// Condensed Markdown narrative
    Narrative,
}

impl ReportFormat {
    /// File name the format is written under in the output directory
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "diff-summary.json",
            Self::Narrative => "diff-summary.md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Narrative => write!(f, "narrative"),
        }
    }
}

/// Combined diff payload for one platform.
///
/// Field order is the serialized key order; every nested map is ordered, so
/// two reports of the same inputs serialize identically apart from
/// `generated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub platform: Platform,
    pub generated_at: DateTime<Utc>,
    pub network: NetworkDiffResult,
    pub assets: AssetDiffResult,
    pub tokens: TokenDiffResult,
    pub risk: RiskAssessment,
}

impl Report {
    /// Assemble a report stamped with the current time.
    #[must_use]
    pub fn new(platform: Platform, diff: SurfaceDiff, risk: RiskAssessment) -> Self {
        Self {
            platform,
            generated_at: Utc::now(),
            network: diff.network,
            assets: diff.assets,
            tokens: diff.tokens,
            risk,
        }
    }
}
