//! Risk aggregation over the three artifact diffs.
//!
//! The score is a plain sum of structural-change magnitudes. Network and
//! token diffs contribute their change counts; the asset diff contributes
//! only the absolute change in total file count, so byte churn and
//! per-category movement do not raise it.

use crate::diff::{AssetDiffResult, NetworkDiffResult, TokenDiffResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse severity of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score 0
    Low,
    /// Score within the review ceiling
    Medium,
    /// Score above the review ceiling
    High,
}

impl RiskLevel {
    /// Fixed label shown for this level
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "stable",
            Self::Medium => "review",
            Self::High => "attention",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score boundaries between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    /// Highest score still classified as `medium`
    pub review_max: u64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { review_max: 5 }
    }
}

impl RiskThresholds {
    /// Classify a score.
    #[must_use]
    pub const fn level_for(&self, score: u64) -> RiskLevel {
        if score == 0 {
            RiskLevel::Low
        } else if score <= self.review_max {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Risk verdict for one platform's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub label: String,
    pub score: u64,
}

impl RiskAssessment {
    /// Build an assessment for a precomputed score.
    #[must_use]
    pub fn from_score(score: u64, thresholds: &RiskThresholds) -> Self {
        let level = thresholds.level_for(score);
        Self {
            level,
            label: level.label().to_string(),
            score,
        }
    }
}

/// Assess risk with the default thresholds.
#[must_use]
pub fn assess(
    network: &NetworkDiffResult,
    assets: &AssetDiffResult,
    tokens: &TokenDiffResult,
) -> RiskAssessment {
    assess_with(network, assets, tokens, &RiskThresholds::default())
}

/// Assess risk with explicit thresholds.
#[must_use]
pub fn assess_with(
    network: &NetworkDiffResult,
    assets: &AssetDiffResult,
    tokens: &TokenDiffResult,
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    // Huge manifest totals saturate instead of wrapping.
    let score = (network.change_count() as u64)
        .saturating_add(assets.totals.file_delta())
        .saturating_add(tokens.change_count() as u64);
    RiskAssessment::from_score(score, thresholds)
}
