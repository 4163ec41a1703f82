//! Diff computation stage.
//!
//! Runs the surface diff engine over both generations and classifies the
//! result.

use crate::diff::{SurfaceDiff, SurfaceDiffEngine};
use crate::model::ArtifactSet;
use crate::risk::{assess_with, RiskAssessment, RiskThresholds};

/// Diff two generations and assess the risk of the change.
#[must_use]
pub fn compute_diff(
    engine: &SurfaceDiffEngine,
    current: &ArtifactSet,
    previous: &ArtifactSet,
    thresholds: &RiskThresholds,
) -> (SurfaceDiff, RiskAssessment) {
    let diff = engine.diff(current, previous);
    let risk = assess_with(&diff.network, &diff.assets, &diff.tokens, thresholds);
    (diff, risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EndpointInventory, EndpointRecord};
    use crate::risk::RiskLevel;

    #[test]
    fn test_added_endpoint_scores_one() {
        let mut current = ArtifactSet::default();
        current.network.endpoints.insert(
            EndpointInventory::endpoint_key("GET", "/a"),
            EndpointRecord::default(),
        );

        let (diff, risk) = compute_diff(
            &SurfaceDiffEngine::new(),
            &current,
            &ArtifactSet::default(),
            &RiskThresholds::default(),
        );
        assert_eq!(diff.network.added[0].endpoint, "GET /a");
        assert_eq!(risk.score, 1);
        assert_eq!(risk.level, RiskLevel::Medium);
    }
}
