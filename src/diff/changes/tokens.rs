//! Design-token differencer.

use crate::diff::traits::{partition_keys, ArtifactDiffer};
use crate::diff::{ScreenChange, ScreenTotals, TokenDiffResult};
use crate::model::TokenInventory;

/// Computes screen-level changes between two design-token inventories.
///
/// Metrics are compared by deep JSON equality with numbers compared by value,
/// and status by string. The two outcomes are recorded separately on each
/// changed screen.
pub struct TokenDiff;

impl TokenDiff {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TokenDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactDiffer for TokenDiff {
    type Artifact = TokenInventory;
    type Output = TokenDiffResult;

    fn diff(&self, current: &TokenInventory, previous: &TokenInventory) -> TokenDiffResult {
        let partition = partition_keys(&current.screens, &previous.screens);

        let changed = partition
            .shared
            .iter()
            .filter_map(|key| {
                let before = &previous.screens[*key];
                let after = &current.screens[*key];
                let metrics_changed = !before.same_metrics(after);
                let status_changed = before.status != after.status;
                (metrics_changed || status_changed).then(|| ScreenChange {
                    screen: (*key).to_string(),
                    metrics_changed,
                    status_before: before.status.clone(),
                    status_after: after.status.clone(),
                })
            })
            .collect();

        TokenDiffResult {
            added: partition.added.iter().map(ToString::to_string).collect(),
            removed: partition.removed.iter().map(ToString::to_string).collect(),
            changed,
            totals: ScreenTotals {
                current: current.screens.len(),
                previous: previous.screens.len(),
            },
        }
    }

    fn name(&self) -> &'static str {
        "TokenDiff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(value: serde_json::Value) -> TokenInventory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_metrics_change_with_same_status() {
        let current = tokens(json!({"screens": {"home": {"metrics": {"w": 1}, "status": "passed"}}}));
        let previous = tokens(json!({"screens": {"home": {"metrics": {"w": 2}, "status": "passed"}}}));
        let result = TokenDiff.diff(&current, &previous);

        assert_eq!(result.changed.len(), 1);
        let change = &result.changed[0];
        assert_eq!(change.screen, "home");
        assert!(change.metrics_changed);
        assert_eq!(change.status_before.as_deref(), Some("passed"));
        assert_eq!(change.status_after.as_deref(), Some("passed"));
        assert!(!change.status_changed());
    }

    #[test]
    fn test_status_flip_without_metric_change() {
        let current = tokens(json!({"screens": {"cart": {"metrics": {"h": 4}, "status": "failed"}}}));
        let previous = tokens(json!({"screens": {"cart": {"metrics": {"h": 4}, "status": "passed"}}}));
        let result = TokenDiff.diff(&current, &previous);

        let change = &result.changed[0];
        assert!(!change.metrics_changed);
        assert!(change.status_changed());
        assert_eq!(change.status_after.as_deref(), Some("failed"));
    }

    #[test]
    fn test_nested_metrics_compare_structurally() {
        let current = tokens(json!({"screens": {"s": {"metrics": {"a": {"b": [1, 2]}, "c": 3}}}}));
        let previous = tokens(json!({"screens": {"s": {"metrics": {"c": 3, "a": {"b": [1, 2]}}}}}));
        assert!(TokenDiff.diff(&current, &previous).is_empty());
    }

    #[test]
    fn test_integer_and_float_metrics_are_unchanged() {
        let current = tokens(json!({"screens": {"home": {"metrics": {"w": 1.0, "h": 320}}}}));
        let previous = tokens(json!({"screens": {"home": {"metrics": {"w": 1, "h": 320.0}}}}));
        assert!(TokenDiff.diff(&current, &previous).is_empty());

        let moved = tokens(json!({"screens": {"home": {"metrics": {"w": 1.5, "h": 320}}}}));
        assert_eq!(TokenDiff.diff(&moved, &previous).changed.len(), 1);
    }

    #[test]
    fn test_added_and_removed_are_screen_ids() {
        let current = tokens(json!({"screens": {"home": {}, "settings": {}}}));
        let previous = tokens(json!({"screens": {"home": {}, "onboarding": {}}}));
        let result = TokenDiff.diff(&current, &previous);

        assert_eq!(result.added, vec!["settings".to_string()]);
        assert_eq!(result.removed, vec!["onboarding".to_string()]);
        assert_eq!(result.totals.current, 2);
        assert_eq!(result.totals.previous, 2);
    }
}
