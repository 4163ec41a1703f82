//! Cross-platform parity between iOS and Android design tokens.
//!
//! Compares the *current* token inventories of both platforms captured in the
//! same run. Status is ignored; only screen presence and layout metrics count.

use crate::diff::partition_keys;
use crate::model::TokenInventory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of parity gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityKind {
    /// Screen captured on iOS only
    MissingOnAndroid,
    /// Screen captured on Android only
    MissingOnIos,
    /// Screen on both platforms with differing metrics
    MetricsMismatch,
}

impl ParityKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingOnAndroid => "missing_on_android",
            Self::MissingOnIos => "missing_on_ios",
            Self::MetricsMismatch => "metrics_mismatch",
        }
    }

    /// Fixed human-readable detail for this kind
    #[must_use]
    pub const fn detail(&self) -> &'static str {
        match self {
            Self::MissingOnAndroid => "Screen captured on iOS but not Android",
            Self::MissingOnIos => "Screen captured on Android but not iOS",
            Self::MetricsMismatch => "Layout metrics differ between platforms",
        }
    }
}

impl fmt::Display for ParityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One difference between the two platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityFinding {
    pub kind: ParityKind,
    pub item: String,
    pub detail: String,
}

impl ParityFinding {
    fn new(kind: ParityKind, item: &str) -> Self {
        Self {
            kind,
            item: item.to_string(),
            detail: kind.detail().to_string(),
        }
    }
}

/// Compare iOS and Android token inventories.
///
/// Findings are ordered iOS-only screens, Android-only screens, then
/// metric mismatches, each group sorted by screen identifier.
#[must_use]
pub fn compare(ios: &TokenInventory, android: &TokenInventory) -> Vec<ParityFinding> {
    let partition = partition_keys(&ios.screens, &android.screens);

    let missing_on_android = partition
        .added
        .iter()
        .map(|screen| ParityFinding::new(ParityKind::MissingOnAndroid, screen));
    let missing_on_ios = partition
        .removed
        .iter()
        .map(|screen| ParityFinding::new(ParityKind::MissingOnIos, screen));
    let mismatched = partition
        .shared
        .iter()
        .filter(|screen| !ios.screens[**screen].same_metrics(&android.screens[**screen]))
        .map(|screen| ParityFinding::new(ParityKind::MetricsMismatch, screen));

    missing_on_android
        .chain(missing_on_ios)
        .chain(mismatched)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(value: serde_json::Value) -> TokenInventory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_finding_order() {
        let ios = tokens(json!({"screens": {
            "home": {"metrics": {"w": 1}},
            "profile": {},
            "about": {}
        }}));
        let android = tokens(json!({"screens": {
            "home": {"metrics": {"w": 2}},
            "settings": {}
        }}));

        let findings = compare(&ios, &android);
        let summary: Vec<_> = findings
            .iter()
            .map(|f| (f.kind, f.item.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ParityKind::MissingOnAndroid, "about"),
                (ParityKind::MissingOnAndroid, "profile"),
                (ParityKind::MissingOnIos, "settings"),
                (ParityKind::MetricsMismatch, "home"),
            ]
        );
        assert_eq!(findings[2].detail, "Screen captured on Android but not iOS");
    }

    #[test]
    fn test_status_is_ignored() {
        let ios = tokens(json!({"screens": {"home": {"metrics": {"w": 1}, "status": "passed"}}}));
        let android = tokens(json!({"screens": {"home": {"metrics": {"w": 1}, "status": "failed"}}}));
        assert!(compare(&ios, &android).is_empty());
    }

    #[test]
    fn test_float_and_integer_metrics_match() {
        let ios = tokens(json!({"screens": {"home": {"metrics": {"w": 375.0}}}}));
        let android = tokens(json!({"screens": {"home": {"metrics": {"w": 375}}}}));
        assert!(compare(&ios, &android).is_empty());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let value = serde_json::to_value(ParityKind::MissingOnIos).unwrap();
        assert_eq!(value, "missing_on_ios");
    }
}
