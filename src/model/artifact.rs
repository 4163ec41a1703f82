//! Artifact documents produced by the capture tooling.
//!
//! Every field is optional on the wire. Missing and `null` values fall back
//! to the documented defaults so a half-written artifact still diffs cleanly.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Deserialize a value, treating an explicit `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Endpoint inventory
// ============================================================================

/// Network endpoint inventory (`network-summary.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointInventory {
    /// Endpoints keyed by `"<METHOD> <PATH>"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoints: BTreeMap<String, EndpointRecord>,
}

/// Observations for a single endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Hosts the endpoint was reached on
    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: BTreeSet<String>,
    /// Response status code (as captured) to occurrence count
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_codes: BTreeMap<String, u64>,
}

impl EndpointInventory {
    /// Build an endpoint key from a method and path.
    ///
    /// The method is uppercased; the path is kept exactly as captured.
    #[must_use]
    pub fn endpoint_key(method: &str, path: &str) -> String {
        format!("{} {}", method.to_uppercase(), path)
    }
}

// ============================================================================
// Asset manifest
// ============================================================================

/// Asset manifest summary (`assets-summary.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Per-category counts keyed by category name (images, fonts, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: BTreeMap<String, CategoryStats>,
    /// Whole-manifest totals
    #[serde(default, deserialize_with = "null_as_default")]
    pub totals: ManifestTotals,
}

/// File count and byte size of one asset category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bytes: u64,
}

/// Whole-manifest totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTotals {
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bytes: u64,
}

// ============================================================================
// Design tokens
// ============================================================================

/// Design-token summary (`tokens.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInventory {
    /// Screens keyed by screen identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub screens: BTreeMap<String, ScreenTokens>,
}

/// Layout metrics and capture status for one screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenTokens {
    /// Opaque metrics blob, compared with [`ScreenTokens::same_metrics`]
    #[serde(default)]
    pub metrics: serde_json::Value,
    /// Capture status (`passed`, `failed`, ...)
    #[serde(default)]
    pub status: Option<String>,
}

impl ScreenTokens {
    /// Deep equality of the metrics blobs where numbers compare by value,
    /// so `1` and `1.0` are the same measurement.
    #[must_use]
    pub fn same_metrics(&self, other: &Self) -> bool {
        json_values_equal(&self.metrics, &other.metrics)
    }
}

fn json_values_equal(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    use serde_json::Value;

    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_f64() || y.is_f64() => {
            x.as_f64() == y.as_f64()
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| json_values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| json_values_equal(l, r)))
        }
        _ => a == b,
    }
}

// ============================================================================
// Artifact set
// ============================================================================

/// The three artifact documents of one platform at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    pub network: EndpointInventory,
    pub assets: AssetManifest,
    pub tokens: TokenInventory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_key_uppercases_method() {
        assert_eq!(
            EndpointInventory::endpoint_key("get", "/v1/Users"),
            "GET /v1/Users"
        );
    }

    #[test]
    fn test_endpoint_inventory_ignores_extra_fields() {
        let doc = json!({
            "endpoints": {
                "GET /a": {
                    "method": "GET",
                    "path": "/a",
                    "hosts": ["api.example.com", "api.example.com"],
                    "status_codes": {"200": 3},
                    "examples": [{"url": "https://api.example.com/a"}]
                }
            }
        });
        let inventory: EndpointInventory = serde_json::from_value(doc).unwrap();
        let record = &inventory.endpoints["GET /a"];
        assert_eq!(record.hosts.len(), 1);
        assert_eq!(record.status_codes.get("200"), Some(&3));
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let doc = json!({
            "endpoints": {"GET /a": {"hosts": null, "status_codes": null}},
        });
        let inventory: EndpointInventory = serde_json::from_value(doc).unwrap();
        assert_eq!(inventory.endpoints["GET /a"], EndpointRecord::default());

        let manifest: AssetManifest =
            serde_json::from_value(json!({"categories": null, "totals": {"files": null}}))
                .unwrap();
        assert!(manifest.categories.is_empty());
        assert_eq!(manifest.totals, ManifestTotals::default());
    }

    #[test]
    fn test_missing_screen_fields() {
        let tokens: TokenInventory =
            serde_json::from_value(json!({"screens": {"home": {}}})).unwrap();
        let home = &tokens.screens["home"];
        assert!(home.metrics.is_null());
        assert_eq!(home.status, None);
    }

    #[test]
    fn test_metrics_numbers_compare_by_value() {
        let screen = |metrics| ScreenTokens {
            metrics,
            status: None,
        };
        let int = screen(json!({"w": 1, "pad": [8, {"x": 2}]}));
        let float = screen(json!({"w": 1.0, "pad": [8.0, {"x": 2}]}));
        assert!(int.same_metrics(&float));

        let wider = screen(json!({"w": 2, "pad": [8, {"x": 2}]}));
        assert!(!int.same_metrics(&wider));
        assert!(!int.same_metrics(&screen(json!({"w": 1}))));
        assert!(!screen(json!({"w": "1"})).same_metrics(&screen(json!({"w": 1}))));
    }
}
