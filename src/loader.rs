//! Fail-open artifact loading.
//!
//! A missing artifact means nothing was captured for that generation, which is
//! meaningful input to the differencer (everything becomes "added"). A
//! malformed artifact is logged and treated the same way. Loading never
//! returns an error.

use serde::de::DeserializeOwned;
use std::path::Path;

/// How an artifact document was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and parsed into the expected shape
    Loaded,
    /// No file at the path (or no path resolved at all)
    Missing,
    /// The file could not be read or did not parse; carries the reason
    Malformed(String),
}

/// A loaded artifact together with its load status.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub document: T,
    pub status: LoadStatus,
}

impl<T: Default> Loaded<T> {
    fn empty(status: LoadStatus) -> Self {
        Self {
            document: T::default(),
            status,
        }
    }
}

impl<T> Loaded<T> {
    #[must_use]
    pub fn into_document(self) -> T {
        self.document
    }
}

/// Load a JSON artifact, falling back to `T::default()` when the file is
/// absent, unreadable or malformed.
pub fn load_artifact<T>(path: Option<&Path>) -> Loaded<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Loaded::empty(LoadStatus::Missing);
    };

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No artifact at {}", path.display());
            return Loaded::empty(LoadStatus::Missing);
        }
        Err(e) => {
            tracing::warn!("Unable to read artifact {}: {}", path.display(), e);
            return Loaded::empty(LoadStatus::Malformed(e.to_string()));
        }
    };

    match serde_json::from_str::<T>(&content) {
        Ok(document) => Loaded {
            document,
            status: LoadStatus::Loaded,
        },
        Err(e) => {
            tracing::warn!("Unable to parse JSON from {}: {}", path.display(), e);
            Loaded::empty(LoadStatus::Malformed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetManifest, EndpointInventory, TokenInventory};
    use tempfile::TempDir;

    #[test]
    fn test_no_path_is_missing() {
        let loaded: Loaded<EndpointInventory> = load_artifact(None);
        assert_eq!(loaded.status, LoadStatus::Missing);
        assert!(loaded.document.endpoints.is_empty());
    }

    #[test]
    fn test_nonexistent_file_is_missing() {
        let tmp = TempDir::new().unwrap();
        let loaded: Loaded<AssetManifest> =
            load_artifact(Some(&tmp.path().join("assets-summary.json")));
        assert_eq!(loaded.status, LoadStatus::Missing);
    }

    #[test]
    fn test_invalid_json_is_malformed_and_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tokens.json");
        std::fs::write(&path, "{ \"screens\": ").unwrap();

        let loaded: Loaded<TokenInventory> = load_artifact(Some(&path));
        assert!(matches!(loaded.status, LoadStatus::Malformed(_)));
        assert!(loaded.document.screens.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("network-summary.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let loaded: Loaded<EndpointInventory> = load_artifact(Some(&path));
        assert!(matches!(loaded.status, LoadStatus::Malformed(_)));
        assert!(loaded.into_document().endpoints.is_empty());
    }

    #[test]
    fn test_valid_document_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assets-summary.json");
        std::fs::write(
            &path,
            r#"{"categories": {"images": {"count": 4, "bytes": 2048}}, "totals": {"files": 4, "bytes": 2048}}"#,
        )
        .unwrap();

        let loaded: Loaded<AssetManifest> = load_artifact(Some(&path));
        assert_eq!(loaded.status, LoadStatus::Loaded);
        assert_eq!(loaded.document.totals.files, 4);
        assert_eq!(loaded.document.categories["images"].bytes, 2048);
    }
}
