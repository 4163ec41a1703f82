//! Filesystem helpers.

use crate::error::{Result, SurfaceDiffError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `contents` to `path` through a temporary sibling and a rename.
///
/// Parent directories are created as needed. Readers never observe a
/// partially written file; on failure the temporary file is removed and any
/// existing file at `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SurfaceDiffError::io(parent, e))?;
        }
    }

    let temp_path = temp_sibling(path);
    let result = write_and_sync(&temp_path, contents)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| SurfaceDiffError::io(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| SurfaceDiffError::io(path, e))?;
    file.write_all(contents)
        .map_err(|e| SurfaceDiffError::io(path, e))?;
    file.sync_all().map_err(|e| SurfaceDiffError::io(path, e))
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "output".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.tmp-{}", std::process::id()))
}

/// Insert a marker before the extension: `a/tokens.json` + `baseline`
/// becomes `a/tokens.baseline.json`.
#[must_use]
pub fn sibling_with_marker(path: &Path, marker: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}.{marker}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{marker}"),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("out.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_atomic_into_file_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_atomic(&blocker.join("out.json"), b"x").unwrap_err();
        assert!(matches!(err, SurfaceDiffError::Io { .. }));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn test_sibling_with_marker() {
        assert_eq!(
            sibling_with_marker(Path::new("reports/ios/network-summary.json"), "baseline"),
            PathBuf::from("reports/ios/network-summary.baseline.json")
        );
        assert_eq!(
            sibling_with_marker(Path::new("tokens.json"), "prev"),
            PathBuf::from("tokens.prev.json")
        );
        assert_eq!(
            sibling_with_marker(Path::new("dir/notes"), "prev"),
            PathBuf::from("dir/notes.prev")
        );
    }
}
