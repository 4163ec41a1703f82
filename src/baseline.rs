//! Baseline snapshots.
//!
//! A baseline is a byte-for-byte copy of the current artifacts, written next
//! to each one as `<stem>.baseline.json`. The next run diffs against it. Each
//! snapshot replaces the previous baseline wholesale.

use crate::error::{Result, SurfaceDiffError};
use crate::utils::{sibling_with_marker, write_atomic};
use std::path::{Path, PathBuf};

/// Marker inserted before the extension of baseline copies.
pub const BASELINE_MARKER: &str = "baseline";

/// Location of the baseline copy for a current artifact.
#[must_use]
pub fn baseline_path(current: &Path) -> PathBuf {
    sibling_with_marker(current, BASELINE_MARKER)
}

/// Copy each existing artifact to its baseline location.
///
/// Missing sources are skipped. Returns the baseline files written, in input
/// order.
pub fn snapshot<P: AsRef<Path>>(current_paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(current_paths.len());

    for source in current_paths {
        let source = source.as_ref();
        let contents = match std::fs::read(source) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Skipping baseline for missing {}", source.display());
                continue;
            }
            Err(e) => return Err(SurfaceDiffError::io(source, e)),
        };

        let target = baseline_path(source);
        write_atomic(&target, &contents)?;
        tracing::debug!("Stored baseline {}", target.display());
        written.push(target);
    }

    Ok(written)
}
