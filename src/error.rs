//! Unified error types for surface-diff.
//!
//! Missing or malformed input artifacts are never errors (they load as empty
//! documents). What remains here is the set of failures that must reach the
//! caller: output writes, configuration problems and bad platform selectors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for surface-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SurfaceDiffError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report rendering
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Unknown platform identifier
    #[error("Unknown platform '{0}' (expected ios, android or all)")]
    UnknownPlatform(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Narrative formatting failed: {0}")]
    FormatError(String),
}

/// Convenient Result type for surface-diff operations
pub type Result<T> = std::result::Result<T, SurfaceDiffError>;

impl SurfaceDiffError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SurfaceDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SurfaceDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

impl From<crate::reports::ReportError> for SurfaceDiffError {
    fn from(err: crate::reports::ReportError) -> Self {
        match err {
            crate::reports::ReportError::SerializationError(msg) => {
                Self::report("rendering report", ReportErrorKind::JsonSerializationError(msg))
            }
            crate::reports::ReportError::FormatError(e) => {
                Self::report("rendering report", ReportErrorKind::FormatError(e.to_string()))
            }
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain onto any existing context, so an error that passes
/// through several layers reads `"outer: middle: inner"`.
///
/// ```ignore
/// use surface_diff::error::ErrorContext;
///
/// write_atomic(&path, &json).with_context(|| format!("writing report for {platform}"))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SurfaceDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SurfaceDiffError, new_ctx: &str) -> SurfaceDiffError {
    match err {
        SurfaceDiffError::Io {
            path,
            message,
            source,
        } => SurfaceDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SurfaceDiffError::Report {
            context: existing,
            source,
        } => SurfaceDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SurfaceDiffError::Config(msg) => SurfaceDiffError::Config(chain_context(new_ctx, &msg)),
        SurfaceDiffError::Validation(msg) => {
            SurfaceDiffError::Validation(chain_context(new_ctx, &msg))
        }
        // Platform errors carry no context.
        other @ SurfaceDiffError::UnknownPlatform(_) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
