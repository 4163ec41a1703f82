//! Configuration validation for surface-diff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, RiskConfig, WorkspaceConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.workspace.validate());
        errors.extend(self.risk.validate());
        errors
    }
}

impl Validatable for WorkspaceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.root.as_os_str().is_empty() {
            errors.push(ConfigError::new("workspace.root", "Workspace root must not be empty"));
        }
        for (field, value) in [
            ("workspace.reports_dir", &self.reports_dir),
            ("workspace.tokens_dir", &self.tokens_dir),
        ] {
            if value.trim().is_empty() {
                errors.push(ConfigError::new(field, "Directory name must not be empty"));
            } else if value.contains("..") {
                errors.push(ConfigError::new(
                    field,
                    format!("Directory '{value}' must stay inside the workspace root"),
                ));
            }
        }
        errors
    }
}

impl Validatable for RiskConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.review_max == 0 {
            errors.push(ConfigError::new(
                "risk.review_max",
                "Review ceiling must be at least 1",
            ));
        }
        errors
    }
}
