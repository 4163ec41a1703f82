//! Configuration module for surface-diff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use surface_diff::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .workspace_root("/srv/captures")
//!     .review_max(3)
//!     .build();
//!
//! // Load from file
//! use surface_diff::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.surface-diff.yaml` file in your workspace root or
//! `~/.config/surface-diff/`:
//!
//! ```yaml
//! workspace:
//!   root: .
//! risk:
//!   review_max: 5
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, DiffConfig, DiffConfigBuilder,
    DiffPaths, OutputConfig, ParityConfig, RiskConfig, WorkspaceConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, find_git_root, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.surface-diff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Validate a configuration, folding all field errors into one error.
pub fn ensure_valid(config: &impl Validatable) -> crate::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(crate::SurfaceDiffError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"workspace\""));
        assert!(schema.contains("\"review_max\""));
    }

    #[test]
    fn test_ensure_valid_joins_errors() {
        let config = AppConfig {
            workspace: WorkspaceConfig {
                tokens_dir: String::new(),
                ..WorkspaceConfig::default()
            },
            risk: RiskConfig { review_max: 0 },
            ..AppConfig::default()
        };
        let err = ensure_valid(&config).unwrap_err().to_string();
        assert!(err.contains("workspace.tokens_dir"));
        assert!(err.contains("risk.review_max"));
        assert!(ensure_valid(&AppConfig::default()).is_ok());
    }
}
