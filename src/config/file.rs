//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".surface-diff.yaml",
    ".surface-diff.yml",
    "surface-diff.yaml",
    "surface-diff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/surface-diff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Per-user configuration directory for surface-diff.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("surface-diff"))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from the current directory.
#[must_use]
pub fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line overrides over this config.
    ///
    /// Only values actually given on the command line override, so an
    /// explicit `--workspace .` still beats a file's workspace root.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(root) = &overrides.workspace_root {
            self.workspace.root.clone_from(root);
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
        if overrides.parallel {
            self.behavior.parallel = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# surface-diff Configuration File
# ===============================
#
# Place it at:
#   - .surface-diff.yaml in your workspace root
#   - ~/.config/surface-diff/surface-diff.yaml for global config
#
# CLI arguments always override file settings.

# Workspace layout
workspace:
  # Root directory holding reports/ and design-tokens/
  root: .
  # Per-platform network/asset summaries and diff outputs
  reports_dir: reports
  # Per-platform tokens.json
  tokens_dir: design-tokens

# Risk classification
risk:
  # Scores from 1 up to this value are 'review'; above it, 'attention'
  review_max: 5

# Output configuration
output:
  # Pretty-print diff-summary.json
  pretty: true

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Process platforms in parallel
  parallel: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".surface-diff.yaml");
        std::fs::write(&config_path, "risk:\n  review_max: 3\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_prefers_hidden_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("surface-diff.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".surface-diff.yml"), "").unwrap();

        let found = find_config_in_dir(tmp.path()).unwrap();
        assert!(found.ends_with(".surface-diff.yml"));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
workspace:
  root: /srv/captures
risk:
  review_max: 8
behavior:
  parallel: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.workspace.root, PathBuf::from("/srv/captures"));
        assert_eq!(config.workspace.reports_dir, "reports");
        assert_eq!(config.risk.review_max, 8);
        assert!(config.behavior.parallel);
    }

    #[test]
    fn test_load_empty_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();
        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "risk: [unterminated").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().workspace_root("/file/root").review_max(2).build();
        base.merge(&ConfigOverrides {
            parallel: true,
            ..ConfigOverrides::default()
        });

        assert_eq!(base.workspace.root, PathBuf::from("/file/root"));
        assert_eq!(base.risk.review_max, 2);
        assert!(base.behavior.parallel);
        assert!(!base.behavior.quiet);
        assert!(base.output.pretty);
    }

    #[test]
    fn test_explicit_default_workspace_overrides_file() {
        let mut base = AppConfig::builder().workspace_root("/file/root").build();
        base.merge(&ConfigOverrides {
            workspace_root: Some(PathBuf::from(".")),
            ..ConfigOverrides::default()
        });
        assert_eq!(base.workspace.root, PathBuf::from("."));
    }

    #[test]
    fn test_from_file_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "workspace:\n  root: /srv/captures\n").unwrap();

        let overrides = ConfigOverrides {
            quiet: true,
            ..ConfigOverrides::default()
        };
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.workspace.root, PathBuf::from("/srv/captures"));
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_generated_configs_parse() {
        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "output:\n  pretty: false\n").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
