//! Configuration types for surface-diff operations.
//!
//! Provides structured configuration for the diff and parity commands.

use crate::model::PlatformSelector;
use crate::risk::RiskThresholds;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace layout (where artifacts and reports live)
    pub workspace: WorkspaceConfig,
    /// Risk classification
    pub risk: RiskConfig,
    /// Output formatting
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Values given on the command line.
///
/// `None` and `false` mean "not given" and leave the file value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--workspace`
    pub workspace_root: Option<PathBuf>,
    /// `--quiet`
    pub quiet: bool,
    /// `--parallel`
    pub parallel: bool,
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the workspace root.
    pub fn workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.workspace.root = root.into();
        self
    }

    /// Set the highest score still classified as `review`.
    pub const fn review_max(mut self, review_max: u64) -> Self {
        self.config.risk.review_max = review_max;
        self
    }

    /// Enable or disable pretty-printed JSON.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Process platforms in parallel.
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.behavior.parallel = parallel;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff runs
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Platforms to process
    pub selector: PlatformSelector,
    /// Optional path overrides
    pub paths: DiffPaths,
    /// Workspace layout
    pub workspace: WorkspaceConfig,
    /// Risk classification
    pub risk: RiskConfig,
    /// Output formatting
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Persist current artifacts as the next baseline
    pub store_baseline: bool,
}

/// Path overrides for a diff run
#[derive(Debug, Clone, Default)]
pub struct DiffPaths {
    /// Root holding previous artifacts as `<root>/<platform>/<file>`
    pub previous_root: Option<PathBuf>,
    /// Root receiving outputs as `<root>/<platform>/`
    pub output_dir: Option<PathBuf>,
}

/// Configuration for parity checks
#[derive(Debug, Clone)]
pub struct ParityConfig {
    /// Workspace layout
    pub workspace: WorkspaceConfig,
    /// Explicit report path (defaults to `<reports>/cross-platform-parity.md`)
    pub report: Option<PathBuf>,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl ParityConfig {
    #[must_use]
    pub fn from_app_config(app: &AppConfig, report: Option<PathBuf>) -> Self {
        Self {
            workspace: app.workspace.clone(),
            report,
            behavior: app.behavior.clone(),
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Workspace layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Workspace root directory
    pub root: PathBuf,
    /// Directory under the root holding per-platform reports and summaries
    pub reports_dir: String,
    /// Directory under the root holding per-platform design tokens
    pub tokens_dir: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            reports_dir: "reports".to_string(),
            tokens_dir: "design-tokens".to_string(),
        }
    }
}

/// Risk classification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RiskConfig {
    /// Highest score still classified as `medium`/`review`
    pub review_max: u64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            review_max: RiskThresholds::default().review_max,
        }
    }
}

impl RiskConfig {
    #[must_use]
    pub const fn thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            review_max: self.review_max,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Process platforms on a thread pool
    pub parallel: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    selector: Option<PlatformSelector>,
    paths: DiffPaths,
    workspace: WorkspaceConfig,
    risk: RiskConfig,
    output: OutputConfig,
    behavior: BehaviorConfig,
    store_baseline: bool,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every section from an application config.
    #[must_use]
    pub fn from_app_config(app: &AppConfig) -> Self {
        Self {
            workspace: app.workspace.clone(),
            risk: app.risk.clone(),
            output: app.output.clone(),
            behavior: app.behavior.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn selector(mut self, selector: PlatformSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    #[must_use]
    pub fn previous_root(mut self, root: Option<PathBuf>) -> Self {
        self.paths.previous_root = root;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.paths.output_dir = dir;
        self
    }

    #[must_use]
    pub fn workspace_root(mut self, root: PathBuf) -> Self {
        self.workspace.root = root;
        self
    }

    #[must_use]
    pub const fn store_baseline(mut self, store: bool) -> Self {
        self.store_baseline = store;
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.behavior.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> crate::Result<DiffConfig> {
        let selector = self
            .selector
            .ok_or_else(|| crate::SurfaceDiffError::config("platform selector is required"))?;

        Ok(DiffConfig {
            selector,
            paths: self.paths,
            workspace: self.workspace,
            risk: self.risk,
            output: self.output,
            behavior: self.behavior,
            store_baseline: self.store_baseline,
        })
    }
}
