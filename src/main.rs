//! surface-diff: release-over-release diff and risk engine for mobile app surfaces

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use surface_diff::{
    cli,
    config::{self, AppConfig, ConfigOverrides, DiffConfigBuilder, ParityConfig},
    model::PlatformSelector,
    pipeline::{exit_codes, write_output, OutputTarget},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "surface-diff")]
#[command(version)]
#[command(
    about = "Diff captured mobile app surfaces between releases and classify the risk",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success (whatever the risk level)
    3  Error occurred

EXAMPLES:
    # Diff both platforms of the workspace in the current directory
    surface-diff diff all

    # Diff iOS against an archived release and keep the current capture
    surface-diff diff ios --previous-root archive/1.4.0 --store-baseline

    # Check that iOS and Android expose the same screens
    surface-diff parity --workspace captures/")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Platform to diff: ios, android or all
    platform: PlatformSelector,

    /// Workspace root holding reports/ and design-tokens/
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Root holding previous artifacts as <root>/<platform>/<file>
    #[arg(long)]
    previous_root: Option<PathBuf>,

    /// Root receiving outputs as <dir>/<platform>/ (default: the reports directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Store the current artifacts as the next baseline
    #[arg(long)]
    store_baseline: bool,

    /// Process platforms in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff current artifacts against the previous generation
    Diff(DiffArgs),

    /// Compare iOS and Android design tokens of the current run
    Parity {
        /// Workspace root holding reports/ and design-tokens/
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Write the parity report here instead of the reports directory
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .surface-diff.yaml in the current directory
    Init,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(exit_codes::ERROR);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

/// Load file config, layer CLI overrides on top and validate the result.
fn effective_config(cli: &Cli, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let (app, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config::ensure_valid(&app).context("invalid configuration")?;
    Ok(app)
}

fn dispatch(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let overrides = ConfigOverrides {
                workspace_root: args.workspace.clone(),
                quiet: cli.quiet,
                parallel: args.parallel,
            };
            let app = effective_config(&cli, &overrides)?;

            let config = DiffConfigBuilder::from_app_config(&app)
                .selector(args.platform)
                .previous_root(args.previous_root.clone())
                .output_dir(args.output_dir.clone())
                .store_baseline(args.store_baseline)
                .build()?;

            cli::run_diff(config)
        }

        Commands::Parity { workspace, report } => {
            let overrides = ConfigOverrides {
                workspace_root: workspace.clone(),
                quiet: cli.quiet,
                parallel: false,
            };
            let app = effective_config(&cli, &overrides)?;

            cli::run_parity(ParityConfig::from_app_config(&app, report.clone()))
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "surface-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            write_output(&schema, &OutputTarget::from_option(output.clone()), cli.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (app, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&app).context("failed to serialize config")?;
                write_output(&yaml, &OutputTarget::Stdout, cli.quiet)?;
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 4] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::find_git_root().map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order, after --config):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".surface-diff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
