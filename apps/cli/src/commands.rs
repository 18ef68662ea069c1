//! CLI definition, tracing setup, and the patch run.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use dashpatch_core::{ApplyOptions, SUCCESS_MESSAGE, apply_to_file, student_dashboard_patch};
use dashpatch_shared::{AppConfig, load_config, load_config_from};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// dashpatch: apply the student dashboard migration in place.
#[derive(Parser)]
#[command(
    name = "dashpatch",
    version,
    about = "Patch the student dashboard page in place.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// File to patch (defaults to the configured target).
    pub path: Option<PathBuf>,

    /// Config file to use instead of ~/.dashpatch/dashpatch.toml.
    #[arg(long, env = "DASHPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run every step but leave the file untouched.
    #[arg(long)]
    pub dry_run: bool,

    /// Do not rewrite the file when no step changed anything.
    #[arg(long)]
    pub skip_unchanged: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout only
/// carries the result line.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "dashpatch=info",
        1 => "dashpatch=debug",
        _ => "dashpatch=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Resolve the target and options, apply the dashboard patch, print the result line.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let (path, opts) = resolve(&cli, &config);
    debug!(path = %path.display(), ?opts, "resolved target");

    let report = apply_to_file(&path, &student_dashboard_patch()?, opts)?;

    let unmatched = report.unmatched_steps();
    if !unmatched.is_empty() {
        warn!(steps = ?unmatched, "some steps matched nothing; the page may have drifted");
    }

    // Reported regardless of how many steps matched.
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

/// Merge CLI flags over config values.
fn resolve(cli: &Cli, config: &AppConfig) -> (PathBuf, ApplyOptions) {
    let path = cli
        .path
        .clone()
        .unwrap_or_else(|| config.target.path.clone());

    let opts = ApplyOptions {
        dry_run: cli.dry_run,
        skip_unchanged: cli.skip_unchanged || config.target.skip_unchanged,
    };

    (path, opts)
}
