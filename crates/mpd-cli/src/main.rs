//! # mpd CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to the subcommand handlers. With no subcommand, `mpd` builds.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mpd_cli::build::run_build;
use mpd_cli::check::run_check;
use mpd_pack::{BuildOptions, DEFAULT_CONTENT_ROOT, DEFAULT_OUTPUT};

/// mpd content build
///
/// Validates `.mpd` record files under the content root, fills defaults,
/// orders them newest first, and writes a single items.json collection.
#[derive(Parser, Debug)]
#[command(name = "mpd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory scanned recursively for .mpd record files.
    #[arg(long, global = true, default_value = DEFAULT_CONTENT_ROOT)]
    content_root: PathBuf,

    /// Path of the collection artifact.
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Validate all records and write the collection artifact.
    Build,

    /// Validate all records without writing anything.
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("mpd CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let options = BuildOptions {
        content_root: cli.content_root,
        output: cli.output,
    };

    let result = match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => run_build(&options),
        Commands::Check => run_check(&options.content_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
