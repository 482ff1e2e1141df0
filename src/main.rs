use anyhow::Context;
use clap::Parser;
use shot_organizer::{organize, OrganizeOptions, OsFilesystem};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Shot Organizer - sort shot deliverables into per-shot folders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the unsorted shot files (defaults to the current directory)
    #[arg(short, long, env = "SHOT_ORGANIZER_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving the shot folders and summary (defaults to the input directory)
    #[arg(short, long, env = "SHOT_ORGANIZER_OUTPUT")]
    output: Option<PathBuf>,

    /// Log every decision, not just moves and problems
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let input_dir = match args.input {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let options = OrganizeOptions {
        input_dir,
        output_dir: args.output,
        config: None,
    };

    let report = organize(&OsFilesystem::new(), &options)?;

    if !report.is_clean() {
        warn!(
            "{} entries could not be organized, see messages above",
            report.diagnostics.len()
        );
    }
    info!("Summary written to {}", report.summary_path.display());

    Ok(())
}
