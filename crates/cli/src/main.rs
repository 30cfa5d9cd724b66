use std::path::PathBuf;

use anyhow::Result;
use build_stats::commands::{size_stats_command, SizeStatsOptions};
use build_stats::init_tracing;
use clap::Parser;

/// Gather statistics about the size contribution of statically linked objects.
///
/// Objects compiled with per-function sections and linked with section garbage
/// collection only contribute the symbols that survive into the final binary.
/// This tool matches the binary's symbols against each linked object and
/// reports the realistic binary and static RAM size of every object.
#[derive(Parser, Debug)]
#[command(name = "build-stats", version, about = "Per-object size statistics for linked targets")]
struct Cli {
    /// Target(s) to analyze.
    #[arg(required = true)]
    target: Vec<String>,

    /// Path to the build directory [default: build].
    #[arg(long)]
    build_dir: Option<PathBuf>,

    /// Path to save the stats as a JSON file.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Optional JSON or YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Symbol lister to run (defaults to $NM or `nm`).
    #[arg(long)]
    nm: Option<PathBuf>,

    /// Build tool to query for link commands (defaults to $NINJA or `ninja`).
    #[arg(long)]
    ninja: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    size_stats_command(&SizeStatsOptions {
        targets: cli.target,
        build_dir: cli.build_dir,
        save: cli.save,
        config: cli.config,
        nm: cli.nm,
        ninja: cli.ninja,
    })
}
