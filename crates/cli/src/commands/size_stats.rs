use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use build_stats_core::build::NinjaQuery;
use build_stats_core::report::SizeReport;
use build_stats_core::services::size_stats::{save_stats, SizeStatsRunner};
use build_stats_core::symbols::NmSymbolSource;
use tracing::debug;

use crate::commands::resolve_config;

/// Inputs for a size-statistics run, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct SizeStatsOptions {
    pub targets: Vec<String>,
    pub build_dir: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub nm: Option<PathBuf>,
    pub ninja: Option<PathBuf>,
}

/// Print one size table per target to stdout.
pub fn size_stats_command(opts: &SizeStatsOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    size_stats_to_writer(opts, &mut out)
}

/// Same as [`size_stats_command`] but writing the tables to `out`.
pub fn size_stats_to_writer<W: Write>(opts: &SizeStatsOptions, out: &mut W) -> Result<()> {
    let config = resolve_config(
        opts.config.as_deref(),
        opts.build_dir.clone(),
        opts.nm.clone(),
        opts.ninja.clone(),
    )?;
    debug!(
        build_dir = %config.build_dir.display(),
        nm = %config.nm.display(),
        ninja = %config.ninja.display(),
        "resolved configuration"
    );

    let query = NinjaQuery::new(&config.ninja, &config.build_dir);
    let source = NmSymbolSource::new(&config.nm);
    let mut runner = SizeStatsRunner::new(&query, &source, config.namespaces.clone());

    let mut all_stats = Vec::with_capacity(opts.targets.len());
    for target in &opts.targets {
        let stats = runner
            .analyze_target(target)
            .with_context(|| format!("Failed to compute size stats for target {target}"))?;
        let report = SizeReport::build(&stats.rows)
            .with_context(|| format!("Failed to build size report for target {target}"))?;
        report.render(out).context("Failed to write size report")?;
        all_stats.push(stats);
    }

    if let Some(path) = &opts.save {
        save_stats(path, &all_stats)
            .with_context(|| format!("Failed to save stats to {}", path.display()))?;
    }

    Ok(())
}
