use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use build_stats_core::config::StatsConfig;

/// Load the config file (if any) and apply command-line overrides on top.
pub fn resolve_config(
    config_path: Option<&Path>,
    build_dir: Option<PathBuf>,
    nm: Option<PathBuf>,
    ninja: Option<PathBuf>,
) -> Result<StatsConfig> {
    let mut config = match config_path {
        Some(path) => StatsConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StatsConfig::default(),
    };
    if let Some(dir) = build_dir {
        config.build_dir = dir;
    }
    if let Some(nm) = nm {
        config.nm = nm;
    }
    if let Some(ninja) = ninja {
        config.ninja = ninja;
    }
    Ok(config)
}
