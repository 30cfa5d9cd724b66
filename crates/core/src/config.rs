use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Namespaces holding per-instruction-set variants of the same code.
pub const DEFAULT_NAMESPACES: [&str; 7] =
    ["N_SCALAR", "N_WASM", "N_NEON", "N_PPC8", "N_SSE4", "N_AVX2", "N_AVX3"];

/// Settings for one size-statistics run.
///
/// Every field is optional in a config file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Build directory the link command's relative paths are resolved against.
    pub build_dir: PathBuf,
    /// Symbol lister executable.
    pub nm: PathBuf,
    /// Build tool used to recover link commands.
    pub ninja: PathBuf,
    /// Namespace tags broken out as separate rows, in report order.
    pub namespaces: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            nm: default_nm_path(),
            ninja: default_ninja_path(),
            namespaces: DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StatsConfig {
    /// Load a config file, choosing YAML or JSON by extension.
    pub fn load(path: &Path) -> StatsResult<Self> {
        let body = std::fs::read_to_string(path)
            .map_err(|source| StatsError::Io { path: path.to_path_buf(), source })?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let config: StatsConfig = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&body)
                .map_err(|e| StatsError::Config(format!("{}: {e}", path.display())))?,
            "json" => serde_json::from_str(&body)
                .map_err(|e| StatsError::Config(format!("{}: {e}", path.display())))?,
            other => {
                return Err(StatsError::Config(format!(
                    "unsupported config extension {other:?} for {}",
                    path.display()
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StatsResult<()> {
        if self.namespaces.iter().any(|ns| ns.is_empty()) {
            return Err(StatsError::Config("namespace tags must not be empty".to_string()));
        }
        Ok(())
    }
}

/// `nm` from the `NM` environment variable, falling back to `nm` on `PATH`.
pub fn default_nm_path() -> PathBuf {
    std::env::var_os("NM").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("nm"))
}

/// `ninja` from the `NINJA` environment variable, falling back to `ninja` on `PATH`.
pub fn default_ninja_path() -> PathBuf {
    std::env::var_os("NINJA").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("ninja"))
}
