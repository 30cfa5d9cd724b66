use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{parse_nm_output, SymbolSource};
use crate::error::{decode_stdout, StatsError, StatsResult};
use crate::model::Symbol;

/// Symbol source that shells out to `nm --format=posix`.
#[derive(Debug, Clone)]
pub struct NmSymbolSource {
    nm: PathBuf,
}

impl NmSymbolSource {
    pub fn new(nm: impl Into<PathBuf>) -> Self {
        Self { nm: nm.into() }
    }

    pub fn tool_path(&self) -> &Path {
        &self.nm
    }
}

impl Default for NmSymbolSource {
    fn default() -> Self {
        Self::new(crate::config::default_nm_path())
    }
}

impl SymbolSource for NmSymbolSource {
    fn load(&self, path: &Path) -> StatsResult<Vec<Symbol>> {
        debug!(nm = %self.nm.display(), file = %path.display(), "listing symbols");
        let output = Command::new(&self.nm)
            .arg("--format=posix")
            .arg(path)
            .output()
            .map_err(|source| StatsError::Spawn { tool: self.nm.display().to_string(), source })?;
        if !output.status.success() {
            return Err(StatsError::Subprocess {
                tool: self.nm.display().to_string(),
                status: output.status,
            });
        }
        let stdout = decode_stdout(&self.nm, output.stdout)?;
        parse_nm_output(&stdout)
    }

    fn name(&self) -> &str {
        "nm"
    }
}
