use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{BuildQuery, LinkCommand};
use crate::error::{decode_stdout, StatsError, StatsResult};

/// Build query backed by `ninja -t commands`.
#[derive(Debug, Clone)]
pub struct NinjaQuery {
    ninja: PathBuf,
    build_dir: PathBuf,
}

impl NinjaQuery {
    pub fn new(ninja: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self { ninja: ninja.into(), build_dir: build_dir.into() }
    }
}

impl BuildQuery for NinjaQuery {
    fn link_command(&self, target: &str) -> StatsResult<LinkCommand> {
        debug!(
            ninja = %self.ninja.display(),
            build_dir = %self.build_dir.display(),
            target_name = target,
            "querying link command"
        );
        let output = Command::new(&self.ninja)
            .arg("-C")
            .arg(&self.build_dir)
            .args(["-t", "commands", target])
            .output()
            .map_err(|source| StatsError::Spawn { tool: self.ninja.display().to_string(), source })?;
        if !output.status.success() {
            return Err(StatsError::Subprocess {
                tool: self.ninja.display().to_string(),
                status: output.status,
            });
        }
        let stdout = decode_stdout(&self.ninja, output.stdout)?;
        LinkCommand::from_commands_output(target, &stdout)
    }

    fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}
