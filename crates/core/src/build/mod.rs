//! Recovering link commands from the build system.

mod ninja;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{StatsError, StatsResult};

pub use ninja::NinjaQuery;

/// Answers "which command links this target?".
pub trait BuildQuery {
    fn link_command(&self, target: &str) -> StatsResult<LinkCommand>;
    /// Directory the command's relative paths are resolved against.
    fn build_dir(&self) -> &Path;
}

/// An object or archive named on a link command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedObject {
    /// The argument as written in the command.
    pub entry: String,
    /// The argument resolved against the build directory.
    pub path: PathBuf,
}

impl LinkedObject {
    /// Row label: the file name of the entry.
    pub fn display_name(&self) -> String {
        Path::new(&self.entry)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.entry.clone())
    }
}

/// The argument list of the command that produces a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCommand {
    pub target: String,
    pub args: Vec<String>,
}

impl LinkCommand {
    /// Take the last non-empty line of a command dump as the link command.
    ///
    /// The build tool prints every command needed for the target in order, so
    /// the final one is the link step.
    pub fn from_commands_output(target: &str, output: &str) -> StatsResult<Self> {
        let line = output
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| StatsError::MissingLinkCommand { target: target.to_string() })?;
        Ok(Self {
            target: target.to_string(),
            args: line.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// The path following `-o`.
    pub fn output(&self) -> StatsResult<&str> {
        self.args
            .iter()
            .position(|a| a == "-o")
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
            .ok_or_else(|| StatsError::MissingOutput { target: self.target.clone() })
    }

    /// `.o`/`.a` arguments that exist under `build_dir`, first occurrence only.
    ///
    /// Arguments that do not exist on disk are skipped without error.
    pub fn objects(&self, build_dir: &Path) -> Vec<LinkedObject> {
        let mut seen = HashSet::new();
        let mut objects = Vec::new();
        for entry in &self.args {
            if !(entry.ends_with(".o") || entry.ends_with(".a")) {
                continue;
            }
            let path = build_dir.join(entry);
            if !path.exists() || !seen.insert(entry.as_str()) {
                continue;
            }
            objects.push(LinkedObject { entry: entry.clone(), path });
        }
        objects
    }
}
