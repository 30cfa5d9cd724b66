#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use build_stats_core::build::{BuildQuery, LinkCommand};
use build_stats_core::model::Symbol;
use build_stats_core::symbols::SymbolSource;
use build_stats_core::{StatsError, StatsResult};

/// In-memory symbol lister that records every load.
#[derive(Default)]
pub struct FakeSymbols {
    pub tables: HashMap<PathBuf, Vec<Symbol>>,
    pub loads: RefCell<Vec<PathBuf>>,
}

impl FakeSymbols {
    pub fn with(mut self, path: impl Into<PathBuf>, symbols: Vec<Symbol>) -> Self {
        self.tables.insert(path.into(), symbols);
        self
    }
}

impl SymbolSource for FakeSymbols {
    fn load(&self, path: &Path) -> StatsResult<Vec<Symbol>> {
        self.loads.borrow_mut().push(path.to_path_buf());
        self.tables.get(path).cloned().ok_or_else(|| StatsError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no fake table"),
        })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Build query answering from a fixed map of target -> command line.
pub struct FakeBuild {
    pub build_dir: PathBuf,
    pub commands: HashMap<String, String>,
}

impl FakeBuild {
    pub fn new(build_dir: &Path) -> Self {
        Self { build_dir: build_dir.to_path_buf(), commands: HashMap::new() }
    }

    pub fn with(mut self, target: &str, command: &str) -> Self {
        self.commands.insert(target.to_string(), command.to_string());
        self
    }
}

impl BuildQuery for FakeBuild {
    fn link_command(&self, target: &str) -> StatsResult<LinkCommand> {
        let out = self.commands.get(target).cloned().unwrap_or_default();
        LinkCommand::from_commands_output(target, &out)
    }

    fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

pub fn sym(name: &str, code: char, size: u64) -> Symbol {
    Symbol::new(name, code, Some(0x1000), Some(size))
}

/// Create empty files so link-command entries resolve on disk.
pub fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, b"").unwrap();
    }
}
