use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::SymbolSource;
use crate::error::StatsResult;
use crate::model::Symbol;

/// Per-run memo of parsed symbol tables, keyed by file path.
///
/// Targets in one run often link the same objects, so each file is listed at
/// most once. The cache lives as long as the runner that owns it.
pub struct SymbolCache<'a> {
    source: &'a dyn SymbolSource,
    entries: HashMap<PathBuf, Arc<[Symbol]>>,
}

impl<'a> SymbolCache<'a> {
    pub fn new(source: &'a dyn SymbolSource) -> Self {
        Self { source, entries: HashMap::new() }
    }

    /// Return the symbols of `path`, loading them on first use.
    pub fn get(&mut self, path: &Path) -> StatsResult<Arc<[Symbol]>> {
        if let Some(symbols) = self.entries.get(path) {
            return Ok(Arc::clone(symbols));
        }
        let symbols: Arc<[Symbol]> = self.source.load(path)?.into();
        debug!(file = %path.display(), count = symbols.len(), source = self.source.name(), "loaded symbols");
        self.entries.insert(path.to_path_buf(), Arc::clone(&symbols));
        Ok(symbols)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
