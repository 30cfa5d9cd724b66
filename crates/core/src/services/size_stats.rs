use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::analysis::{retained_size, split_namespaces, used_symbols};
use crate::build::BuildQuery;
use crate::error::{StatsError, StatsResult};
use crate::model::{ObjectStats, TargetStats};
use crate::symbols::{SymbolCache, SymbolSource};

/// Drives link-command discovery, symbol loading, and attribution per target.
///
/// Symbol tables are cached for the lifetime of the runner, so objects shared
/// between targets are listed once.
pub struct SizeStatsRunner<'a> {
    query: &'a dyn BuildQuery,
    cache: SymbolCache<'a>,
    namespaces: Vec<String>,
}

impl<'a> SizeStatsRunner<'a> {
    pub fn new(
        query: &'a dyn BuildQuery,
        source: &'a dyn SymbolSource,
        namespaces: Vec<String>,
    ) -> Self {
        Self { query, cache: SymbolCache::new(source), namespaces }
    }

    /// Compute the rows for one target: the binary itself, any namespace
    /// breakouts, then every linked object in command-line order.
    pub fn analyze_target(&mut self, target: &str) -> StatsResult<TargetStats> {
        let link = self.query.link_command(target)?;
        let build_dir = self.query.build_dir().to_path_buf();

        let objects = link.objects(&build_dir);
        let mut object_symbols = Vec::with_capacity(objects.len());
        for obj in &objects {
            object_symbols.push((obj.display_name(), self.cache.get(&obj.path)?));
        }

        let binary_path = build_dir.join(link.output()?);
        let binary_symbols = self.cache.get(&binary_path)?;
        debug!(
            target_name = target,
            binary = %binary_path.display(),
            objects = objects.len(),
            "analyzing target"
        );

        let mut used = used_symbols(&binary_symbols);
        let mut rows = vec![ObjectStats::new(target, false, retained_size(&binary_symbols, None))];
        rows.extend(split_namespaces(&binary_symbols, &self.namespaces));

        // Order matters: merged definitions go to the first object that provides them.
        for (name, symbols) in object_symbols {
            let sizes = retained_size(&symbols, Some(&mut used));
            rows.push(ObjectStats::new(name, true, sizes));
        }

        Ok(TargetStats { target: target.to_string(), rows })
    }

    /// Number of distinct files listed so far.
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

/// Write per-target rows as a JSON list of lists of `[name, contributes, sizes]`.
///
/// The residual row is computed at render time and is not part of the output.
pub fn save_stats(path: &Path, stats: &[TargetStats]) -> StatsResult<()> {
    let rows: Vec<&Vec<ObjectStats>> = stats.iter().map(|t| &t.rows).collect();
    let file =
        File::create(path).map_err(|source| StatsError::Io { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &rows)?;
    writer.flush().map_err(|source| StatsError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// Read back a file written by [`save_stats`].
pub fn load_stats(path: &Path) -> StatsResult<Vec<Vec<ObjectStats>>> {
    let file =
        File::open(path).map_err(|source| StatsError::Io { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
