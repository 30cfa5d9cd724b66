//! Per-target size table.
//!
//! Rows are split into binary size (code and read-only data) and static RAM size
//! (mutable and zero-initialized data). The largest row, normally the binary
//! itself, is the 100% reference, and whatever the contributing rows do not
//! cover is reported as a trailing `-- unknown --` row.

use std::io::{self, Write};

use crate::error::{StatsError, StatsResult};
use crate::model::{ObjectStats, TypeClass};

/// Name of the synthetic residual row.
pub const UNKNOWN_ROW_NAME: &str = "-- unknown --";

/// One rendered row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub binary_size: u64,
    pub ram_size: u64,
}

/// Size table for one target, including the residual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub rows: Vec<ReportRow>,
    pub max_binary_size: u64,
    pub max_ram_size: u64,
}

impl SizeReport {
    /// Build the table from the rows computed for a target.
    ///
    /// Fails if a row holds a type code that is neither binary nor RAM, or if the
    /// contributing rows add up to more than the largest row.
    pub fn build(stats: &[ObjectStats]) -> StatsResult<Self> {
        let mut rows = Vec::with_capacity(stats.len() + 1);
        let mut sum_binary = 0u64;
        let mut sum_ram = 0u64;

        for obj in stats {
            let (binary_size, ram_size) = split_sizes(obj)?;
            if obj.contributes_to_total {
                sum_binary += binary_size;
                sum_ram += ram_size;
            }
            rows.push(ReportRow { name: obj.name.clone(), binary_size, ram_size });
        }

        let max_binary_size = rows.iter().map(|r| r.binary_size).max().unwrap_or(0);
        let max_ram_size = rows.iter().map(|r| r.ram_size).max().unwrap_or(0);

        let unknown_binary = max_binary_size.checked_sub(sum_binary);
        let unknown_ram = max_ram_size.checked_sub(sum_ram);
        let (Some(unknown_binary), Some(unknown_ram)) = (unknown_binary, unknown_ram) else {
            return Err(StatsError::NegativeResidual {
                binary_excess: sum_binary.saturating_sub(max_binary_size),
                ram_excess: sum_ram.saturating_sub(max_ram_size),
            });
        };

        rows.push(ReportRow {
            name: UNKNOWN_ROW_NAME.to_string(),
            binary_size: unknown_binary,
            ram_size: unknown_ram,
        });

        Ok(Self { rows, max_binary_size, max_ram_size })
    }

    /// The synthetic residual row (always last).
    pub fn unknown(&self) -> Option<&ReportRow> {
        self.rows.last().filter(|r| r.name == UNKNOWN_ROW_NAME)
    }

    /// Write the fixed-width table followed by a blank line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:<32} {:>17} {:>17}", "Object name", "Binary size", "Static RAM size")?;
        for row in &self.rows {
            writeln!(
                out,
                "{:<32} {:>8} ({:>5.1}%) {:>8} ({:>5.1}%)",
                row.name,
                row.binary_size,
                percentage(row.binary_size, self.max_binary_size),
                row.ram_size,
                percentage(row.ram_size, self.max_ram_size),
            )?;
        }
        writeln!(out)
    }
}

/// Split a row's size map into (binary size, static RAM size).
///
/// Initialized data (`d`) counts towards both.
pub fn split_sizes(stats: &ObjectStats) -> StatsResult<(u64, u64)> {
    let mut binary_size = 0u64;
    let mut ram_size = 0u64;
    for (&code, &size) in &stats.size_map {
        match TypeClass::of(code) {
            TypeClass::Accounted { binary, ram } => {
                if binary {
                    binary_size += size;
                }
                if ram {
                    ram_size += size;
                }
            }
            TypeClass::Ignored | TypeClass::Unknown => {
                return Err(StatsError::UnknownType { object: stats.name.clone(), code });
            }
        }
    }
    Ok((binary_size, ram_size))
}

/// `part` as a percentage of `whole`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}
