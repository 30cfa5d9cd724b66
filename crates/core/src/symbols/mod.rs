//! Symbol table loading.
//!
//! Symbols come from an external lister (`nm --format=posix` by default) behind
//! the [`SymbolSource`] trait, so tests and alternative tools can feed records
//! without spawning processes. [`SymbolCache`] memoizes listings per path for
//! the lifetime of one run.

mod cache;
mod nm;

use std::path::Path;

use crate::error::{StatsError, StatsResult};
use crate::model::Symbol;

pub use cache::SymbolCache;
pub use nm::NmSymbolSource;

/// Produces the symbol table of an object, archive, or linked binary.
pub trait SymbolSource {
    fn load(&self, path: &Path) -> StatsResult<Vec<Symbol>>;
    fn name(&self) -> &str;
}

/// Parse POSIX-format symbol listing output.
///
/// Each line is `name type [address [size]]` with hexadecimal address/size.
/// Lines ending in `:` name the archive member being listed and are skipped,
/// as are blank lines.
pub fn parse_nm_output(output: &str) -> StatsResult<Vec<Symbol>> {
    let mut symbols = Vec::new();
    for line in output.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.ends_with(':') {
            continue;
        }
        symbols.push(parse_symbol_line(line)?);
    }
    Ok(symbols)
}

fn parse_symbol_line(line: &str) -> StatsResult<Symbol> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&fields.len()) {
        return Err(StatsError::Format { line: line.to_string() });
    }

    let mut code_chars = fields[1].chars();
    let code = match (code_chars.next(), code_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(StatsError::Format { line: line.to_string() }),
    };

    let address = fields.get(2).map(|f| parse_hex(f, "address", line)).transpose()?;
    let size = fields.get(3).map(|f| parse_hex(f, "size", line)).transpose()?;

    Ok(Symbol { address, size, code, name: fields[0].to_string() })
}

fn parse_hex(field: &str, what: &'static str, line: &str) -> StatsResult<u64> {
    u64::from_str_radix(field, 16)
        .map_err(|_| StatsError::InvalidNumber { field: what, line: line.to_string() })
}
