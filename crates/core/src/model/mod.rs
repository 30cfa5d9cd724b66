//! Core data model: symbols, type-code classification, and per-object size maps.
//!
//! Type codes follow the `nm` conventions:
//! - `t` text (code), `d` initialized global data, `n`/`r` read-only data
//! - `w` weak symbols (typically inline code that was not inlined)
//! - `v` weak objects (vtables / typeinfo)
//! - `b` uninitialized data, `s` small/other data sections
//! - `u` undefined (imported) and `a` absolute symbols, which occupy no space
//!
//! Uppercase codes mark global symbols, lowercase codes local ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Type codes whose symbols end up in the binary file.
pub const BINARY_SECTION_TYPES: &str = "tdnrwv";

/// Type codes whose symbols occupy static RAM.
pub const STATIC_RAM_TYPES: &str = "dbs";

/// Type codes that never contribute to size accounting.
pub const IGNORED_TYPES: &str = "ua";

/// Accumulated size per lowercase type code.
pub type SizeMap = BTreeMap<char, u64>;

/// One record of a symbol listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Absent for undefined symbols.
    pub address: Option<u64>,
    /// Absent for undefined symbols.
    pub size: Option<u64>,
    pub code: char,
    pub name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>, code: char, address: Option<u64>, size: Option<u64>) -> Self {
        Self { address, size, code, name: name.into() }
    }

    /// Size in bytes, treating a missing size as zero.
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// The lowercase type code used as the accounting key.
    pub fn class_code(&self) -> char {
        self.code.to_ascii_lowercase()
    }

    /// Whether the linker may fold this definition with same-named definitions
    /// from other objects, so only the first one seen should be attributed.
    ///
    /// True for local/caseless codes (`code == lowercase(code)`) and for the
    /// weak classes `w`/`v`. Global non-weak codes such as `T` or `D` stay
    /// countable for every object that defines them.
    pub fn is_merge_candidate(&self) -> bool {
        let lower = self.class_code();
        lower == self.code || lower == 'w' || lower == 'v'
    }
}

/// How a type code participates in size accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// Counted towards binary size, static RAM size, or both.
    Accounted { binary: bool, ram: bool },
    /// Known to occupy no space (undefined or absolute symbols).
    Ignored,
    /// Not a code this tool knows about.
    Unknown,
}

impl TypeClass {
    /// Classify a type code, case-insensitively.
    pub fn of(code: char) -> Self {
        let lower = code.to_ascii_lowercase();
        let binary = BINARY_SECTION_TYPES.contains(lower);
        let ram = STATIC_RAM_TYPES.contains(lower);
        if binary || ram {
            TypeClass::Accounted { binary, ram }
        } else if IGNORED_TYPES.contains(lower) {
            TypeClass::Ignored
        } else {
            TypeClass::Unknown
        }
    }
}

/// Size statistics for one report row.
///
/// Serialized as a `[name, contributes_to_total, size_map]` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ObjectStatsTuple", into = "ObjectStatsTuple")]
pub struct ObjectStats {
    pub name: String,
    /// Only real library objects add to the running sum; the target row and
    /// namespace breakouts are already contained in the binary's own totals.
    pub contributes_to_total: bool,
    pub size_map: SizeMap,
}

type ObjectStatsTuple = (String, bool, SizeMap);

impl From<ObjectStatsTuple> for ObjectStats {
    fn from((name, contributes_to_total, size_map): ObjectStatsTuple) -> Self {
        Self { name, contributes_to_total, size_map }
    }
}

impl From<ObjectStats> for ObjectStatsTuple {
    fn from(stats: ObjectStats) -> Self {
        (stats.name, stats.contributes_to_total, stats.size_map)
    }
}

impl ObjectStats {
    pub fn new(name: impl Into<String>, contributes_to_total: bool, size_map: SizeMap) -> Self {
        Self { name: name.into(), contributes_to_total, size_map }
    }
}

/// All rows computed for one build target, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStats {
    pub target: String,
    pub rows: Vec<ObjectStats>,
}
