//! Size attribution.
//!
//! Given the final binary's symbol table and the symbol tables of the objects
//! linked into it, work out how many bytes of each object survived section
//! garbage collection. Only names the binary still defines are attributed, and
//! definitions the linker folds together are attributed to the first object
//! that provides them.

mod namespaces;

use std::collections::HashSet;

use tracing::warn;

use crate::model::{SizeMap, Symbol, TypeClass};

pub use namespaces::{mangled_tag, split_namespaces, NAMESPACE_ROW_PREFIX};

/// Names defined by the final binary with a non-zero size and an accounted type.
///
/// Symbols of ignored types (undefined, absolute) are skipped silently; any other
/// unrecognized type is reported as a warning and left out of the set.
pub fn used_symbols(binary: &[Symbol]) -> HashSet<String> {
    let mut used = HashSet::new();
    for sym in binary {
        match TypeClass::of(sym.code) {
            TypeClass::Accounted { .. } => {
                if sym.size_or_zero() != 0 {
                    used.insert(sym.name.clone());
                }
            }
            TypeClass::Ignored => {}
            TypeClass::Unknown => warn!(code = %sym.code, name = %sym.name, "Unknown symbol type"),
        }
    }
    used
}

/// Sum symbol sizes per lowercase type code.
///
/// With `filter == None` every sized symbol counts; this is how the binary's own
/// row is computed. With a filter, only symbols whose name is in it count, and
/// merge candidates (see [`Symbol::is_merge_candidate`]) are removed from the
/// filter once counted so later objects defining the same name add nothing.
/// Thread the same filter through every object of a target, in link order.
pub fn retained_size(symbols: &[Symbol], mut filter: Option<&mut HashSet<String>>) -> SizeMap {
    let mut sizes = SizeMap::new();
    for sym in symbols {
        let size = sym.size_or_zero();
        if size == 0 {
            continue;
        }
        if let Some(filter) = filter.as_deref_mut() {
            if !filter.contains(&sym.name) {
                continue;
            }
            if sym.is_merge_candidate() {
                filter.remove(&sym.name);
            }
        }
        *sizes.entry(sym.class_code()).or_insert(0) += size;
    }
    sizes
}
