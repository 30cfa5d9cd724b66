use crate::model::{ObjectStats, SizeMap, Symbol};

/// Prefix marking namespace rows as children of the binary row.
pub const NAMESPACE_ROW_PREFIX: &str = "\\--> ";

/// Length-prefixed form a named scope takes inside a mangled symbol name.
pub fn mangled_tag(tag: &str) -> String {
    format!("{}{}", tag.len(), tag)
}

/// Break out the binary's symbols that live in each namespace tag.
///
/// Tags no symbol mentions produce no row. The rows never contribute to the
/// running total: their bytes are already part of the binary row.
pub fn split_namespaces(binary: &[Symbol], tags: &[String]) -> Vec<ObjectStats> {
    let mut rows = Vec::new();
    for tag in tags {
        let mangled = mangled_tag(tag);
        let mut sizes = SizeMap::new();
        for sym in binary.iter().filter(|s| s.name.contains(&mangled)) {
            let size = sym.size_or_zero();
            if size == 0 {
                continue;
            }
            *sizes.entry(sym.class_code()).or_insert(0) += size;
        }
        if sizes.is_empty() {
            continue;
        }
        rows.push(ObjectStats::new(format!("{NAMESPACE_ROW_PREFIX}{tag}"), false, sizes));
    }
    rows
}
