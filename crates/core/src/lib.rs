//! build-stats-core
//!
//! Estimates how much of each statically linked object actually ends up in a
//! final binary once the linker has garbage-collected unused sections.
//!
//! Rather than charging a library for its full size, the symbols the binary
//! still defines are matched against each object's symbol table, merged
//! definitions are attributed once, and the result is reported as binary size
//! (code and read-only data) and static RAM size per object.
//!
//! All substantive logic lives here so it can be tested without the external
//! tools; the CLI only wires configuration and output.

pub mod analysis;
pub mod build;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod services;
pub mod symbols;

pub use error::{StatsError, StatsResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
