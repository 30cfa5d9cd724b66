use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

/// Error type for symbol loading, attribution and reporting.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A symbol listing line did not have between 2 and 4 fields.
    #[error("Malformed symbol line (expected 2..=4 fields): {line:?}")]
    Format { line: String },

    /// The address or size column of a symbol line was not valid hex.
    #[error("Invalid hexadecimal {field} in symbol line: {line:?}")]
    InvalidNumber { field: &'static str, line: String },

    /// A size-contributing symbol carried a type code that is neither binary nor RAM.
    #[error("Unknown symbol type {code:?} in {object}")]
    UnknownType { object: String, code: char },

    /// Attributed sizes exceed the binary's own size, meaning something was counted twice.
    #[error(
        "Attributed size exceeds the binary size (binary excess {binary_excess}, ram excess {ram_excess})"
    )]
    NegativeResidual { binary_excess: u64, ram_excess: u64 },

    /// An external tool could not be started.
    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// An external tool exited unsuccessfully.
    #[error("{tool} exited with {status}")]
    Subprocess { tool: String, status: ExitStatus },

    /// An external tool printed output that is not valid UTF-8.
    #[error("{tool} produced invalid UTF-8 output: {source}")]
    Decode {
        tool: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The build system returned no command for the target.
    #[error("No link command found for target {target}")]
    MissingLinkCommand { target: String },

    /// The link command has no `-o <output>` argument.
    #[error("Link command for target {target} has no -o output")]
    MissingOutput { target: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience result type for core operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Decode a tool's stdout, failing on invalid UTF-8 instead of replacing it.
///
/// Symbol names are merge keys, so a lossy decode would silently change them.
pub fn decode_stdout(tool: &Path, stdout: Vec<u8>) -> StatsResult<String> {
    String::from_utf8(stdout)
        .map_err(|source| StatsError::Decode { tool: tool.display().to_string(), source })
}
