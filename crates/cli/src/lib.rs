//! build-stats CLI library.
//!
//! Command implementations live here so integration tests can call them
//! directly; `main.rs` only parses arguments and installs logging.

pub mod commands;

use tracing_subscriber::EnvFilter;

/// Install a stderr log subscriber. `RUST_LOG` wins over the default level.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (e.g. when called twice in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
