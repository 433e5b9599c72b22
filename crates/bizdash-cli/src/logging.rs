//! Diagnostic logging to stderr.
//!
//! User-facing output goes to stdout through the renderers; `tracing`
//! events from bizdash-core and the handlers go to stderr so they never
//! mix with JSON/CSV output.

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bizdash={level},bizdash_core={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
