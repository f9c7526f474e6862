//! Logging Infrastructure
//!
//! Structured logging via tracing. Output goes to stderr so it does not
//! interleave with the interactive menu on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
