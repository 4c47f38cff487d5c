//! Diagnostic logging to stderr.
//!
//! The filter comes from `HOLDEM_LOG`, then `RUST_LOG`, and defaults to
//! `warn` so normal output stays clean.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "HOLDEM_LOG";

/// Builds the filter from the environment.
pub fn env_filter() -> EnvFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
