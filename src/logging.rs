//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with results on stdout. The filter
//! comes from `CALCLI_LOG`, then `RUST_LOG`, then the `-v` count.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Filter directive to use for the given environment and verbosity.
pub fn filter_directive(env: &Env, verbosity: u8) -> String {
    if let Some(directive) = env.first_of(&[ENV_LOG, "RUST_LOG"]) {
        return directive;
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
    .to_string()
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(env: &Env, verbosity: u8, color: bool) {
    let directive = filter_directive(env, verbosity);
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false),
        )
        .with(env_filter)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(filter = %directive, "logging initialized");
    }
}
