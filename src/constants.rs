//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and endpoint details so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calcli";

/// Package version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.calcli.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calcli.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "calcli";

/// Server the client talks to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Path of the calculation endpoint, appended to the server URL.
pub const CALCULATE_PATH: &str = "/calculate";

/// Initial content of the result area before any calculation.
pub const INITIAL_RESULT: &str = "0";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_SERVER_URL: &str = "CALCLI_SERVER_URL";
pub const ENV_TIMEOUT: &str = "CALCLI_TIMEOUT";
pub const ENV_LOCALE: &str = "CALCLI_LOCALE";
pub const ENV_COLOR: &str = "CALCLI_COLOR";
pub const ENV_LOG: &str = "CALCLI_LOG";
