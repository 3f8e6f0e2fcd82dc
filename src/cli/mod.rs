//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::Write;

use colored::Colorize;

use calcli::models::Locale;

/// Print the interactive session banner to stderr.
pub fn print_banner(server: &str, locale: Locale) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        calcli::constants::APP_NAME.bold(),
        format!("· {server} · {locale} · type `help` for commands, Enter to calculate").dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
