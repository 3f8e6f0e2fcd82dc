//! Clap argument types.

use clap::{Parser, ValueEnum};

use calcli::config::Config;
use calcli::models::{Locale, Operation};

/// Terminal calculator client for a remote `/calculate` endpoint.
#[derive(Parser, Debug)]
#[command(name = "calcli", version = calcli::constants::VERSION, about)]
pub struct Cli {
    /// Base URL of the calculation server.
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Language for messages.
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Start an interactive session (default).
    Interactive,

    /// Evaluate a single expression and exit.
    Eval(EvalArgs),

    /// Print the effective configuration.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// Operation: + - * / (or add, sub, mul, div).
    #[arg(value_parser = parse_operation, allow_hyphen_values = true)]
    pub operation: Operation,

    /// Second operand.
    #[arg(allow_hyphen_values = true)]
    pub second: String,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a finished calculation using the renderer for this format.
    pub fn render(&self, state: &calcli::app::AppState) -> String {
        use calcli::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => calcli::output::terminal::TerminalRenderer.render(state),
            OutputFormat::Json => calcli::output::json::JsonRenderer.render(state),
        }
    }
}

impl Cli {
    /// Apply CLI flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref url) = self.server {
            config.server.url = url.clone();
        }
        match self.timeout {
            Some(0) => config.server.timeout_secs = None,
            Some(secs) => config.server.timeout_secs = Some(secs),
            None => {}
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if self.no_color {
            config.ui.color = false;
        }
    }
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse()
}
