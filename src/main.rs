//! calcli: terminal calculator client.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calcli::app::{Controller, UiEvent};
use calcli::client::{Calculator, HttpCalculator};
use calcli::config::Config;
use calcli::constants;
use calcli::env::Env;
use calcli::logging;
use calcli::models::Field;
use calcli::ui;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, EvalArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&cwd), &env).context("failed to load configuration")?;
    cli.apply_to(&mut config);

    logging::init(&env, cli.verbose, config.ui.color);
    if !config.ui.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        None | Some(Command::Interactive) => run_interactive(&config).await,
        Some(Command::Eval(args)) => run_eval(args, &config).await,
        Some(Command::Config) => run_config(&config),
        Some(Command::Version) => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print the effective configuration as TOML.
fn run_config(config: &Config) -> Result<()> {
    let rendered = config
        .to_toml()
        .context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(())
}

fn build_calculator(config: &Config) -> Result<Arc<dyn Calculator>> {
    let calculator =
        HttpCalculator::new(&config.server).context("failed to create HTTP client")?;
    tracing::info!(endpoint = calculator.endpoint(), "using calculation endpoint");
    Ok(Arc::new(calculator))
}

/// Run the interactive session on stdin/stdout.
async fn run_interactive(config: &Config) -> Result<()> {
    let calculator = build_calculator(config)?;
    let mut controller = Controller::new(calculator, config.ui.locale);

    cli::print_banner(&config.server.url, config.ui.locale);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    ui::run_session(&mut controller, stdin, std::io::stdout(), std::io::stderr()).await;
    Ok(())
}

/// Evaluate one expression and print the outcome.
async fn run_eval(args: EvalArgs, config: &Config) -> Result<()> {
    let calculator = build_calculator(config)?;
    let mut controller = Controller::new(calculator, config.ui.locale);

    controller.handle(UiEvent::Input(Field::First, args.first));
    controller.select_operation(args.operation);
    controller.handle(UiEvent::Input(Field::Second, args.second));
    controller.calculate().await;

    let state = controller.state();
    print!("{}", args.format.render(state));

    if state.display.has_error() {
        bail!("{}", state.display.error);
    }
    Ok(())
}
