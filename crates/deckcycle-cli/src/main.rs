use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use deckcycle_cli::config::{Method, OutputFormat, RunConfig};
use deckcycle_cli::logging::init_logging;
use deckcycle_cli::runner;
use deckcycle_core::AppInfo;

/// Counts how many deal-and-pick-up rounds return a deck to its original order.
#[derive(Debug, Parser)]
#[command(
    name = AppInfo::name(),
    author,
    version = AppInfo::version(),
    about = "Rounds needed to bring a dealt deck back to order"
)]
struct Cli {
    /// Number of cards in the deck.
    #[arg(value_name = "CARDS")]
    cards: u32,

    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override how the round count is computed.
    #[arg(long, value_enum)]
    method: Option<Method>,

    /// Give up after this many simulated rounds.
    #[arg(long, value_name = "ROUNDS")]
    max_rounds: Option<u64>,

    /// Print a JSON object instead of the bare count.
    #[arg(long)]
    json: bool,

    /// Exit with status 1 after printing a result, as older callers expect.
    #[arg(long)]
    legacy_exit_status: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };

    if let Some(method) = cli.method {
        config.method = method;
        // A limit inherited from the config file means nothing to the cycle method.
        if method == Method::Cycles && cli.max_rounds.is_none() {
            config.max_rounds = None;
        }
    }

    if let Some(limit) = cli.max_rounds {
        config.max_rounds = Some(limit);
    }

    if cli.json {
        config.output = OutputFormat::Json;
    }

    if cli.legacy_exit_status {
        config.legacy_exit_status = true;
    }

    config
        .validate()
        .context("invalid combination of config file and command-line options")?;

    let _logging_guard = init_logging(&config.logging);
    let summary = runner::run(&config, cli.cards)
        .with_context(|| format!("counting rounds for {} cards", cli.cards))?;

    let rendered = summary
        .render(config.output)
        .context("rendering round count")?;
    println!("{rendered}");

    if config.legacy_exit_status {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
