//! Contactbook CLI Binary
//!
//! Command-line interface for the in-memory contact book.

use anyhow::Context;
use clap::Parser;
use contactbook::config::ConfigLoader;
use contactbook::logging::init_logging;
use contactbook::tooling::cli::{Cli, CliContext, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    let level = if cli.verbose {
        Some("debug".to_string())
    } else {
        cli.log_level.clone()
    };
    let logging = config.logging.clone().with_overrides(
        level,
        cli.log_format.clone(),
        cli.log_output.clone(),
        cli.log_file.clone(),
    );
    init_logging(Some(&logging)).context("Failed to initialize logging")?;

    let mut context = CliContext::from_config(config, cli.no_seed);
    let command = cli.command.unwrap_or(Commands::Shell);
    let output = context.execute(&command)?;
    println!("{}", output.trim_end());
    Ok(())
}
