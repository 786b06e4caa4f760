mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::{PeriodsConfig, Settings};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PeriodsConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config);
    logging::init(cli.verbose, settings.log_file.as_deref())?;

    let output = commands::execute(&cli.command, &settings, chrono::Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
