//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `urlsift` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The `--list-filters` listing
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use urlsift::custom::default_patterns_dir;
use urlsift::initialization::init_logger_with;
use urlsift::{print_available_filters, run_filter, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    if opt.list_filters {
        colored::control::set_override(opt.color);
        let dir = opt.patterns_dir.clone().unwrap_or_else(default_patterns_dir);
        print_available_filters(&dir, opt.quiet).context("Failed to print filters")?;
        return Ok(());
    }

    let config = Config::from(opt);

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format, config.color)
        .context("Failed to initialize logger")?;

    if let Err(e) = run_filter(config).await {
        eprintln!("urlsift error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
