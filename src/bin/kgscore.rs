// src/bin/kgscore.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use kgscore_core::cli::{self, Cli};
use kgscore_core::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    config.validate()?;
    cli::dispatch::execute(cli.command, &config)
}
