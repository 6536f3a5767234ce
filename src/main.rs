mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    match &cli.command {
        Command::ToOffset(args) => commands::to_offset(args, &settings),
        Command::FromOffset(args) => commands::from_offset(args, &settings),
        Command::Today => commands::today(&settings),
        Command::Interactive => commands::interactive(&settings),
    }
}
