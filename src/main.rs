mod cli;
mod config;
mod convert;
mod convert_cmd;
mod holidays_cmd;
mod info_cmd;
mod logging;
mod molad_cmd;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Info(args) => info_cmd::run(args, &config),
        Command::Molad(args) => molad_cmd::run(args, &config),
        Command::Holidays(args) => holidays_cmd::run(args, &config),
    }
}
