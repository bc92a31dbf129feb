//! Tessera - deterministic Solana and Ethereum wallets from one recovery
//! phrase.

mod commands;
mod config;
mod logging;
mod qr;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use commands::{Cli, Commands};
use tessera_session::Chain;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.global.resolve()?;
    logging::init(config.log.format, &config.log.level)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Solana(cmd) => cmd.execute(Chain::Solana, &config)?,
        Commands::Ethereum(cmd) => cmd.execute(Chain::Ethereum, &config)?,
        Commands::Mnemonic(cmd) => cmd.execute(&config)?,
        Commands::Shell(cmd) => cmd.execute(&config)?,
    }
    Ok(())
}
