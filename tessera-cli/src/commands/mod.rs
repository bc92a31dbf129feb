//! CLI command definitions and handlers.

mod chain;
mod mnemonic;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tessera_session::Session;

pub use chain::ChainCommand;
pub use mnemonic::MnemonicCommand;
pub use shell::{Shell, ShellCommand};

use crate::config::{Config, ConfigError};
use crate::logging::LogFormat;

/// Tessera - deterministic Solana and Ethereum wallets from one phrase.
#[derive(Parser)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command. Each one overrides the config file.
#[derive(Args)]
pub struct GlobalArgs {
    /// Path to a TOML configuration file.
    #[arg(long, global = true, env = "TESSERA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "warn,tessera_session=debug".
    #[arg(long, global = true, env = "TESSERA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum, env = "TESSERA_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Show hidden private keys as this many `*` instead of the key's length.
    #[arg(long, global = true, env = "TESSERA_MASK_LENGTH")]
    pub mask_length: Option<usize>,
}

impl GlobalArgs {
    /// Load the config file and apply flag overrides on top.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            config.log.level.clone_from(level);
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }
        if self.mask_length.is_some() {
            config.mask_length = self.mask_length;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Solana wallet operations.
    #[command(name = "sol", alias = "solana")]
    Solana(ChainCommand),

    /// Ethereum wallet operations.
    #[command(name = "eth", alias = "ethereum")]
    Ethereum(ChainCommand),

    /// Recovery phrase utilities.
    #[command(name = "mnemonic", alias = "m")]
    Mnemonic(MnemonicCommand),

    /// Interactive wallet session.
    Shell(ShellCommand),
}

/// Message shown to the user for a library error.
///
/// Internal failures are logged and replaced with a generic message so no
/// derivation detail reaches the terminal.
pub fn describe(err: &tessera::Error) -> String {
    if err.is_user_error() {
        err.to_string()
    } else {
        tracing::error!(error = %err, "wallet derivation failed");
        "failed to generate wallet".to_string()
    }
}

/// [`describe`] as an [`anyhow::Error`].
pub fn user_facing(err: tessera::Error) -> anyhow::Error {
    anyhow::anyhow!(describe(&err))
}

/// Print the session header: chain, passphrase state and, when
/// `show_phrase` is set, the phrase.
#[rustfmt::skip]
pub fn write_header(out: &mut impl Write, session: &Session, show_phrase: bool) -> io::Result<()> {
    writeln!(out)?;
    if let Some(chain) = session.active_chain() {
        writeln!(out, "      {}        {}", "Chain".cyan().bold(), chain.name())?;
    }
    if let Some(phrase) = session.mnemonic().filter(|_| show_phrase) {
        writeln!(out, "      {}     {}", "Mnemonic".cyan().bold(), phrase)?;
    }
    if session.has_passphrase() {
        writeln!(out, "      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed())?;
    }
    Ok(())
}

/// Print one wallet with 1-based numbering, optionally followed by a QR code
/// of its public key.
#[rustfmt::skip]
pub fn write_wallet(out: &mut impl Write, session: &Session, index: usize, show_qr: bool) -> anyhow::Result<()> {
    let entry = session
        .wallets()
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("no wallet #{}", index + 1))?;
    let private_key = session.display_private_key(index).map_err(user_facing)?;
    let record = &entry.record;

    writeln!(out)?;
    writeln!(out, "      {}       {}", "Wallet".cyan().bold(), format!("#{}", index + 1).dimmed())?;
    writeln!(out, "      {}         {}", "Path".cyan().bold(), record.path())?;
    writeln!(out, "      {}   {}", "Public Key".cyan().bold(), record.public_key().green())?;
    writeln!(out, "      {}  {}", "Private Key".cyan().bold(), private_key)?;
    if entry.phrase_visible {
        writeln!(out, "      {}     {}", "Mnemonic".cyan().bold(), record.mnemonic())?;
    }
    if show_qr {
        writeln!(out)?;
        write!(out, "{}", crate::qr::render(record.public_key(), "      ")?)?;
    }
    Ok(())
}
