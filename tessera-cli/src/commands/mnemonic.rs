//! Recovery phrase utilities.

use clap::{Args, Subcommand};
use colored::Colorize;

use super::user_facing;
use crate::config::Config;

/// Mnemonic utility operations.
#[derive(Args)]
pub struct MnemonicCommand {
    #[command(subcommand)]
    command: MnemonicSubcommand,
}

#[derive(Subcommand)]
enum MnemonicSubcommand {
    /// Generate a fresh phrase without deriving any wallet.
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long)]
        words: Option<usize>,
    },

    /// Check that a phrase is valid BIP-39.
    Check {
        /// Phrase to validate.
        phrase: String,
    },

    /// Expand abbreviated words to the full phrase.
    ///
    /// Each token may be any unique prefix of a BIP-39 word.
    Expand {
        /// Phrase with abbreviated words, e.g. "aban aban ... abo".
        phrase: String,
    },
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self, config: &Config) -> anyhow::Result<()> {
        match self.command {
            MnemonicSubcommand::New { words } => {
                let words = words.unwrap_or(config.word_count);
                let phrase = tessera::mnemonic::generate(words).map_err(user_facing)?;
                print_phrase("New", &phrase.to_string());
            }
            MnemonicSubcommand::Check { phrase } => {
                tessera::mnemonic::parse(&phrase).map_err(user_facing)?;
                print_phrase("Valid", phrase.trim());
            }
            MnemonicSubcommand::Expand { phrase } => {
                let expanded = tessera::mnemonic::expand(&phrase).map_err(user_facing)?;
                let valid = tessera::mnemonic::validate(&expanded);
                print_phrase(if valid { "Expanded" } else { "Expanded (invalid)" }, &expanded);
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_phrase(mode: &str, phrase: &str) {
    let words = phrase.split_whitespace().count();

    println!();
    println!("      {}         {}", "Mode".cyan().bold(), mode);
    println!("      {}        {words} words", "Words".cyan().bold());
    println!("      {}     {}", "Mnemonic".cyan().bold(), phrase.green());
    println!();
}
