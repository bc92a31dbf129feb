//! One-shot wallet commands, shared by every chain.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use tessera_session::{Chain, Session};

use super::{user_facing, write_header, write_wallet};
use crate::config::Config;

/// Wallet operations for one blockchain.
#[derive(Args)]
pub struct ChainCommand {
    #[command(subcommand)]
    command: ChainSubcommand,
}

#[derive(Subcommand)]
enum ChainSubcommand {
    /// Generate a new wallet (with mnemonic).
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long)]
        words: Option<usize>,

        /// BIP39 passphrase (optional extra security).
        #[arg(short, long)]
        passphrase: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Import wallet from mnemonic phrase.
    ///
    /// Words may be abbreviated to any unique prefix, e.g. "aban".
    Import {
        /// BIP39 mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// BIP39 passphrase (if used when creating).
        #[arg(short, long)]
        passphrase: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Number of accounts to derive.
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print private keys instead of masking them.
    #[arg(short, long)]
    reveal: bool,

    /// Display QR code for each public key.
    #[arg(long)]
    qr: bool,
}

impl ChainCommand {
    /// Execute the command for `chain`.
    pub fn execute(self, chain: Chain, config: &Config) -> anyhow::Result<()> {
        let mut options = config.session_options();
        let (input, passphrase, output) = match self.command {
            ChainSubcommand::New {
                words,
                passphrase,
                output,
            } => {
                if let Some(words) = words {
                    options.word_count = words;
                }
                (None, passphrase, output)
            }
            ChainSubcommand::Import {
                mnemonic,
                passphrase,
                output,
            } => {
                let phrase = tessera::mnemonic::expand(&mnemonic).map_err(user_facing)?;
                (Some(phrase), passphrase, output)
            }
        };

        let mut session = Session::new(options);
        session.set_passphrase(passphrase.as_deref());
        session.select_chain(chain).map_err(user_facing)?;
        session
            .generate_wallet(input.as_deref())
            .map_err(user_facing)?;
        for _ in 1..output.count {
            session.add_wallet().map_err(user_facing)?;
        }
        if output.reveal {
            for index in 0..session.wallets().len() {
                session.toggle_private_key(index).map_err(user_facing)?;
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_header(&mut out, &session, true)?;
        for index in 0..session.wallets().len() {
            write_wallet(&mut out, &session, index, output.qr)?;
        }
        writeln!(out)?;

        session.reset();
        Ok(())
    }
}
