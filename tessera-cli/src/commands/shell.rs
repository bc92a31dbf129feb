//! Interactive wallet session.
//!
//! Reads one command per line and keeps the session in memory until the
//! user quits; nothing is written to disk.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::Args;
use colored::Colorize;
use tessera_session::{Chain, ParseChainError, Session};

use super::{describe, write_header, write_wallet};
use crate::config::Config;

const HELP: &str = "\
  chain [sol|eth]     show or select the blockchain
  generate [phrase]   use PHRASE (or a fresh one) and derive the next wallet
  add                 derive the next wallet from the current phrase
  list                show all wallets
  reveal <n>          show or hide the private key of wallet n
  phrase [n]          show or hide the recovery phrase (of wallet n)
  qr <n>              print a QR code of wallet n's public key
  rm <n>              delete wallet n
  clear               delete all wallets and the phrase
  help                show this help
  quit                leave the session";

/// Start an interactive session.
#[derive(Args)]
pub struct ShellCommand {
    /// Blockchain to start with.
    #[arg(short, long)]
    chain: Option<Chain>,

    /// BIP39 passphrase applied to every phrase in the session.
    #[arg(short, long)]
    passphrase: Option<String>,
}

impl ShellCommand {
    /// Run the session on stdin/stdout.
    pub fn execute(self, config: &Config) -> anyhow::Result<()> {
        let mut session = Session::new(config.session_options());
        session.set_passphrase(self.passphrase.as_deref());
        if let Some(chain) = self.chain {
            session.select_chain(chain).map_err(super::user_facing)?;
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(session, stdin.lock(), stdout.lock()).run()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Chain(Option<Chain>),
    Generate(Option<String>),
    Add,
    List,
    Reveal(usize),
    Phrase(Option<usize>),
    Qr(usize),
    Remove(usize),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum ParseCommandError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs a wallet number")]
    MissingNumber(&'static str),
    #[error("`{0}` is not a wallet number")]
    BadNumber(String),
    #[error(transparent)]
    Chain(#[from] ParseChainError),
}

/// Parse a 1-based wallet number into a registry index.
fn wallet_index(command: &'static str, arg: &str) -> Result<usize, ParseCommandError> {
    if arg.is_empty() {
        return Err(ParseCommandError::MissingNumber(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseCommandError::BadNumber(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, arg)| (name, arg.trim()));

        Ok(match name.to_lowercase().as_str() {
            "chain" if arg.is_empty() => Self::Chain(None),
            "chain" => Self::Chain(Some(arg.parse()?)),
            "generate" | "gen" => Self::Generate((!arg.is_empty()).then(|| arg.to_string())),
            "add" => Self::Add,
            "list" | "ls" => Self::List,
            "reveal" => Self::Reveal(wallet_index("reveal", arg)?),
            "phrase" if arg.is_empty() => Self::Phrase(None),
            "phrase" => Self::Phrase(Some(wallet_index("phrase", arg)?)),
            "qr" => Self::Qr(wallet_index("qr", arg)?),
            "rm" | "remove" | "delete" => Self::Remove(wallet_index("rm", arg)?),
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        })
    }
}

/// Line-oriented front end over a [`Session`].
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Wrap a session with an input and an output stream.
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Process commands until `quit` or end of input, then wipe the session.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Tessera interactive session. Type `help` for commands."
        )?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(err) => self.error(&err.to_string())?,
            }
        }

        self.session.reset();
        Ok(())
    }

    /// The session and output stream.
    #[cfg(test)]
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    fn prompt(&mut self) -> io::Result<()> {
        match self.session.active_chain() {
            Some(chain) => write!(self.output, "tessera[{}]> ", chain.id())?,
            None => write!(self.output, "tessera> ")?,
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {message}", "error:".red().bold())
    }

    fn session_error(&mut self, err: &tessera::Error) -> io::Result<()> {
        let message = match err {
            tessera::Error::IndexOutOfBounds { index, len } => {
                format!("no wallet #{} ({len} wallets)", index + 1)
            }
            other => describe(other),
        };
        self.error(&message)
    }

    fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Chain(None) => match self.session.active_chain() {
                Some(chain) => writeln!(self.output, "{chain}")?,
                None => writeln!(self.output, "no blockchain selected")?,
            },
            Command::Chain(Some(chain)) => match self.session.select_chain(chain) {
                Ok(()) => writeln!(self.output, "using {chain}")?,
                Err(err) => self.session_error(&err)?,
            },
            Command::Generate(phrase) => {
                let result = phrase
                    .as_deref()
                    .map(tessera::mnemonic::expand)
                    .transpose()
                    .and_then(|phrase| self.session.generate_wallet(phrase.as_deref()).map(|_| ()));
                self.after_derive(result)?;
            }
            Command::Add => {
                let result = self.session.add_wallet().map(|_| ());
                self.after_derive(result)?;
            }
            Command::List => {
                if self.session.wallets().is_empty() {
                    writeln!(self.output, "no wallets")?;
                } else {
                    let show_phrase = self.session.phrase_visible();
                    write_header(&mut self.output, &self.session, show_phrase)?;
                    for index in 0..self.session.wallets().len() {
                        write_wallet(&mut self.output, &self.session, index, false)?;
                    }
                    writeln!(self.output)?;
                }
            }
            Command::Reveal(index) => match self.session.toggle_private_key(index) {
                Ok(_) => self.show(index, false)?,
                Err(err) => self.session_error(&err)?,
            },
            Command::Phrase(None) => {
                if self.session.toggle_phrase_visible() {
                    match self.session.mnemonic() {
                        Some(phrase) => writeln!(self.output, "{phrase}")?,
                        None => writeln!(self.output, "no recovery phrase yet")?,
                    }
                } else {
                    writeln!(self.output, "recovery phrase hidden")?;
                }
            }
            Command::Phrase(Some(index)) => match self.session.toggle_wallet_phrase(index) {
                Ok(_) => self.show(index, false)?,
                Err(err) => self.session_error(&err)?,
            },
            Command::Qr(index) => self.show(index, true)?,
            Command::Remove(index) => self.remove(index)?,
            Command::Clear => {
                if self.confirm("Delete all wallets and the recovery phrase?")? {
                    self.session.clear();
                    writeln!(self.output, "session cleared")?;
                }
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn after_derive(&mut self, result: tessera::Result<()>) -> anyhow::Result<()> {
        match result {
            Ok(()) => {
                let index = self.session.wallets().len() - 1;
                self.show(index, false)
            }
            Err(err) => Ok(self.session_error(&err)?),
        }
    }

    fn show(&mut self, index: usize, show_qr: bool) -> anyhow::Result<()> {
        if index >= self.session.wallets().len() {
            let err = tessera::Error::IndexOutOfBounds {
                index,
                len: self.session.wallets().len(),
            };
            return Ok(self.session_error(&err)?);
        }
        write_wallet(&mut self.output, &self.session, index, show_qr)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> anyhow::Result<()> {
        let len = self.session.wallets().len();
        if index >= len {
            return Ok(self.session_error(&tessera::Error::IndexOutOfBounds { index, len })?);
        }
        if !self.confirm(&format!("Delete wallet #{}?", index + 1))? {
            return Ok(());
        }
        match self.session.remove_wallet(index) {
            Ok(record) => writeln!(self.output, "deleted wallet #{} ({})", index + 1, record.public_key())?,
            Err(err) => self.session_error(&err)?,
        }
        Ok(())
    }
}
