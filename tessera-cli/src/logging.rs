//! Structured logging for the CLI.
//!
//! Logs go to stderr so wallet output on stdout stays clean. `RUST_LOG`
//! takes precedence over the configured level.

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Coloured, human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Parse a filter directive such as `"info"` or `"warn,tessera_session=debug"`.
pub fn filter_directive(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Build the filter, preferring `RUST_LOG` over `level`.
pub fn filter(level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => filter_directive(level).with_context(|| format!("invalid log level `{level}`")),
    }
}

/// Install the global subscriber.
pub fn init(format: LogFormat, level: &str) -> anyhow::Result<()> {
    let filter = filter(level)?;

    let result = match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.context("logging already initialised")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        assert!(filter_directive("warn").is_ok());
        assert!(filter_directive("info,tessera_session=debug").is_ok());
        assert!(filter_directive("tessera=notalevel").is_err());
    }
}
