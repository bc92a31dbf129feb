//! CLI configuration with TOML file support.
//!
//! Precedence, lowest first: built-in defaults, the file named by
//! `--config`/`TESSERA_CONFIG`, then command-line flags and their
//! environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera::mnemonic::{DEFAULT_WORD_COUNT, WORD_COUNTS};
use tessera_session::{MaskPolicy, SessionOptions};

use crate::logging::LogFormat;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid word_count {0}: expected one of 12, 15, 18, 21, 24")]
    InvalidWordCount(usize),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Words in generated phrases.
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Fixed mask length for hidden private keys; unset masks to the key's
    /// own length.
    #[serde(default)]
    pub mask_length: Option<usize>,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// `[log]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            mask_length: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no command could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !WORD_COUNTS.contains(&self.word_count) {
            return Err(ConfigError::InvalidWordCount(self.word_count));
        }
        if crate::logging::filter_directive(&self.log.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(self.log.level.clone()));
        }
        Ok(())
    }

    /// Session options derived from this configuration.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            word_count: self.word_count,
            mask: self.mask_length.map_or(MaskPolicy::KeyLength, MaskPolicy::Fixed),
        }
    }
}
