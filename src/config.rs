//! Game configuration
//!
//! Defaults can come from a TOML file; command-line flags override them.
//!
//! ```toml
//! max_attempts = 6
//! wordlist = "all"
//! seed = 42
//! log_filter = "wordle_game=debug"
//! ```

use crate::game::MAX_ATTEMPTS;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Guesses allowed per game
    pub max_attempts: usize,
    /// "all", "answers", or a path to a word list file
    pub wordlist: String,
    /// Fixed seed for target selection; random when unset
    pub seed: Option<u64>,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            wordlist: "all".to_string(),
            seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[display("max_attempts must be at least 1")]
    InvalidMaxAttempts,
}

impl Config {
    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or holds
    /// invalid values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(?config, "Config loaded");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    ///
    /// # Errors
    /// See [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides, then validate
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidMaxAttempts` if the result allows no guesses.
    pub fn with_overrides(
        mut self,
        max_attempts: Option<usize>,
        wordlist: Option<String>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(max_attempts) = max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(wordlist) = wordlist {
            self.wordlist = wordlist;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        Ok(())
    }
}
