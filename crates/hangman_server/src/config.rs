//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use hangman::Alphabet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the hangman HTTP server.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    host: String,

    /// Port to bind to.
    port: u16,

    /// Word list, one word per line.
    vocabulary_path: PathBuf,

    /// Characters accepted as guesses.
    alphabet: String,

    /// Name of the cookie carrying the player id.
    cookie_name: String,

    /// Sessions idle for longer than this many seconds are dropped.
    session_idle_secs: u64,

    /// How often, in seconds, idle sessions are swept.
    eviction_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            vocabulary_path: PathBuf::from("data/words.txt"),
            alphabet: ('a'..='z').collect(),
            cookie_name: "hangman_player".to_string(),
            session_idle_secs: 60 * 60,
            eviction_interval_secs: 60,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        vocabulary_path: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            debug!(%host, "Overriding host");
            self.host = host;
        }
        if let Some(port) = port {
            debug!(port, "Overriding port");
            self.port = port;
        }
        if let Some(path) = vocabulary_path {
            debug!(path = %path.display(), "Overriding vocabulary path");
            self.vocabulary_path = path;
        }
        self
    }

    /// Returns the guess alphabet.
    pub fn guess_alphabet(&self) -> Alphabet {
        Alphabet::from(self.alphabet.as_str())
    }

    /// Returns the idle timeout.
    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Returns the sweep period.
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.guess_alphabet().is_empty() {
            return Err(ConfigError::new("alphabet must not be empty".to_string()));
        }
        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::new(format!(
                "cookie_name '{}' must be non-empty ASCII alphanumerics, '_' or '-'",
                self.cookie_name
            )));
        }
        if self.eviction_interval_secs == 0 {
            return Err(ConfigError::new(
                "eviction_interval_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
