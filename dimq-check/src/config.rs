//! Harness configuration file support.
//!
//! The configuration is an optional TOML file:
//!
//! ```toml
//! [run]
//! suites = ["dimension", "quantity"]
//! verbose = false
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key has a default, so an empty file (or no file at all) runs every suite.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter, ParseError};

use crate::checks;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "DIMQ_CHECK_CONFIG";

/// File looked up in the working directory when nothing else names one.
pub const DEFAULT_CONFIG_FILE: &str = "dimq-check.toml";

/// Errors raised while loading the harness configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `[run] suites` names a suite that does not exist.
    #[error("unknown suite `{0}` (available: {available})", available = checks::suite_names().join(", "))]
    UnknownSuite(String),

    /// `[log] level` is not a tracing level.
    #[error("invalid log level `{0}`")]
    InvalidLevel(String),

    /// `RUST_LOG` is not a valid filter directive list.
    #[error("invalid RUST_LOG filter `{0}`: {1}")]
    InvalidFilter(String, #[source] ParseError),
}

/// Full harness configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Which suites run and how much they log.
    #[serde(default)]
    pub run: RunSettings,
    /// Logging setup.
    #[serde(default)]
    pub log: LogSettings,
}

/// `[run]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSettings {
    /// Suites to run, in order. Empty means all of them.
    #[serde(default)]
    pub suites: Vec<String>,
    /// Log every passing check at `info`, not just the failures.
    #[serde(default)]
    pub verbose: bool,
}

/// `[log]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    /// Maximum tracing level (`error`, `warn`, `info`, `debug` or `trace`); `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl FromStr for CheckConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: CheckConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl CheckConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Load the configuration from the first location that names one.
    ///
    /// Searches, in order:
    /// 1. `explicit` (the `--config` argument); this file must exist
    /// 2. the file named by `DIMQ_CHECK_CONFIG`; this file must exist
    /// 3. `dimq-check.toml` in the working directory, if present
    ///
    /// Falls back to the defaults when none applies.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    /// Checks suite names and the log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.run.suites {
            if checks::find_suite(name).is_none() {
                return Err(ConfigError::UnknownSuite(name.clone()));
            }
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log
            .level
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(self.log.level.clone()))
    }

    /// Subscriber filter: `rust_log` (the `RUST_LOG` value) when set and non-blank, else `[log] level`.
    ///
    /// `rust_log` accepts full directive lists such as `info,dimq_check=debug`.
    pub fn env_filter(&self, rust_log: Option<&str>) -> Result<EnvFilter, ConfigError> {
        match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|err| ConfigError::InvalidFilter(directives.to_string(), err)),
            None => Ok(EnvFilter::default().add_directive(LevelFilter::from_level(self.level()?).into())),
        }
    }

    /// Suites to run; all of them when none are listed.
    pub fn selected_suites(&self) -> Vec<&'static checks::Suite> {
        if self.run.suites.is_empty() {
            return checks::SUITES.iter().collect();
        }
        self.run
            .suites
            .iter()
            .filter_map(|name| checks::find_suite(name))
            .collect()
    }
}
