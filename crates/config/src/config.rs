//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskpro application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "TASKPRO_API_URL";

/// Environment variable overriding `logging.file`.
pub const ENV_LOG_FILE: &str = "TASKPRO_LOG_FILE";

/// The main configuration struct for the taskpro application.
///
/// # Examples
///
/// ```
/// use taskpro_config::{ApiConfig, Config};
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "http://localhost:8000/api");
///
/// let config = Config {
///     api: ApiConfig::with_base_url("https://tasks.example.com/api"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log file settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./taskpro.json5` or `./taskpro.json`
    /// 2. User: `~/.config/taskpro/config.json5` or `~/.config/taskpro/config.json`
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskpro_config::Config;
    ///
    /// # fn example() -> taskpro_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Talking to {}", config.api.base_url);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), but reads `path` instead of searching when
    /// one is given.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load). An explicit path that does not exist is
    /// an error rather than a fallback to defaults.
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        let path: Option<PathBuf> = match path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };

        let mut config = match path {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies `TASKPRO_API_URL` and `TASKPRO_LOG_FILE` from the process
    /// environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// Empty values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_with(|key| {
    ///     (key == "TASKPRO_API_URL").then(|| "http://10.0.0.2:8000/api".to_string())
    /// });
    /// assert_eq!(config.api.base_url, "http://10.0.0.2:8000/api");
    /// ```
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(file) = non_empty(ENV_LOG_FILE) {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an `http(s)` URL or the log
    /// level is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_config::{ApiConfig, Config};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.api = ApiConfig::with_base_url("");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
