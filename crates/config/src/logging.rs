//! Log output settings.
//!
//! The terminal belongs to the TUI, so logs always go to a file. When no
//! file is configured they land in the user cache directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Level used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `logging.level`.
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration.
///
/// # Examples
///
/// ```
/// use taskpro_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert_eq!(logging.level, "info");
/// assert!(logging.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the log file.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file path. Defaults to [`default_log_file`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Checks that the level is one of the known level names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.trim().to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }

    /// Returns the file logs should be written to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoCacheDirectory`] if no file is configured and
    /// the cache directory cannot be determined.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => default_log_file(),
        }
    }
}

/// Returns `<cache dir>/taskpro/taskpro.log`.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be determined.
pub fn default_log_file() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|d| d.join("taskpro").join("taskpro.log"))
        .ok_or(ConfigError::NoCacheDirectory)
}
