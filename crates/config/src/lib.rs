//! Configuration management for the taskpro application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`api`]: Backend base URL
//! - [`logging`]: Log level and log file location
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Command-line flags (applied by the binary)
//! 2. Environment variables (`TASKPRO_API_URL`, `TASKPRO_LOG_FILE`)
//! 3. Local config (`./taskpro.json5` or `./taskpro.json`)
//! 4. User config (`~/.config/taskpro/config.json5` or `~/.config/taskpro/config.json`)
//! 5. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   api: { base_url: "http://localhost:8000/api" },
//!   logging: {
//!     level: "debug",
//!     // Defaults to ~/.cache/taskpro/taskpro.log
//!     file: "/tmp/taskpro.log",
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskpro_config::Config;
//!
//! # fn example() -> taskpro_config::Result<()> {
//! let config = Config::load()?;
//! println!("Backend: {}", config.api.base_url);
//! println!("Logging to {}", config.logging.log_file()?.display());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use api::ApiConfig;
pub use taskpro_protocol::DEFAULT_BASE_URL;
pub use config::{Config, ENV_API_URL, ENV_LOG_FILE};
pub use error::{ConfigError, Result};
pub use logging::{DEFAULT_LOG_LEVEL, LoggingConfig, default_log_file};
