//! Backend connection settings.

use serde::{Deserialize, Serialize};

use taskpro_protocol::DEFAULT_BASE_URL;
use taskpro_protocol::endpoint::normalize_base_url;

use crate::error::{ConfigError, Result};

/// Where the task backend lives.
///
/// # Examples
///
/// ```
/// use taskpro_config::ApiConfig;
///
/// let api = ApiConfig::default();
/// assert_eq!(api.base_url, "http://localhost:8000/api");
/// assert!(api.validate().is_ok());
///
/// assert!(ApiConfig::with_base_url("localhost:8000").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration pointing at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Checks that the base URL is an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] otherwise.
    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.base_url).map_err(|reason| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_string(),
        })?;
        Ok(())
    }
}
