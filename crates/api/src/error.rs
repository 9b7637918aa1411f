//! Error types for task API operations.
//!
//! This module defines the errors that can occur while talking to the task
//! backend. The two categories callers usually care about are transport
//! failures (the backend could not be reached at all) and HTTP failures (the
//! backend answered with a non-success status).

/// Errors that can occur during task API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend could not be reached (connection refused, DNS failure,
    /// connection reset, ...).
    #[error("could not reach the task backend: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("task backend returned HTTP {status}{}", format_body(.body))]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The requested task does not exist.
    #[error("task not found")]
    NotFound,

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be used.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl Error {
    /// Returns `true` if the backend was not reachable at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the HTTP status associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::NotFound => Some(404),
            _ => None,
        }
    }
}

/// Formats the response body for the HTTP error message.
fn format_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// A specialized Result type for task API operations.
pub type Result<T> = std::result::Result<T, Error>;
