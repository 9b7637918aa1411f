//! Error types for the taskpro-protocol crate.
//!
//! This module defines the errors that can occur when validating or
//! manipulating protocol types on the client side.

use thiserror::Error;

use crate::task::TaskId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A task title was empty or whitespace-only.
    #[error("invalid task title: title cannot be empty")]
    EmptyTitle,

    /// A task with the given ID is not in the collection.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
