//! Task-related types.
//!
//! This module defines the task representation exchanged with the backend,
//! along with the payloads used to create and partially update tasks.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Assigned by the backend at creation time and never changed afterwards.
/// The client treats it as opaque: it is only compared and echoed back in
/// request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The priority of a task.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::Priority;
///
/// assert_eq!(Priority::default(), Priority::Medium);
/// assert_eq!(Priority::Low.next(), Priority::Medium);
/// assert_eq!(Priority::High.next(), Priority::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default priority.
    #[default]
    Medium,
    /// Needs to be done first.
    High,
}

impl Priority {
    /// Returns all priorities in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Returns the wire name of the priority (`"low"`, `"medium"`, `"high"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns a human-readable display name for the priority.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Returns the next priority, wrapping from `High` back to `Low`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Returns the previous priority, wrapping from `Low` to `High`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as represented by the backend.
///
/// The client never constructs these on its own outside of tests: every
/// `Task` held by the application is a copy of a server response.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::{Priority, Task};
///
/// let json = r#"{
///     "id": 1,
///     "title": "Buy milk",
///     "description": "",
///     "completed": false,
///     "priority": "low",
///     "created_at": "2025-01-15T10:30:00Z"
/// }"#;
/// let task: Task = serde_json::from_str(json).unwrap();
/// assert_eq!(task.priority, Priority::Low);
/// assert_eq!(task.description(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Backend-assigned identifier.
    pub id: TaskId,
    /// Short summary of the task. Never blank.
    pub title: String,
    /// Free-form details. Empty means "no description".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// How urgent the task is.
    #[serde(default)]
    pub priority: Priority,
    /// When the backend created this task.
    pub created_at: DateTime<Utc>,
    /// When the backend last modified this task, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a pending, medium-priority task with the given id and title.
    ///
    /// Mostly useful for tests and the mock backend.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            completed: false,
            priority: Priority::default(),
            created_at,
            updated_at: Some(created_at),
        }
    }

    /// Returns the description, or `None` if it is blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.description.as_str())
        }
    }

    /// Returns `true` if the task is still waiting to be completed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.completed
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Payload for creating a task.
///
/// The backend assigns the id, the creation timestamp and sets
/// `completed = false`. Optional fields are omitted from the JSON body when
/// unset so the backend applies its own defaults.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::{NewTask, Priority};
///
/// let payload = NewTask::new("Buy milk").with_priority(Priority::Low);
/// assert!(payload.validate().is_ok());
/// assert!(NewTask::new("   ").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// The task title. Must not be blank.
    pub title: String,
    /// Optional free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional priority; the backend defaults to medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl NewTask {
    /// Creates a payload with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Checks that the payload is acceptable to send.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyTitle`] if the title is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ProtocolError::EmptyTitle);
        }
        Ok(())
    }
}

/// Partial update payload.
///
/// Only the fields that are `Some` are serialized, matching `PATCH`
/// semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// New completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that only changes the priority.
    #[must_use]
    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    /// Returns `true` if the patch would not change anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }
}
