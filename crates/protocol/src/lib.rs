//! Shared protocol types for the taskpro application.
//!
//! This crate defines the core types used across all taskpro components,
//! including tasks and their payloads, the client-side task collection,
//! derived views, messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, priorities, the `Task` struct and payloads
//! - [`collection`]: The ordered client-side `TaskCollection`
//! - [`view`]: Filters, stats and the `DerivedView` computation
//! - [`message`]: TUI event messages
//! - [`sample`]: Sample tasks for demos and tests
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Patching a collection and deriving its view:
//!
//! ```
//! use chrono::Utc;
//! use taskpro_protocol::{DerivedView, Task, TaskCollection, TaskFilter, TaskId};
//!
//! let mut tasks = TaskCollection::new();
//! tasks.prepend(Task::new(TaskId(1), "Buy milk", Utc::now()));
//!
//! let mut done = tasks.get(TaskId(1)).cloned().unwrap();
//! done.completed = true;
//! tasks.replace(done).unwrap();
//!
//! let view = DerivedView::compute(tasks.as_slice(), TaskFilter::Pending);
//! assert!(view.is_empty());
//! assert_eq!(view.stats.completed, 1);
//! ```

pub mod collection;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod sample;
pub mod task;
pub mod view;

// Re-export primary types at crate root for convenience
pub use collection::TaskCollection;
pub use endpoint::DEFAULT_BASE_URL;
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use task::{NewTask, Priority, Task, TaskId, TaskPatch};
pub use view::{DerivedView, TaskFilter, TaskStats, filter_tasks};
