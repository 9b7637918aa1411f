//! Backend calls requested by the controller and their results.
//!
//! [`App::update`](crate::App::update) never talks to the network. It
//! returns a [`Command`] describing the single HTTP exchange it wants, the
//! run loop hands it to [`execute`], and the resulting [`Outcome`] is fed
//! back through [`App::apply`](crate::App::apply).

use taskpro_api::{Result, TaskApi};
use taskpro_protocol::{NewTask, Priority, Task, TaskId, TaskPatch};
use tracing::debug;

/// A backend call to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the whole collection.
    Load,
    /// Create a task.
    Create(NewTask),
    /// Flip the completion flag of a task.
    Toggle(TaskId),
    /// Change the priority of a task.
    UpdatePriority {
        /// Task to update.
        id: TaskId,
        /// New priority.
        priority: Priority,
    },
    /// Re-fetch a single task for the detail panel.
    Fetch(TaskId),
    /// Delete a task.
    Delete(TaskId),
}

/// The result of an executed [`Command`].
///
/// Per-task outcomes carry the id they were issued for, so an error can be
/// attributed even though it has no task body.
#[derive(Debug)]
pub enum Outcome {
    /// Result of [`Command::Load`].
    Loaded(Result<Vec<Task>>),
    /// Result of [`Command::Create`].
    Created(Result<Task>),
    /// Result of [`Command::Toggle`].
    Toggled(TaskId, Result<Task>),
    /// Result of [`Command::UpdatePriority`].
    Updated(TaskId, Result<Task>),
    /// Result of [`Command::Fetch`].
    Fetched(TaskId, Result<Task>),
    /// Result of [`Command::Delete`].
    Deleted(TaskId, Result<()>),
}

/// Performs the HTTP exchange described by `command`.
pub async fn execute<A: TaskApi>(api: &A, command: Command) -> Outcome {
    debug!(?command, "executing command");
    match command {
        Command::Load => Outcome::Loaded(api.list_tasks().await),
        Command::Create(payload) => Outcome::Created(api.create_task(&payload).await),
        Command::Toggle(id) => Outcome::Toggled(id, api.toggle_complete(id).await),
        Command::UpdatePriority { id, priority } => {
            let patch = TaskPatch::priority(priority);
            Outcome::Updated(id, api.update_task(id, &patch).await)
        }
        Command::Fetch(id) => Outcome::Fetched(id, api.get_task(id).await),
        Command::Delete(id) => Outcome::Deleted(id, api.delete_task(id).await),
    }
}
