//! The backend abstraction used by the controller.
//!
//! [`TaskApi`] is the seam between the TUI and the network. The controller
//! only ever talks to a `TaskApi`, so tests can drive it with an in-memory
//! fake instead of a running backend.

use std::future::Future;

use taskpro_protocol::{NewTask, Task, TaskId, TaskPatch};

use crate::client::TaskClient;
use crate::error::Result;

/// The six task operations plus the two server-side filtered listings.
pub trait TaskApi {
    /// Fetches every task.
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;

    /// Fetches one task by id.
    fn get_task(&self, id: TaskId) -> impl Future<Output = Result<Task>> + Send;

    /// Creates a task from the given payload.
    fn create_task(&self, payload: &NewTask) -> impl Future<Output = Result<Task>> + Send;

    /// Partially updates a task.
    fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> impl Future<Output = Result<Task>> + Send;

    /// Deletes a task.
    fn delete_task(&self, id: TaskId) -> impl Future<Output = Result<()>> + Send;

    /// Flips the completion flag of a task server-side.
    fn toggle_complete(&self, id: TaskId) -> impl Future<Output = Result<Task>> + Send;

    /// Fetches the completed tasks.
    fn list_completed(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;

    /// Fetches the pending tasks.
    fn list_pending(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;
}

impl TaskApi for TaskClient {
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>>> + Send {
        Self::list_tasks(self)
    }

    fn get_task(&self, id: TaskId) -> impl Future<Output = Result<Task>> + Send {
        Self::get_task(self, id)
    }

    fn create_task(&self, payload: &NewTask) -> impl Future<Output = Result<Task>> + Send {
        Self::create_task(self, payload)
    }

    fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> impl Future<Output = Result<Task>> + Send {
        Self::update_task(self, id, patch)
    }

    fn delete_task(&self, id: TaskId) -> impl Future<Output = Result<()>> + Send {
        Self::delete_task(self, id)
    }

    fn toggle_complete(&self, id: TaskId) -> impl Future<Output = Result<Task>> + Send {
        Self::toggle_complete(self, id)
    }

    fn list_completed(&self) -> impl Future<Output = Result<Vec<Task>>> + Send {
        Self::list_completed(self)
    }

    fn list_pending(&self) -> impl Future<Output = Result<Vec<Task>>> + Send {
        Self::list_pending(self)
    }
}
