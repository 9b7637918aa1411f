//! Test utilities for the TUI crate.
//!
//! This module provides common helpers used across test modules: buffer
//! rendering for assertions and an in-memory [`TaskApi`] fake.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeZone, Utc};
use ratatui::buffer::Buffer;
use taskpro_api::{Error, Result, TaskApi};
use taskpro_protocol::{NewTask, Task, TaskId, TaskPatch};

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Fixed timestamp for reproducible tasks.
pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
}

#[derive(Debug, Default)]
struct FakeBackend {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<String>,
    failing: bool,
}

impl FakeBackend {
    fn fail(&self) -> Result<()> {
        if self.failing {
            Err(Error::Http {
                status: 500,
                body: "internal error".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound)
    }
}

/// An in-memory backend that records every call it receives.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeApi {
    inner: Arc<Mutex<FakeBackend>>,
}

impl FakeApi {
    /// A fake with no tasks.
    pub(crate) fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// A fake seeded with `tasks`; new ids continue after the highest one.
    pub(crate) fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(FakeBackend {
                tasks,
                next_id,
                ..FakeBackend::default()
            })),
        }
    }

    /// Makes every following call fail with HTTP 500.
    pub(crate) fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Returns the calls received so far, e.g. `"toggle 3"`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeBackend> {
        self.inner.lock().unwrap()
    }

    fn record(&self, call: String) -> MutexGuard<'_, FakeBackend> {
        let mut backend = self.lock();
        backend.calls.push(call);
        backend
    }
}

impl TaskApi for FakeApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let backend = self.record("list".to_string());
        backend.fail()?;
        Ok(backend.tasks.clone())
    }

    async fn get_task(&self, id: TaskId) -> Result<Task> {
        let mut backend = self.record(format!("get {id}"));
        backend.fail()?;
        backend.find_mut(id).map(|t| t.clone())
    }

    async fn create_task(&self, payload: &NewTask) -> Result<Task> {
        let mut backend = self.record(format!("create {}", payload.title));
        backend.fail()?;
        let id = TaskId(backend.next_id);
        backend.next_id += 1;
        let mut task = Task::new(id, payload.title.clone(), fixed_time());
        task.description = payload.description.clone().unwrap_or_default();
        task.priority = payload.priority.unwrap_or_default();
        backend.tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task> {
        let mut backend = self.record(format!("update {id}"));
        backend.fail()?;
        let task = backend.find_mut(id)?;
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let mut backend = self.record(format!("delete {id}"));
        backend.fail()?;
        let before = backend.tasks.len();
        backend.tasks.retain(|t| t.id != id);
        if backend.tasks.len() == before {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    async fn toggle_complete(&self, id: TaskId) -> Result<Task> {
        let mut backend = self.record(format!("toggle {id}"));
        backend.fail()?;
        let task = backend.find_mut(id)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    async fn list_completed(&self) -> Result<Vec<Task>> {
        let backend = self.record("list completed".to_string());
        backend.fail()?;
        Ok(backend.tasks.iter().filter(|t| t.completed).cloned().collect())
    }

    async fn list_pending(&self) -> Result<Vec<Task>> {
        let backend = self.record("list pending".to_string());
        backend.fail()?;
        Ok(backend.tasks.iter().filter(|t| !t.completed).cloned().collect())
    }
}
