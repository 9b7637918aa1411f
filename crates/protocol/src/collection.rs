//! The client-side task collection.
//!
//! [`TaskCollection`] is the ordered cache of tasks the controller keeps in
//! memory. It is only ever patched with server responses: a full replace
//! after a load, a prepend after a create, an in-place replace after a
//! toggle or update, and a removal after a delete.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::task::{Task, TaskId};

/// An ordered collection of tasks, most recent first.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use taskpro_protocol::{Task, TaskCollection, TaskId};
///
/// let mut tasks = TaskCollection::new();
/// tasks.prepend(Task::new(TaskId(1), "First", Utc::now()));
/// tasks.prepend(Task::new(TaskId(2), "Second", Utc::now()));
///
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks.iter().next().unwrap().id, TaskId(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Replaces the whole collection, keeping the order given.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Inserts a task at the front of the collection.
    ///
    /// Ids stay unique: if a task with the same id is already cached (a
    /// reload that finished first may have brought it in), it is replaced
    /// in place instead. Returns `true` if the task was inserted.
    pub fn prepend(&mut self, task: Task) -> bool {
        match self.position(task.id) {
            Some(index) => {
                self.tasks[index] = task;
                false
            }
            None => {
                self.tasks.insert(0, task);
                true
            }
        }
    }

    /// Replaces the element with the same id as `task`, in place.
    ///
    /// The relative order of every other element is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TaskNotFound`] if no element has that id,
    /// in which case the collection is left untouched.
    pub fn replace(&mut self, task: Task) -> Result<()> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(ProtocolError::TaskNotFound(task.id))?;
        *slot = task;
        Ok(())
    }

    /// Removes the element with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TaskNotFound`] if no element has that id.
    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        let index = self
            .position(id)
            .ok_or(ProtocolError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the index of the task with the given id, if present.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns the task at the given index, if any.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns an iterator over the tasks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the tasks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl From<Vec<Task>> for TaskCollection {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: u64, title: &str) -> Task {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        Task::new(TaskId(id), title, created)
    }

    fn ids(tasks: &TaskCollection) -> Vec<u64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn replace_all_keeps_server_order() {
        let mut tasks = TaskCollection::from(vec![task(9, "old")]);
        tasks.replace_all(vec![task(3, "c"), task(1, "a"), task(2, "b")]);
        assert_eq!(ids(&tasks), vec![3, 1, 2]);
    }

    #[test]
    fn prepend_puts_task_first() {
        let mut tasks = TaskCollection::from(vec![task(1, "a"), task(2, "b")]);
        assert!(tasks.prepend(task(3, "c")));
        assert_eq!(ids(&tasks), vec![3, 1, 2]);
    }

    #[test]
    fn prepend_known_id_replaces_in_place() {
        let mut tasks = TaskCollection::from(vec![task(3, "c"), task(1, "a")]);
        assert!(!tasks.prepend(task(1, "renamed")));
        assert_eq!(ids(&tasks), vec![3, 1]);
        assert_eq!(tasks.get(TaskId(1)).unwrap().title, "renamed");
    }

    #[test]
    fn replace_swaps_only_the_matching_element() {
        let mut tasks = TaskCollection::from(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let mut updated = task(2, "b");
        updated.completed = true;

        tasks.replace(updated).unwrap();

        assert_eq!(ids(&tasks), vec![1, 2, 3]);
        assert!(tasks.get(TaskId(2)).unwrap().completed);
        assert!(!tasks.get(TaskId(1)).unwrap().completed);
        assert!(!tasks.get(TaskId(3)).unwrap().completed);
    }

    #[test]
    fn replace_unknown_id_is_an_error() {
        let mut tasks = TaskCollection::from(vec![task(1, "a")]);
        let err = tasks.replace(task(5, "e")).unwrap_err();
        assert!(matches!(err, ProtocolError::TaskNotFound(TaskId(5))));
        assert_eq!(ids(&tasks), vec![1]);
    }

    #[test]
    fn remove_takes_out_exactly_one() {
        let mut tasks = TaskCollection::from(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let removed = tasks.remove(TaskId(2)).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(ids(&tasks), vec![1, 3]);

        assert!(tasks.remove(TaskId(2)).is_err());
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn lookups() {
        let tasks = TaskCollection::from(vec![task(4, "d"), task(7, "g")]);
        assert_eq!(tasks.position(TaskId(7)), Some(1));
        assert_eq!(tasks.position(TaskId(8)), None);
        assert_eq!(tasks.get_index(0).map(|t| t.id), Some(TaskId(4)));
        assert!(tasks.get_index(2).is_none());
        assert!(!tasks.is_empty());
        assert!(TaskCollection::new().is_empty());
    }
}
