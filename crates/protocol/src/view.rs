//! Derived views over a task collection.
//!
//! Everything in this module is a pure function of the collection and the
//! active [`TaskFilter`]. Nothing is cached or maintained incrementally: the
//! controller recomputes a [`DerivedView`] in full after every change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Client-side selector restricting which tasks are displayed.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::TaskFilter;
///
/// assert_eq!(TaskFilter::default(), TaskFilter::All);
/// assert_eq!(TaskFilter::All.next(), TaskFilter::Pending);
/// assert_eq!(TaskFilter::All.previous(), TaskFilter::Completed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks that are not completed.
    Pending,
    /// Tasks that are completed.
    Completed,
}

impl TaskFilter {
    /// Returns all filters in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::All, Self::Pending, Self::Completed]
    }

    /// Returns the tab label for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Returns the position of the filter in tab order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Pending => 1,
            Self::Completed => 2,
        }
    }

    /// Returns the next filter in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Returns the previous filter in tab order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Pending => Self::All,
            Self::Completed => Self::Pending,
        }
    }

    /// Returns `true` if the task should be shown under this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.is_pending(),
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts derived from the task collection.
///
/// `pending` is always `total - completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks not yet completed.
    pub pending: usize,
}

impl TaskStats {
    /// Computes the stats of a sequence of tasks.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_protocol::TaskStats;
    ///
    /// let stats = TaskStats::from_tasks(&[]);
    /// assert_eq!(stats, TaskStats { total: 0, completed: 0, pending: 0 });
    /// ```
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (total, completed) = tasks
            .into_iter()
            .fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.completed))
            });
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Returns the ordered subsequence of `tasks` matching `filter`.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// The visible slice of the collection plus its stats.
///
/// `visible` holds indices into the collection the view was computed from,
/// in collection order. A view is only meaningful for the exact collection
/// it was computed against; recompute it after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Indices of the tasks matching the filter.
    pub visible: Vec<usize>,
    /// Stats over the whole collection (not just the visible part).
    pub stats: TaskStats,
}

impl DerivedView {
    /// Derives the view of `tasks` under `filter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use taskpro_protocol::{DerivedView, Task, TaskFilter, TaskId};
    ///
    /// let mut done = Task::new(TaskId(1), "Done", Utc::now());
    /// done.completed = true;
    /// let todo = Task::new(TaskId(2), "Todo", Utc::now());
    /// let tasks = vec![done, todo];
    ///
    /// let view = DerivedView::compute(&tasks, TaskFilter::Pending);
    /// assert_eq!(view.visible, vec![1]);
    /// assert_eq!(view.stats.total, 2);
    /// assert_eq!(view.stats.pending, 1);
    /// ```
    #[must_use]
    pub fn compute(tasks: &[Task], filter: TaskFilter) -> Self {
        let visible = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| filter.matches(task))
            .map(|(idx, _)| idx)
            .collect();
        Self {
            visible,
            stats: TaskStats::from_tasks(tasks),
        }
    }

    /// Returns the number of visible tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if no task is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Resolves the visible tasks against the collection they came from.
    pub fn tasks<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        self.visible.iter().filter_map(move |&idx| tasks.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, TaskId};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn task(id: u64, completed: bool) -> Task {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let mut task = Task::new(TaskId(id), format!("Task {id}"), created);
        task.completed = completed;
        task
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(any::<bool>(), 0..40).prop_map(|flags| {
            flags
                .into_iter()
                .enumerate()
                .map(|(idx, completed)| task(idx as u64, completed))
                .collect()
        })
    }

    #[test]
    fn filter_cycle_visits_every_tab() {
        let mut filter = TaskFilter::All;
        for expected in [TaskFilter::Pending, TaskFilter::Completed, TaskFilter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
        for f in TaskFilter::all() {
            assert_eq!(f.next().previous(), f);
            assert_eq!(TaskFilter::all()[f.index()], f);
        }
    }

    #[test]
    fn filter_labels() {
        assert_eq!(TaskFilter::All.to_string(), "All Tasks");
        assert_eq!(TaskFilter::Pending.label(), "Pending");
        assert_eq!(TaskFilter::Completed.label(), "Completed");
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let view = DerivedView::compute(&[], TaskFilter::All);
        assert!(view.is_empty());
        assert_eq!(view.stats, TaskStats::default());
    }

    #[test]
    fn stats_ignore_other_fields() {
        let mut high = task(1, true);
        high.priority = Priority::High;
        let tasks = vec![high, task(2, false), task(3, false)];

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                completed: 1,
                pending: 2
            }
        );
    }

    #[test]
    fn view_resolves_tasks_in_order() {
        let tasks = vec![task(1, true), task(2, false), task(3, true)];
        let view = DerivedView::compute(&tasks, TaskFilter::Completed);
        let ids: Vec<_> = view.tasks(&tasks).map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn all_filter_is_identity(tasks in arb_tasks()) {
            let filtered = filter_tasks(&tasks, TaskFilter::All);
            prop_assert_eq!(filtered.len(), tasks.len());
            for (a, b) in filtered.iter().zip(tasks.iter()) {
                prop_assert_eq!(*a, b);
            }
        }

        #[test]
        fn completed_and_pending_partition_the_collection(tasks in arb_tasks()) {
            let completed = filter_tasks(&tasks, TaskFilter::Completed);
            let pending = filter_tasks(&tasks, TaskFilter::Pending);

            prop_assert!(completed.iter().all(|t| t.completed));
            prop_assert!(pending.iter().all(|t| !t.completed));
            prop_assert_eq!(completed.len() + pending.len(), tasks.len());
            for t in &completed {
                prop_assert!(!pending.iter().any(|p| p.id == t.id));
            }
        }

        #[test]
        fn stats_add_up(tasks in arb_tasks()) {
            let stats = TaskStats::from_tasks(&tasks);
            prop_assert_eq!(stats.total, tasks.len());
            prop_assert_eq!(stats.completed + stats.pending, stats.total);
            prop_assert_eq!(stats.completed, tasks.iter().filter(|t| t.completed).count());
        }

        #[test]
        fn derived_view_matches_filter_tasks(tasks in arb_tasks(), idx in 0usize..3) {
            let filter = TaskFilter::all()[idx];
            let view = DerivedView::compute(&tasks, filter);
            let expected: Vec<_> = filter_tasks(&tasks, filter).into_iter().map(|t| t.id).collect();
            let actual: Vec<_> = view.tasks(&tasks).map(|t| t.id).collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(view.stats, TaskStats::from_tasks(&tasks));
        }
    }
}
