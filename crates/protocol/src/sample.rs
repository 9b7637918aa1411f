//! Sample data for demonstration and testing.
//!
//! The mock backend can be seeded with these tasks so the TUI has something
//! to show without a real backend.
//!
//! # Examples
//!
//! ```
//! use taskpro_protocol::sample::sample_tasks;
//!
//! let tasks = sample_tasks();
//! assert_eq!(tasks.len(), 5);
//! assert!(tasks.iter().any(|t| t.completed));
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::task::{Priority, Task, TaskId};

/// A builder for creating tasks with specific fields.
///
/// Internal helper to reduce boilerplate when creating several tasks with
/// non-default values.
struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    fn new(id: u64, title: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            task: Task::new(TaskId(id), title, created_at),
        }
    }

    fn description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    fn completed(mut self) -> Self {
        self.task.completed = true;
        self
    }

    fn build(self) -> Task {
        self.task
    }
}

/// Returns a small set of realistic tasks, most recent first.
///
/// Ids run from 5 (newest) down to 1 (oldest), one day apart, so callers
/// that assign new ids can continue from 6.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    let base = Utc
        .with_ymd_and_hms(2025, 1, 10, 9, 0, 0)
        .single()
        .unwrap_or_default();
    let day = |n: i64| base + Duration::days(n);

    vec![
        TaskBuilder::new(5, "Prepare sprint demo", day(4))
            .description("Slides plus a short walkthrough of the new filters")
            .priority(Priority::High)
            .build(),
        TaskBuilder::new(4, "Review pull requests", day(3))
            .priority(Priority::Medium)
            .build(),
        TaskBuilder::new(3, "Renew domain name", day(2))
            .description("Expires at the end of the month")
            .priority(Priority::High)
            .completed()
            .build(),
        TaskBuilder::new(2, "Buy milk", day(1))
            .priority(Priority::Low)
            .build(),
        TaskBuilder::new(1, "Water the plants", day(0))
            .priority(Priority::Low)
            .completed()
            .build(),
    ]
}
