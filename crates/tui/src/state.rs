//! Application state management.
//!
//! This module defines the state owned by the controller: the cached task
//! collection, the active filter, the derived view, and the UI state around
//! them (selection, focus, form draft, dialogs).

use taskpro_protocol::{DerivedView, Task, TaskCollection, TaskFilter, TaskId};

use crate::form::TaskForm;

/// The current focus area in the UI.
///
/// Determines which component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the task list.
    #[default]
    List,
    /// Focus is on the creation form.
    Form,
}

/// The application state.
///
/// `view` is derived from `tasks` and `filter` and must be recomputed with
/// [`refresh_view`](Self::refresh_view) whenever either changes.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Cached copy of the backend's tasks, most recent first.
    pub tasks: TaskCollection,
    /// Active client-side filter.
    pub filter: TaskFilter,
    /// Whether a full load is in flight.
    pub loading: bool,
    /// Visible tasks and stats for the current collection and filter.
    pub view: DerivedView,
    /// Index of the selected row within `view.visible`, if any.
    pub selected: Option<usize>,
    /// Current focus area.
    pub focus: Focus,
    /// Creation form draft.
    pub form: TaskForm,
    /// Task awaiting delete confirmation.
    pub pending_delete: Option<TaskId>,
    /// Blocking error message, shown until dismissed.
    pub notice: Option<String>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Task shown in the detail panel.
    pub detail: Option<TaskId>,
}

impl AppState {
    /// Creates an empty state with the "All Tasks" filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_protocol::TaskFilter;
    /// use taskpro_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.filter, TaskFilter::All);
    /// assert!(state.view.is_empty());
    /// assert_eq!(state.selected, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the derived view and clamps the selection into it.
    ///
    /// The detail panel and a pending delete are dropped if their task is
    /// no longer cached.
    pub fn refresh_view(&mut self) {
        let tasks = &self.tasks;
        self.detail = self.detail.filter(|&id| tasks.get(id).is_some());
        self.pending_delete = self.pending_delete.filter(|&id| tasks.get(id).is_some());

        self.view = DerivedView::compute(self.tasks.as_slice(), self.filter);
        self.clamp_selection();
    }

    /// Switches the active filter. Purely local; no backend call.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected = None;
        }
        self.refresh_view();
    }

    /// Keeps the selection pointing at a visible row.
    ///
    /// An empty view has no selection. Otherwise an out-of-range selection
    /// moves to the last row, and a missing one defaults to the first row.
    pub fn clamp_selection(&mut self) {
        let len = self.view.len();
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
    }

    /// Clears the selection until the next recompute.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves the selection up, wrapping around to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.view.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the selection down, wrapping around to the top.
    pub fn navigate_down(&mut self) {
        let len = self.view.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) | None => Some(0),
        };
    }

    /// Returns the selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let index = *self.view.visible.get(self.selected?)?;
        self.tasks.get_index(index)
    }

    /// Selects the row showing the task with `id`, if it is visible.
    pub fn select_task(&mut self, id: TaskId) {
        let Some(index) = self.tasks.position(id) else {
            return;
        };
        if let Some(row) = self.view.visible.iter().position(|&i| i == index) {
            self.selected = Some(row);
        }
    }

    /// Returns the task shown in the detail panel, if any.
    #[must_use]
    pub fn detail_task(&self) -> Option<&Task> {
        self.tasks.get(self.detail?)
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Returns `true` if a modal (notice or delete confirmation) is open.
    #[must_use]
    pub fn has_dialog(&self) -> bool {
        self.notice.is_some() || self.pending_delete.is_some()
    }
}
