//! Widget components for the taskpro TUI.
//!
//! This module provides the rendering functions for the task manager
//! screen, organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a pure function that renders borrowed data into a buffer.
//! None of them hold state or talk to the backend; the only stateful
//! component, the creation form, keeps its draft in
//! [`TaskForm`](crate::form::TaskForm) and is rendered from it here.
//!
//! # Modules
//!
//! - [`header`]: Title and task statistics
//! - [`task_form`]: The creation form
//! - [`tabs`]: The All / Pending / Completed filter strip
//! - [`task_list`]: The filtered task list, with loading and empty states
//! - [`detail`]: The task detail overlay
//! - [`dialog`]: The delete confirmation and error notice modals
//! - [`help`]: The keybinding overlay
//! - [`status_bar`]: Context-sensitive key hints
//!
//! # Priority Colors
//!
//! | Priority | Color |
//! |----------|-------|
//! | `High` | Red (`Color::Red`) |
//! | `Medium` | Yellow (`Color::Yellow`) |
//! | `Low` | Green (`Color::Green`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use taskpro_protocol::{DerivedView, TaskFilter};
//! use taskpro_protocol::sample::sample_tasks;
//! use taskpro_tui::widgets;
//!
//! let tasks = sample_tasks();
//! let view = DerivedView::compute(&tasks, TaskFilter::All);
//!
//! let area = Rect::new(0, 0, 80, 12);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_task_list(&tasks, &view, Some(0), false, area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod detail;
pub mod dialog;
pub mod header;
pub mod help;
pub mod status_bar;
pub mod tabs;
pub mod task_form;
pub mod task_list;

// Re-export primary rendering functions for convenience
pub use detail::render_detail_panel;
pub use dialog::{render_confirm_dialog, render_notice};
pub use header::render_header;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use tabs::{filter_at, render_filter_tabs};
pub use task_form::render_task_form;
pub use task_list::{format_date, priority_color, render_task_list, task_index_at};

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Shortens `s` to at most `max_width` characters, ending in `...` when cut.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
