//! Task list widget.
//!
//! This module renders the filtered task list, including its loading and
//! empty states, and provides the hit-testing used for mouse selection.

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use taskpro_protocol::{DerivedView, Priority, Task};

use crate::layout::TASK_ROW_HEIGHT;

use super::truncate_string;

/// Format used for creation dates, e.g. `Jan 15, 2025`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Returns the color associated with a priority.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use taskpro_protocol::Priority;
/// use taskpro_tui::widgets::priority_color;
///
/// assert_eq!(priority_color(Priority::High), Color::Red);
/// assert_eq!(priority_color(Priority::Medium), Color::Yellow);
/// assert_eq!(priority_color(Priority::Low), Color::Green);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Formats a timestamp as a short calendar date in UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use taskpro_tui::widgets::format_date;
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 5, 23, 59, 0).unwrap();
/// assert_eq!(format_date(&at), "Jan 5, 2025");
/// ```
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Renders the task list.
///
/// `selected` is a row index into `view.visible`. While `loading` is set
/// the list shows a loading message instead of its rows.
///
/// # Layout
///
/// Each task takes two rows:
///
/// ```text
/// ╭ Tasks ──────────────────────────────────────────────╮
/// │› [ ] Prepare sprint demo            High  Jan 15, 2025│
/// │      Slides and a short live walkthrough              │
/// │  [x] Renew domain name              High  Jan 12, 2025│
/// │                                                       │
/// ╰───────────────────────────────────────────────────────╯
/// ```
pub fn render_task_list(
    tasks: &[Task],
    view: &DerivedView,
    selected: Option<usize>,
    loading: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Tasks ({}) ", view.len()),
            Style::default().fg(Color::White),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    block.render(area, buf);

    if loading {
        render_centered(
            vec![Line::from(Span::styled(
                "Loading tasks...",
                Style::default().fg(Color::Cyan),
            ))],
            inner,
            buf,
        );
        return;
    }

    if view.is_empty() {
        render_empty_state(inner, buf);
        return;
    }

    let capacity = list_capacity(inner);
    let offset = scroll_offset(selected, view.len(), capacity);

    for (slot, task) in view.tasks(tasks).skip(offset).take(capacity).enumerate() {
        let row = offset + slot;
        let y = inner.y + (slot as u16) * TASK_ROW_HEIGHT;
        let row_area = Rect::new(inner.x, y, inner.width, TASK_ROW_HEIGHT).intersection(inner);
        render_row(task, selected == Some(row), row_area, buf);
    }
}

/// Renders the "nothing to show" message.
fn render_empty_state(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            "No tasks found",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create your first task to get started!",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    render_centered(lines, area, buf);
}

fn render_centered(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let offset = area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: area.height.saturating_sub(offset),
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(centered, buf);
}

/// Renders one task in its two rows.
fn render_row(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let width = area.width as usize;

    let marker = if is_selected { "› " } else { "  " };
    let check = if task.completed { "[x] " } else { "[ ] " };
    let badge = format!(" {} ", task.priority.display_name());
    let date = format_date(&task.created_at);

    let fixed = marker.chars().count() + check.len() + badge.len() + 1 + date.len() + 1;
    let title_width = width.saturating_sub(fixed);
    let title = truncate_string(&task.title, title_width);
    let padding = title_width.saturating_sub(title.chars().count());

    let mut title_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    if is_selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let accent = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let first = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(
            check,
            Style::default().fg(if task.completed {
                Color::Green
            } else {
                accent
            }),
        ),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(
            badge,
            Style::default()
                .fg(Color::Black)
                .bg(priority_color(task.priority)),
        ),
        Span::raw(" "),
        Span::styled(date, Style::default().fg(Color::DarkGray)),
    ]);

    let indent = marker.chars().count() + check.len();
    let description = task
        .description()
        .map(|d| truncate_string(d.lines().next().unwrap_or(d), width.saturating_sub(indent)))
        .unwrap_or_default();
    let second = Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(description, Style::default().fg(Color::Gray)),
    ]);

    Paragraph::new(vec![first, second]).render(area, buf);
}

/// Number of tasks that fit in the list's inner area.
fn list_capacity(inner: Rect) -> usize {
    usize::from((inner.height / TASK_ROW_HEIGHT).max(1))
}

/// Calculates the first visible row so the selected row stays on screen.
///
/// The selection is kept near the middle of the list once it moves past the
/// first half of the viewport.
#[must_use]
pub fn scroll_offset(selected: Option<usize>, total: usize, capacity: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= capacity {
        return 0;
    }

    let max_offset = total.saturating_sub(capacity);

    if selected < capacity / 2 {
        0
    } else {
        (selected.saturating_sub(capacity / 2)).min(max_offset)
    }
}

/// Returns the row index (into the visible tasks) drawn at `(column, row)`.
///
/// `area` is the full list area including its border, and `selected` must
/// be the selection the list was rendered with so the scroll offset matches.
#[must_use]
pub fn task_index_at(
    visible: usize,
    selected: Option<usize>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = area.inner(ratatui::layout::Margin::new(1, 1));
    if !inner.contains((column, row).into()) {
        return None;
    }

    let capacity = list_capacity(inner);
    let slot = usize::from((row - inner.y) / TASK_ROW_HEIGHT);
    if slot >= capacity {
        return None;
    }

    let index = scroll_offset(selected, visible, capacity) + slot;
    (index < visible).then_some(index)
}
