//! Task detail panel widget.
//!
//! This module renders the overlay opened with `Enter`, which shows every
//! field of a task as last returned by the backend, including the full
//! wrapped description.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use taskpro_protocol::Task;

use super::{centered_rect, format_date, priority_color};

/// Preferred width of the panel.
const DETAIL_WIDTH: u16 = 70;

/// Preferred height of the panel.
const DETAIL_HEIGHT: u16 = 16;

/// Renders the detail panel centered over `area`.
///
/// # Layout
///
/// ```text
/// ╭ Prepare sprint demo ─────────────────────────╮
/// │Status:    Pending                            │
/// │Priority:  High                               │
/// │Created:   Jan 14, 2025 09:00 UTC             │
/// │Updated:   Jan 14, 2025 09:00 UTC             │
/// │──────────────────────────────────────────────│
/// │Slides plus a short walkthrough of the new    │
/// │filters                                       │
/// │──────────────────────────────────────────────│
/// │Esc Close  Space Toggle  p Priority  d Delete │
/// ╰──────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskpro_protocol::sample::sample_tasks;
/// use taskpro_tui::widgets::render_detail_panel;
///
/// let task = &sample_tasks()[0];
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_detail_panel(task, area, &mut buf);
/// ```
pub fn render_detail_panel(task: &Task, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(
        DETAIL_WIDTH.min(area.width.saturating_sub(4)),
        DETAIL_HEIGHT.min(area.height.saturating_sub(2)),
        area,
    );
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", task.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" #{} ", task.id),
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup);
    block.render(popup, buf);

    let metadata = metadata_lines(task);
    let metadata_height = u16::try_from(metadata.len()).unwrap_or(u16::MAX);

    let [meta_area, sep1, desc_area, sep2, footer_area] = Layout::vertical([
        Constraint::Length(metadata_height),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(metadata).render(meta_area, buf);
    render_separator(sep1, buf);
    render_description(task, desc_area, buf);
    render_separator(sep2, buf);
    render_footer(footer_area, buf);
}

fn metadata_lines(task: &Task) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let (status, status_color) = if task.completed {
        ("Completed", Color::Green)
    } else {
        ("Pending", Color::Yellow)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status:    ", label),
            Span::styled(status, Style::default().fg(status_color)),
        ]),
        Line::from(vec![
            Span::styled("Priority:  ", label),
            Span::styled(
                task.priority.display_name(),
                Style::default()
                    .fg(priority_color(task.priority))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Created:   ", label),
            Span::styled(
                format!(
                    "{} {}",
                    format_date(&task.created_at),
                    task.created_at.format("%H:%M UTC")
                ),
                value,
            ),
        ]),
    ];

    if let Some(updated) = task.updated_at {
        lines.push(Line::from(vec![
            Span::styled("Updated:   ", label),
            Span::styled(
                format!("{} {}", format_date(&updated), updated.format("%H:%M UTC")),
                value,
            ),
        ]));
    }

    lines
}

fn render_separator(area: Rect, buf: &mut Buffer) {
    let line = "─".repeat(area.width as usize);
    Paragraph::new(Span::styled(line, Style::default().fg(Color::DarkGray))).render(area, buf);
}

fn render_description(task: &Task, area: Rect, buf: &mut Buffer) {
    let paragraph = match task.description() {
        Some(description) => Paragraph::new(description.to_string())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false }),
        None => Paragraph::new(Span::styled(
            "No description",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };
    paragraph.render(area, buf);
}

fn render_footer(area: Rect, buf: &mut Buffer) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("Esc", key),
        Span::styled(" Close  ", text),
        Span::styled("Space", key),
        Span::styled(" Toggle  ", text),
        Span::styled("p", key),
        Span::styled(" Priority  ", text),
        Span::styled("d", key),
        Span::styled(" Delete", text),
    ]);
    Paragraph::new(hints).render(area, buf);
}
