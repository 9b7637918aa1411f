//! Header bar widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use taskpro_protocol::TaskStats;

/// Renders the application title on the left and the task statistics on
/// the right, inside a rounded border.
///
/// ```text
/// ╭──────────────────────────────────────────────────────────────╮
/// │Task Manager Pro              Total: 5  Completed: 1  Pending: 4│
/// ╰──────────────────────────────────────────────────────────────╯
/// ```
pub fn render_header(stats: TaskStats, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    let stats_line = stats_line(stats);
    let stats_width = u16::try_from(stats_line.width()).unwrap_or(u16::MAX);

    let [title_area, stats_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(stats_width)]).areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Task Manager Pro",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    title.render(title_area, buf);

    Paragraph::new(stats_line)
        .alignment(Alignment::Right)
        .render(stats_area, buf);
}

fn stats_line(stats: TaskStats) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("Total: ", label),
        Span::styled(stats.total.to_string(), Style::default().fg(Color::White)),
        Span::styled("  Completed: ", label),
        Span::styled(stats.completed.to_string(), Style::default().fg(Color::Green)),
        Span::styled("  Pending: ", label),
        Span::styled(stats.pending.to_string(), Style::default().fg(Color::Yellow)),
    ])
}
