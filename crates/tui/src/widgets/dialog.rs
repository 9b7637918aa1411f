//! Modal dialogs: delete confirmation and error notices.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::{centered_rect, truncate_string};

/// Narrowest the modal gets, so short messages still read as a dialog.
const MIN_DIALOG_WIDTH: u16 = 50;

/// Border plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;

/// Text of the delete confirmation.
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";

/// Renders the delete confirmation modal for the task titled `title`.
///
/// The title is shortened to keep the key hints inside the modal.
pub fn render_confirm_dialog(title: &str, area: Rect, buf: &mut Buffer) {
    let max_title = usize::from(area.width.saturating_sub(HORIZONTAL_CHROME))
        .saturating_sub(2)
        .max(CONFIRM_DELETE.chars().count().saturating_sub(2));
    let title = truncate_string(title, max_title);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(CONFIRM_DELETE, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("\"{title}\""),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red)),
            Span::styled(" Delete    ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Green)),
            Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_modal(" Delete Task ", Color::Red, lines, area, buf);
}

/// Renders a blocking error notice.
///
/// The notice stays until any key dismisses it.
pub fn render_notice(message: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    render_modal(" Error ", Color::LightRed, lines, area, buf);
}

fn render_modal(
    title: &'static str,
    color: Color,
    lines: Vec<Line<'static>>,
    area: Rect,
    buf: &mut Buffer,
) {
    let (width, height) = modal_size(&lines, area);
    let popup = centered_rect(width, height, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}

/// Sizes the modal to its content: as wide as the longest line (within
/// `area`), and tall enough for every line once wrapped.
fn modal_size(lines: &[Line<'_>], area: Rect) -> (u16, u16) {
    let longest = lines.iter().map(Line::width).max().unwrap_or(0);
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);
    let width = longest
        .saturating_add(HORIZONTAL_CHROME)
        .max(MIN_DIALOG_WIDTH)
        .min(area.width);

    let inner = usize::from(width.saturating_sub(2)).max(1);
    let rows: usize = lines.iter().map(|l| l.width().max(1).div_ceil(inner)).sum();
    let height = u16::try_from(rows + 2).unwrap_or(u16::MAX).min(area.height);
    (width, height)
}
