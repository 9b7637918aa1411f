//! Status bar rendering widget.
//!
//! This module renders the footer line with the keybinding hints that apply
//! to the focused area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::Focus;

/// Renders the status bar for the given focus.
///
/// While `loading` is set a "Syncing..." marker is prepended.
///
/// # Layout
///
/// ```text
/// ↑↓ Select  Space Toggle  p Priority  d Delete  n New  ? Help  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskpro_tui::Focus;
/// use taskpro_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::List, false, area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, loading: bool, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints: &[(&str, &str)] = match focus {
        Focus::List => &[
            ("↑↓", "Select"),
            ("Space", "Toggle"),
            ("p", "Priority"),
            ("d", "Delete"),
            ("n", "New"),
            ("?", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Form => &[
            ("Tab", "Next field"),
            ("←→", "Priority"),
            ("Enter", "Add"),
            ("Esc", "Back"),
            ("Ctrl+C", "Quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    if loading {
        spans.push(Span::styled("Syncing...  ", Style::default().fg(Color::Cyan)));
    }
    for (i, (key, text)) in hints.iter().enumerate() {
        let sep = if i + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}{sep}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
