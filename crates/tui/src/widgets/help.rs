//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 44;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 26;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Arguments
///
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskpro_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let lines = build_help_lines();

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let help_text = Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(text, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Tasks", header_style)),
        binding("↑ ↓", "Select previous / next"),
        binding("← → Tab", "Switch filter"),
        binding("1 2 3", "All / Pending / Completed"),
        binding("Space", "Toggle completed"),
        binding("p", "Cycle priority"),
        binding("Enter", "Open details"),
        binding("d", "Delete task"),
        binding("r", "Reload from backend"),
        Line::from(""),
        Line::from(Span::styled("  New task", header_style)),
        binding("n", "Focus the form"),
        binding("Tab ↑ ↓", "Next / previous field"),
        binding("← →", "Change priority"),
        binding("Enter", "Add task"),
        binding("Esc", "Back to the list"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        binding("Esc", "Close panel"),
        binding("Ctrl+C", "Quit"),
        binding("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Tasks"));
        assert!(content.contains("New task"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let lines = build_help_lines();

        let content: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        for key in ["↑ ↓", "Space", "Enter", "Esc", "Ctrl+C", "?", "p", "d", "n", "r"] {
            assert!(content.contains(key), "missing binding {key}");
        }
        assert!(content.contains("Toggle completed"));
        assert!(content.contains("Delete task"));
    }
}
