//! Filter tab strip widget.
//!
//! Renders the three filters with their counts on a single row and maps
//! click positions back to a filter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use taskpro_protocol::{TaskFilter, TaskStats};

/// Columns before the first tab.
const LEADING: u16 = 1;

/// Separator drawn between tabs.
const SEPARATOR: &str = " │ ";

/// Returns the tab text for `filter`, e.g. `"Pending (3)"`.
fn tab_label(filter: TaskFilter, stats: TaskStats) -> String {
    let count = match filter {
        TaskFilter::All => stats.total,
        TaskFilter::Pending => stats.pending,
        TaskFilter::Completed => stats.completed,
    };
    format!("{} ({count})", filter.label())
}

/// Renders the filter tabs, highlighting the active one.
///
/// ```text
///  All Tasks (5) │ Pending (4) │ Completed (1)
/// ```
pub fn render_filter_tabs(active: TaskFilter, stats: TaskStats, area: Rect, buf: &mut Buffer) {
    let separator_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::raw(" ".repeat(usize::from(LEADING)))];

    for (i, filter) in TaskFilter::all().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, separator_style));
        }
        let style = if filter == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(tab_label(filter, stats), style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Returns the filter whose tab covers `(column, row)`, if any.
///
/// Uses the same label widths as [`render_filter_tabs`], so it must be given
/// the stats the strip was last rendered with.
#[must_use]
pub fn filter_at(stats: TaskStats, area: Rect, column: u16, row: u16) -> Option<TaskFilter> {
    if !area.contains((column, row).into()) {
        return None;
    }

    let mut x = area.x + LEADING;
    for filter in TaskFilter::all() {
        let width = u16::try_from(tab_label(filter, stats).chars().count()).unwrap_or(u16::MAX);
        if (x..x.saturating_add(width)).contains(&column) {
            return Some(filter);
        }
        x = x
            .saturating_add(width)
            .saturating_add(SEPARATOR.chars().count() as u16);
    }
    None
}
