//! Creation form widget.
//!
//! Renders the [`TaskForm`] draft as three labelled rows. When the form has
//! focus the active row is marked and shows a block cursor; otherwise the
//! rows are dimmed and the title hints at the `n` key.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::form::{FormField, TaskForm};

use super::priority_color;

/// Width reserved for the marker and the field label.
const LABEL_WIDTH: usize = 15;

/// Renders the creation form.
///
/// # Layout
///
/// ```text
/// ╭ New Task ───────────────────────────────╮
/// │› Title:        Buy milk█                │
/// │  Description:                           │
/// │  Priority:     ◂ Medium ▸               │
/// ╰─────────────────────────────────────────╯
/// ```
pub fn render_task_form(form: &TaskForm, focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = if focused {
        " New Task (Enter to add, Esc to leave) "
    } else {
        " New Task (press n) "
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);

    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 1);
    let lines = vec![
        text_row(form, FormField::Title, &form.title, focused, value_width),
        text_row(
            form,
            FormField::Description,
            &form.description,
            focused,
            value_width,
        ),
        priority_row(form, focused),
    ];

    Paragraph::new(lines).render(inner, buf);
}

fn label_spans(field: FormField, active: bool) -> Vec<Span<'static>> {
    let marker = if active { "› " } else { "  " };
    let style = if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = format!("{marker}{}:", field.label());
    vec![Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), style)]
}

fn text_row(
    form: &TaskForm,
    field: FormField,
    value: &str,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let active = focused && form.active == field;
    let mut spans = label_spans(field, active);

    // Keep the end of the text visible while typing.
    let len = value.chars().count();
    let shown: String = value.chars().skip(len.saturating_sub(width)).collect();
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(shown, value_style));

    if active {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn priority_row(form: &TaskForm, focused: bool) -> Line<'static> {
    let active = focused && form.active == FormField::Priority;
    let mut spans = label_spans(FormField::Priority, active);

    let value = Span::styled(
        form.priority.display_name(),
        Style::default()
            .fg(priority_color(form.priority))
            .add_modifier(Modifier::BOLD),
    );
    if active {
        let arrow = Style::default().fg(Color::Cyan);
        spans.push(Span::styled("◂ ", arrow));
        spans.push(value);
        spans.push(Span::styled(" ▸", arrow));
    } else {
        spans.push(value);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(form: &TaskForm, focused: bool) -> String {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        render_task_form(form, focused, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn unfocused_form_hints_at_shortcut() {
        let content = render(&TaskForm::default(), false);
        assert!(content.contains("New Task (press n)"));
        assert!(content.contains("Title:"));
        assert!(content.contains("Description:"));
        assert!(content.contains("Medium"));
        assert!(!content.contains('█'));
    }

    #[test]
    fn focused_form_marks_active_field() {
        let form = TaskForm {
            title: "Buy milk".to_string(),
            ..TaskForm::default()
        };
        let content = render(&form, true);
        assert!(content.contains("› Title:"));
        assert!(content.contains("Buy milk█"));
    }

    #[test]
    fn priority_selector_shows_arrows_when_active() {
        let form = TaskForm {
            active: FormField::Priority,
            ..TaskForm::default()
        };
        let content = render(&form, true);
        assert!(content.contains("◂ Medium ▸"));
    }

    #[test]
    fn long_titles_keep_the_tail_visible() {
        let form = TaskForm {
            title: format!("{}END", "x".repeat(100)),
            ..TaskForm::default()
        };
        let content = render(&form, true);
        assert!(content.contains("END█"));
    }
}
