//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which keys mean what depends on the
//! [`InputMode`] the app is in.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use taskpro_protocol::{Message, TaskFilter};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which key map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Browsing the task list.
    #[default]
    List,
    /// Typing into the creation form.
    Form,
    /// A confirmation or notice dialog is open.
    Dialog,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action in `mode`,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key, mode),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// `Ctrl+C` quits in every mode.
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match mode {
        InputMode::List => list_key(key),
        InputMode::Form => form_key(key),
        InputMode::Dialog => dialog_key(key),
    }
}

/// Key bindings while browsing the list.
///
/// | Key | Action |
/// |-----|--------|
/// | `↑` / `↓` | Select previous / next task |
/// | `←` / `→`, `Shift+Tab` / `Tab` | Previous / next filter |
/// | `1` `2` `3` | All / Pending / Completed |
/// | `Space` | Toggle completion |
/// | `Enter` | Open details |
/// | `p` | Cycle priority |
/// | `d`, `Delete` | Delete (asks first) |
/// | `n` | Focus the creation form |
/// | `r` | Reload from the backend |
/// | `?` | Toggle help |
/// | `Esc` | Close panel or clear selection |
fn list_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Left | KeyCode::BackTab => Some(Message::PrevFilter),
        KeyCode::Right | KeyCode::Tab => Some(Message::NextFilter),

        KeyCode::Char('1') => Some(Message::SetFilter {
            filter: TaskFilter::All,
        }),
        KeyCode::Char('2') => Some(Message::SetFilter {
            filter: TaskFilter::Pending,
        }),
        KeyCode::Char('3') => Some(Message::SetFilter {
            filter: TaskFilter::Completed,
        }),

        KeyCode::Char(' ') => Some(Message::ToggleComplete),
        KeyCode::Enter => Some(Message::OpenDetail),
        KeyCode::Char('p') => Some(Message::CyclePriority),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::RequestDelete),
        KeyCode::Char('n') => Some(Message::FocusForm),

        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Key bindings while the creation form has focus.
///
/// Printable characters are typed into the active field, so no letter is
/// bound to an action here.
fn form_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Left => Some(Message::FormCyclePriority { forward: false }),
        KeyCode::Right => Some(Message::FormCyclePriority { forward: true }),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

/// Key bindings while a dialog is open.
///
/// Any other key is still forwarded as `Escape` so a notice can be
/// dismissed with whatever the user presses.
fn dialog_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::Confirm),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Cancel),
        _ => Some(Message::Escape),
    }
}
