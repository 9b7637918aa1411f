//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application controller.

use serde::{Deserialize, Serialize};

use crate::view::TaskFilter;

/// Messages that represent user intents in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application controller. Some of them only change local state,
/// others cause a backend call to be issued.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::Message;
///
/// let msg = Message::Quit;
/// assert!(msg.is_terminating());
/// assert!(!Message::Escape.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the selection up the task list.
    NavigateUp,
    /// Move the selection down the task list.
    NavigateDown,
    /// Switch to the next filter tab.
    NextFilter,
    /// Switch to the previous filter tab.
    PrevFilter,
    /// Switch to a specific filter tab.
    SetFilter {
        /// The filter to activate.
        filter: TaskFilter,
    },
    /// Flip the completion flag of the selected task.
    ToggleComplete,
    /// Move the selected task to its next priority.
    CyclePriority,
    /// Fetch the selected task and show its details.
    OpenDetail,
    /// Ask to delete the selected task (opens a confirmation).
    RequestDelete,
    /// Accept the pending confirmation.
    Confirm,
    /// Reject the pending confirmation.
    Cancel,
    /// Reload every task from the backend.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape: close panel, leave the form, or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Creation form messages ---
    /// Move keyboard focus to the creation form.
    FocusForm,
    /// Type a character into the active form field.
    FormInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the active form field.
    FormBackspace,
    /// Move to the next form field.
    FormNextField,
    /// Move to the previous form field.
    FormPrevField,
    /// Change the drafted priority (only on the priority field).
    FormCyclePriority {
        /// `true` to move to the next priority, `false` for the previous one.
        forward: bool,
    },
    /// Submit the drafted task.
    FormSubmit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::Cancel.is_terminating());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::NavigateUp,
            Message::SetFilter {
                filter: TaskFilter::Pending,
            },
            Message::ToggleComplete,
            Message::RequestDelete,
            Message::ClickAt { column: 10, row: 5 },
            Message::FormInput { ch: 'x' },
            Message::FormCyclePriority { forward: false },
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleComplete).expect("serialize");
        assert_eq!(json, r#""toggle_complete""#);

        let json = serde_json::to_string(&Message::SetFilter {
            filter: TaskFilter::Completed,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"set_filter":{"filter":"completed"}}"#);
    }
}
