//! The task creation form.
//!
//! [`TaskForm`] holds the draft being typed and which field has the cursor.
//! It is the only widget that owns state; everything it produces goes to
//! the controller as a [`NewTask`] on submit.

use taskpro_protocol::{NewTask, Priority};

/// A field of the creation form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The task title (required).
    #[default]
    Title,
    /// The optional description.
    Description,
    /// The priority selector.
    Priority,
}

impl FormField {
    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Description => Self::Title,
            Self::Priority => Self::Description,
        }
    }

    /// Returns the label shown in front of the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Priority => "Priority",
        }
    }
}

/// Draft state of the creation form.
///
/// # Examples
///
/// ```
/// use taskpro_protocol::Priority;
/// use taskpro_tui::form::TaskForm;
///
/// let mut form = TaskForm::default();
/// assert!(form.submit().is_none()); // blank title
///
/// for ch in "Buy milk".chars() {
///     form.input(ch);
/// }
/// let payload = form.submit().unwrap();
/// assert_eq!(payload.title, "Buy milk");
/// assert_eq!(payload.priority, Some(Priority::Medium));
/// assert!(form.title.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Draft title.
    pub title: String,
    /// Draft description.
    pub description: String,
    /// Draft priority.
    pub priority: Priority,
    /// Field that receives typed characters.
    pub active: FormField,
}

impl TaskForm {
    /// Types a character into the active text field.
    ///
    /// Characters typed while the priority selector is active are ignored.
    pub fn input(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        match self.active {
            FormField::Title => self.title.push(ch),
            FormField::Description => self.description.push(ch),
            FormField::Priority => {}
        }
    }

    /// Deletes the last character of the active text field.
    pub fn backspace(&mut self) {
        match self.active {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Priority => {}
        }
    }

    /// Moves the cursor to the next field.
    pub fn next_field(&mut self) {
        self.active = self.active.next();
    }

    /// Moves the cursor to the previous field.
    pub fn prev_field(&mut self) {
        self.active = self.active.previous();
    }

    /// Changes the drafted priority when the priority selector is active.
    pub fn cycle_priority(&mut self, forward: bool) {
        if self.active != FormField::Priority {
            return;
        }
        self.priority = if forward {
            self.priority.next()
        } else {
            self.priority.previous()
        };
    }

    /// Returns `true` if the drafted title is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Turns the draft into a creation payload.
    ///
    /// Returns `None` and keeps the draft untouched when the title is blank.
    /// Otherwise the draft is reset to its defaults. Title and description
    /// are trimmed, and a blank description is left out of the payload.
    pub fn submit(&mut self) -> Option<NewTask> {
        if self.is_blank() {
            return None;
        }

        let draft = std::mem::take(self);
        let mut payload = NewTask::new(draft.title.trim()).with_priority(draft.priority);
        let description = draft.description.trim();
        if !description.is_empty() {
            payload = payload.with_description(description);
        }
        Some(payload)
    }
}
