//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: it turns messages into state changes and backend
//! [`Command`]s, reconciles backend [`Outcome`]s, and renders the screen.
//!
//! The collection in [`AppState`] is a cache of the backend. Nothing in it
//! changes until the backend has answered; a failed call leaves it exactly
//! as it was and raises a notice instead.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use taskpro_api::{Error, TaskApi};
use taskpro_protocol::{Message, Task, TaskId};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::{
    AppState, Focus,
    command::{Command, Outcome, execute},
    event::{InputMode, event_to_message, poll_event},
    layout::{
        FORM_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATUS_BAR_HEIGHT, TABS_HEIGHT,
    },
    terminal::AppTerminal,
    widgets::{
        filter_at, render_confirm_dialog, render_detail_panel, render_filter_tabs, render_header,
        render_help_overlay, render_notice, render_status_bar, render_task_form, render_task_list,
        task_index_at,
    },
};

/// Notice raised when the initial load or a refresh fails.
pub const LOAD_FAILED: &str = "Failed to load tasks. Make sure the backend is running!";
/// Notice raised when creating a task fails.
pub const CREATE_FAILED: &str = "Failed to create task. Please try again.";
/// Notice raised when toggling or re-prioritising a task fails.
pub const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
/// Notice raised when deleting a task fails.
pub const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
/// Notice raised when the detail fetch finds the task gone.
pub const TASK_GONE: &str = "Task no longer exists.";
/// Notice raised when the detail fetch fails for another reason.
pub const DETAIL_FAILED: &str = "Failed to load task details.";

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug, Default)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// Where the form was last rendered, for click hit-testing.
    form_area: Rect,
    /// Where the filter tabs were last rendered, for click hit-testing.
    tabs_area: Rect,
    /// Where the task list was last rendered, for click hit-testing.
    list_area: Rect,
}

impl App {
    /// Creates an application with an empty collection.
    ///
    /// Nothing is shown until [`start`](Self::start)'s load completes.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_tui::App;
    /// use taskpro_tui::command::Command;
    ///
    /// let mut app = App::new();
    /// assert_eq!(app.start(), Command::Load);
    /// assert!(app.state().loading);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            header_visible: true,
            ..Self::default()
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the app has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Marks the collection as loading and returns the initial load.
    pub fn start(&mut self) -> Command {
        self.state.loading = true;
        Command::Load
    }

    /// Returns the key map that applies to the current state.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.has_dialog() {
            InputMode::Dialog
        } else if self.state.focus == Focus::Form {
            InputMode::Form
        } else {
            InputMode::List
        }
    }

    /// Updates the application state based on a message.
    ///
    /// Returns the backend call to issue, if the message asks for one.
    /// Modal layers take precedence in this order: an open notice, a
    /// pending delete confirmation, the help overlay, then the form or the
    /// list depending on focus.
    pub fn update(&mut self, msg: Message) -> Option<Command> {
        if msg.is_terminating() {
            self.should_quit = true;
            return None;
        }

        // Any key dismisses a notice
        if self.state.notice.take().is_some() {
            return None;
        }

        if let Some(id) = self.state.pending_delete {
            match msg {
                Message::Confirm => {
                    self.state.pending_delete = None;
                    return Some(Command::Delete(id));
                }
                Message::Cancel => {
                    self.state.pending_delete = None;
                }
                _ => {}
            }
            return None;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return None;
        }

        match self.state.focus {
            Focus::Form => self.update_form(msg),
            Focus::List if self.state.detail.is_some() => self.update_detail(msg),
            Focus::List => self.update_list(msg),
        }
    }

    fn update_form(&mut self, msg: Message) -> Option<Command> {
        let form = &mut self.state.form;
        match msg {
            Message::Escape => self.state.focus = Focus::List,
            Message::FormInput { ch } => form.input(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormNextField => form.next_field(),
            Message::FormPrevField => form.prev_field(),
            Message::FormCyclePriority { forward } => form.cycle_priority(forward),
            Message::FormSubmit => {
                let payload = form.submit();
                if payload.is_none() {
                    debug!("ignoring submit with a blank title");
                }
                return payload.map(Command::Create);
            }
            Message::ClickAt { column, row } => return self.handle_click(column, row),
            _ => {}
        }
        None
    }

    /// Handles messages while the detail panel is open.
    ///
    /// Task actions apply to the task shown in the panel.
    fn update_detail(&mut self, msg: Message) -> Option<Command> {
        let id = self.state.detail?;
        match msg {
            Message::Escape | Message::OpenDetail | Message::Cancel => {
                self.state.detail = None;
            }
            Message::ToggleComplete => return Some(Command::Toggle(id)),
            Message::CyclePriority => return self.cycle_priority(self.state.tasks.get(id)),
            Message::RequestDelete => self.state.pending_delete = Some(id),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::Refresh => return self.refresh(),
            _ => {}
        }
        None
    }

    fn update_list(&mut self, msg: Message) -> Option<Command> {
        match msg {
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::NextFilter => self.state.set_filter(self.state.filter.next()),
            Message::PrevFilter => self.state.set_filter(self.state.filter.previous()),
            Message::SetFilter { filter } => self.state.set_filter(filter),
            Message::ToggleComplete => {
                return self.selected_id().map(Command::Toggle);
            }
            Message::CyclePriority => return self.cycle_priority(self.state.selected_task()),
            Message::OpenDetail => return self.selected_id().map(Command::Fetch),
            Message::RequestDelete => self.state.pending_delete = self.selected_id(),
            Message::Refresh => return self.refresh(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::Escape => self.state.clear_selection(),
            Message::FocusForm => self.state.focus = Focus::Form,
            Message::ClickAt { column, row } => return self.handle_click(column, row),
            _ => {}
        }
        None
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.state.selected_task().map(|t| t.id)
    }

    fn cycle_priority(&self, task: Option<&Task>) -> Option<Command> {
        task.map(|t| Command::UpdatePriority {
            id: t.id,
            priority: t.priority.next(),
        })
    }

    /// Starts a reload unless one is already running.
    fn refresh(&mut self) -> Option<Command> {
        if self.state.loading {
            return None;
        }
        self.state.loading = true;
        Some(Command::Load)
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Clicking a tab switches the filter. Clicking a task selects it, and
    /// clicking the selected task again opens its details. Clicking the
    /// form focuses it.
    fn handle_click(&mut self, column: u16, row: u16) -> Option<Command> {
        if self.state.detail.is_some() {
            return None;
        }

        if let Some(filter) = filter_at(self.state.view.stats, self.tabs_area, column, row) {
            self.state.focus = Focus::List;
            self.state.set_filter(filter);
            return None;
        }

        if let Some(index) = task_index_at(
            self.state.view.len(),
            self.state.selected,
            self.list_area,
            column,
            row,
        ) {
            self.state.focus = Focus::List;
            if self.state.selected == Some(index) {
                return self.selected_id().map(Command::Fetch);
            }
            self.state.selected = Some(index);
            return None;
        }

        if self.form_area.contains((column, row).into()) {
            self.state.focus = Focus::Form;
        }
        None
    }

    /// Reconciles a backend result into the state.
    ///
    /// Successful results replace local data with what the server returned.
    /// Failures are logged and raise a notice; the collection is left
    /// untouched. Panels pointing at a task that is no longer cached are
    /// closed.
    pub fn apply(&mut self, outcome: Outcome) {
        let mut created = None;

        match outcome {
            Outcome::Loaded(result) => {
                self.state.loading = false;
                match result {
                    Ok(tasks) => {
                        debug!(count = tasks.len(), "loaded tasks");
                        self.state.tasks.replace_all(tasks);
                    }
                    Err(err) => self.fail("load", None, &err, LOAD_FAILED),
                }
            }
            Outcome::Created(result) => match result {
                Ok(task) => {
                    let id = task.id;
                    if self.state.tasks.prepend(task) {
                        debug!(%id, "created task");
                    } else {
                        debug!(%id, "created task was already loaded");
                    }
                    created = Some(id);
                }
                Err(err) => self.fail("create", None, &err, CREATE_FAILED),
            },
            Outcome::Toggled(id, result) | Outcome::Updated(id, result) => match result {
                Ok(task) => {
                    self.replace(task);
                }
                Err(err) => self.fail("update", Some(id), &err, UPDATE_FAILED),
            },
            Outcome::Fetched(id, result) => match result {
                Ok(task) => {
                    if self.replace(task) {
                        self.state.detail = Some(id);
                    }
                }
                Err(Error::NotFound) => {
                    warn!(%id, "task vanished from the backend");
                    let _ = self.state.tasks.remove(id);
                    self.close_detail_of(id);
                    self.state.notice = Some(TASK_GONE.to_string());
                }
                Err(err) => self.fail("fetch", Some(id), &err, DETAIL_FAILED),
            },
            Outcome::Deleted(id, result) => match result {
                Ok(()) => {
                    if let Err(err) = self.state.tasks.remove(id) {
                        warn!(%id, %err, "deleted task was not cached");
                    }
                    self.close_detail_of(id);
                }
                Err(err) => self.fail("delete", Some(id), &err, DELETE_FAILED),
            },
        }

        self.state.refresh_view();
        if let Some(id) = created {
            self.state.select_task(id);
        }
    }

    /// Replaces the cached copy of `task`. Returns `false` if it was not
    /// cached any more.
    fn replace(&mut self, task: Task) -> bool {
        let id = task.id;
        match self.state.tasks.replace(task) {
            Ok(()) => true,
            Err(err) => {
                warn!(%id, %err, "ignoring result for a task that is no longer cached");
                false
            }
        }
    }

    fn close_detail_of(&mut self, id: TaskId) {
        if self.state.detail == Some(id) {
            self.state.detail = None;
        }
    }

    fn fail(&mut self, operation: &str, id: Option<TaskId>, err: &Error, notice: &str) {
        error!(operation, id = ?id, error = %err, "backend call failed");
        self.state.notice = Some(notice.to_string());
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.form_area = Rect::default();
            self.tabs_area = Rect::default();
            self.list_area = Rect::default();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let body = if show_header {
            let [header_area, body] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            render_header(self.state.view.stats, header_area, frame.buffer_mut());
            body
        } else {
            area
        };

        let [form_area, tabs_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(body);
        self.form_area = form_area;
        self.tabs_area = tabs_area;
        self.list_area = list_area;

        let state = &self.state;
        let buf = frame.buffer_mut();
        render_task_form(&state.form, state.focus == Focus::Form, form_area, buf);
        render_filter_tabs(state.filter, state.view.stats, tabs_area, buf);
        render_task_list(
            state.tasks.as_slice(),
            &state.view,
            state.selected,
            state.loading,
            list_area,
            buf,
        );
        render_status_bar(state.focus, state.loading, status_area, buf);

        if let Some(task) = state.detail_task() {
            render_detail_panel(task, area, buf);
        }
        if let Some(id) = state.pending_delete {
            let title = state.tasks.get(id).map_or("", |t| t.title.as_str());
            render_confirm_dialog(title, area, buf);
        }
        if let Some(message) = &state.notice {
            render_notice(message, area, buf);
        }
        if state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Issues the initial load, then polls for events, updates state, and
    /// renders the UI until the user quits. Every backend call runs as its
    /// own tokio task; results come back over a channel and are applied
    /// between frames, so rendering never waits on the network.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskpro_api::TaskClient;
    /// use taskpro_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = TaskClient::new("http://localhost:8000/api")?;
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let result = App::new().run(&mut terminal, client).await;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     result
    /// }
    /// ```
    pub async fn run<A>(&mut self, terminal: &mut AppTerminal, api: A) -> anyhow::Result<()>
    where
        A: TaskApi + Clone + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatch = |command: Command| {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = execute(&api, command).await;
                // The receiver is only gone once the loop has exited.
                let _ = tx.send(outcome);
            });
        };

        dispatch(self.start());

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.input_mode())
                && let Some(command) = self.update(msg)
            {
                dispatch(command);
            }

            while let Ok(outcome) = rx.try_recv() {
                self.apply(outcome);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
