//! Terminal UI for the taskpro task manager.
//!
//! This crate provides a Ratatui-based terminal interface over a REST task
//! backend: a creation form, filter tabs, the task list and overlays for
//! details, confirmation and errors.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`command`]: Backend calls issued by the app and their outcomes
//! - [`state`]: Application state management
//! - [`form`]: The task creation form
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use taskpro_api::TaskClient;
//! use taskpro_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let client = TaskClient::new("http://localhost:8000/api")?;
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new();
//!     let result = app.run(&mut terminal, client).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod command;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use command::{Command, Outcome, execute};
pub use form::{FormField, TaskForm};
pub use state::{AppState, Focus};
