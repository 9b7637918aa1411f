//! REST client for the taskpro task backend.
//!
//! This crate wraps the backend's HTTP endpoints and returns the parsed
//! response bodies as [`taskpro_protocol`] types.
//!
//! # Overview
//!
//! - [`TaskClient`]: the reqwest-based HTTP client
//! - [`TaskApi`]: the trait the controller is written against
//! - [`Error`]: transport, HTTP, not-found and decoding failures
//!
//! # Endpoints
//!
//! All paths are relative to the configured base URL and keep their
//! trailing slash:
//!
//! | Operation        | Method | Path                          |
//! |------------------|--------|-------------------------------|
//! | list             | GET    | `/tasks/`                     |
//! | get one          | GET    | `/tasks/{id}/`                |
//! | create           | POST   | `/tasks/`                     |
//! | update           | PATCH  | `/tasks/{id}/`                |
//! | delete           | DELETE | `/tasks/{id}/`                |
//! | toggle completed | POST   | `/tasks/{id}/toggle_complete/`|
//! | completed only   | GET    | `/tasks/completed/`           |
//! | pending only     | GET    | `/tasks/pending/`             |
//!
//! List endpoints must answer with a bare JSON array of tasks.
//!
//! # Examples
//!
//! ```no_run
//! use taskpro_api::{TaskApi, TaskClient};
//!
//! # async fn example() -> taskpro_api::Result<()> {
//! let client = TaskClient::new("http://localhost:8000/api")?;
//! let tasks = client.list_tasks().await?;
//! if let Some(first) = tasks.first() {
//!     let toggled = client.toggle_complete(first.id).await?;
//!     println!("{} is now completed={}", toggled.title, toggled.completed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;

pub use api::TaskApi;
pub use client::TaskClient;
pub use taskpro_protocol::DEFAULT_BASE_URL;
pub use error::{Error, Result};
