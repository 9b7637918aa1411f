//! Task backend client implementation.
//!
//! This module provides the [`TaskClient`] struct for talking to the task
//! backend's REST API. Every method issues exactly one HTTP request and
//! returns the parsed response body, or an [`Error`] describing why the
//! exchange failed.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use taskpro_protocol::endpoint::normalize_base_url;
use taskpro_protocol::{NewTask, Task, TaskId, TaskPatch};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// HTTP client for the task backend.
///
/// The client is cheap to clone: clones share the same connection pool.
///
/// # Examples
///
/// ```no_run
/// use taskpro_api::TaskClient;
///
/// # async fn example() -> taskpro_api::Result<()> {
/// let client = TaskClient::new("http://localhost:8000/api")?;
///
/// for task in client.list_tasks().await? {
///     println!("#{} {}", task.id, task.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TaskClient {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    base_url: String,
}

impl TaskClient {
    /// Creates a new client for the backend at `base_url`.
    ///
    /// A trailing `/` on the base URL is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the URL is empty or does not use
    /// the `http` or `https` scheme, and [`Error::Build`] if the HTTP client
    /// cannot be initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskpro_api::TaskClient;
    ///
    /// let client = TaskClient::new("http://localhost:8000/api/").unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8000/api");
    ///
    /// assert!(TaskClient::new("localhost:8000").is_err());
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let base_url = normalize_base_url(&raw)
            .map(str::to_string)
            .map_err(|reason| Error::InvalidBaseUrl {
                url: raw.clone(),
                reason: reason.to_string(),
            })?;
        debug!(%base_url, "creating task backend client");

        let http = reqwest::Client::builder()
            .user_agent(concat!("taskpro/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Build)?;

        Ok(Self { http, base_url })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every task, in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the backend cannot be reached,
    /// [`Error::Http`] on a non-success status, and [`Error::Decode`] if the
    /// body is not a JSON array of tasks.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.request(Method::GET, "/tasks/", None::<&()>).await
    }

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the task does not exist, otherwise the
    /// same errors as [`list_tasks`](Self::list_tasks).
    #[instrument(skip(self), fields(%id))]
    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        self.request(Method::GET, &format!("/tasks/{id}/"), None::<&()>)
            .await
    }

    /// Creates a task. The backend assigns its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] with status 400 if the backend rejects the
    /// payload (for instance a blank title), otherwise the same errors as
    /// [`list_tasks`](Self::list_tasks).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskpro_api::TaskClient;
    /// use taskpro_protocol::{NewTask, Priority};
    ///
    /// # async fn example() -> taskpro_api::Result<()> {
    /// let client = TaskClient::new("http://localhost:8000/api")?;
    /// let task = client
    ///     .create_task(&NewTask::new("Buy milk").with_priority(Priority::Low))
    ///     .await?;
    /// assert!(!task.completed);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create_task(&self, payload: &NewTask) -> Result<Task> {
        self.request(Method::POST, "/tasks/", Some(payload)).await
    }

    /// Partially updates a task. Only the fields set in `patch` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the task does not exist, otherwise the
    /// same errors as [`create_task`](Self::create_task).
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task> {
        self.request(Method::PATCH, &format!("/tasks/{id}/"), Some(patch))
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the task does not exist,
    /// [`Error::Transport`] or [`Error::Http`] otherwise.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        let url = self.url(&format!("/tasks/{id}/"));
        debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Error::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;
        check_status(status, body).map(|_| ())
    }

    /// Flips the completion flag of a task on the backend.
    ///
    /// The new value is decided by the backend; the returned task carries it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the task does not exist, otherwise the
    /// same errors as [`list_tasks`](Self::list_tasks).
    #[instrument(skip(self), fields(%id))]
    pub async fn toggle_complete(&self, id: TaskId) -> Result<Task> {
        self.request(
            Method::POST,
            &format!("/tasks/{id}/toggle_complete/"),
            None::<&()>,
        )
        .await
    }

    /// Fetches only the completed tasks.
    ///
    /// # Errors
    ///
    /// Same as [`list_tasks`](Self::list_tasks).
    #[instrument(skip(self))]
    pub async fn list_completed(&self) -> Result<Vec<Task>> {
        self.request(Method::GET, "/tasks/completed/", None::<&()>)
            .await
    }

    /// Fetches only the pending tasks.
    ///
    /// # Errors
    ///
    /// Same as [`list_tasks`](Self::list_tasks).
    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> Result<Vec<Task>> {
        self.request(Method::GET, "/tasks/pending/", None::<&()>)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends one request and decodes the JSON response body.
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%method, %url, "sending request");

        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Error::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(Error::Transport)?;
        let text = check_status(status, text)?;

        serde_json::from_str(&text).map_err(|err| {
            warn!(error = %err, "failed to decode response body");
            Error::Decode(err)
        })
    }
}

/// Maps a response status to an error, passing the body through on success.
fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        debug!(status = status.as_u16(), "request succeeded");
        return Ok(body);
    }
    if status == StatusCode::NOT_FOUND {
        debug!("resource not found");
        return Err(Error::NotFound);
    }
    warn!(status = status.as_u16(), %body, "request failed");
    Err(Error::Http {
        status: status.as_u16(),
        body,
    })
}
