//! In-memory stand-in for the taskpro REST backend.
//!
//! The mock serves the same routes as the real backend under `/api`, keeps
//! tasks in memory, and returns them most recent first. It is used by the API
//! client's integration tests and can be run on its own to try the TUI.
//!
//! # Examples
//!
//! ```no_run
//! use tokio::net::TcpListener;
//!
//! # async fn example() -> std::io::Result<()> {
//! let listener = TcpListener::bind("127.0.0.1:8000").await?;
//! taskpro_mock_backend::run(listener, Vec::new()).await
//! # }
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use taskpro_protocol::{NewTask, Task, TaskId, TaskPatch};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

/// Path prefix every route is mounted under, matching the default base URL.
pub const API_PREFIX: &str = "/api";

/// The backend's in-memory storage.
#[derive(Debug)]
pub struct Store {
    /// Tasks, most recent first.
    tasks: Vec<Task>,
    /// Id handed to the next created task.
    next_id: u64,
}

impl Store {
    /// Creates a store holding `tasks`, which are expected newest first.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id.0 == id)
    }
}

/// Shared handle to the store.
pub type Db = Arc<RwLock<Store>>;

/// Builds the router with an empty store.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Builds the router with a store pre-filled with `tasks`.
pub fn app_with(tasks: Vec<Task>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new(tasks)));
    let routes = Router::new()
        .route("/tasks/", get(list_tasks).post(create_task))
        .route("/tasks/completed/", get(list_completed))
        .route("/tasks/pending/", get(list_pending))
        .route(
            "/tasks/{id}/",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/tasks/{id}/toggle_complete/", post(toggle_complete))
        .with_state(db);
    Router::new().nest(API_PREFIX, routes)
}

/// Serves the backend on `listener` until the process stops.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn run(listener: TcpListener, tasks: Vec<Task>) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, seeded = tasks.len(), "mock backend listening");
    }
    axum::serve(listener, app_with(tasks)).await
}

fn blank_title() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "title": ["Title cannot be empty."] })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "No Task matches the given query." })),
    )
        .into_response()
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.tasks.clone())
}

async fn list_completed(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.iter().filter(|t| t.completed).cloned().collect())
}

async fn list_pending(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.iter().filter(|t| !t.completed).cloned().collect())
}

async fn create_task(State(db): State<Db>, Json(input): Json<NewTask>) -> Response {
    if input.validate().is_err() {
        debug!("rejecting task with blank title");
        return blank_title();
    }

    let mut store = db.write().await;
    let id = TaskId(store.next_id);
    store.next_id += 1;

    let mut task = Task::new(id, input.title.trim(), Utc::now());
    task.description = input.description.unwrap_or_default();
    task.priority = input.priority.unwrap_or_default();
    store.tasks.insert(0, task.clone());

    debug!(%id, "created task");
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn get_task(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    let store = db.read().await;
    match store.tasks.iter().find(|t| t.id.0 == id) {
        Some(task) => Json(task.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Response {
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return blank_title();
    }

    let mut store = db.write().await;
    let Some(task) = store.find_mut(id) else {
        return not_found();
    };
    if let Some(title) = patch.title {
        task.title = title.trim().to_string();
    }
    if let Some(description) = patch.description {
        task.description = description;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(completed) = patch.completed {
        task.completed = completed;
    }
    task.updated_at = Some(Utc::now());
    Json(task.clone()).into_response()
}

async fn delete_task(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    let mut store = db.write().await;
    match store.tasks.iter().position(|t| t.id.0 == id) {
        Some(index) => {
            store.tasks.remove(index);
            debug!(id, "deleted task");
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

async fn toggle_complete(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    let mut store = db.write().await;
    let Some(task) = store.find_mut(id) else {
        return not_found();
    };
    task.completed = !task.completed;
    task.updated_at = Some(Utc::now());
    Json(task.clone()).into_response()
}
