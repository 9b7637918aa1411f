use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use taskpro_mock_backend::{app, app_with};
use taskpro_protocol::sample::sample_tasks;
use taskpro_protocol::{Priority, Task};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_tasks_empty() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/api/tasks/")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Vec<Task> = body_json(resp).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn list_tasks_seeded_newest_first() {
    let app = app_with(sample_tasks());
    let resp = send(&app, empty_request("GET", "/api/tasks/")).await;

    let tasks: Vec<Task> = body_json(resp).await;
    let ids: Vec<u64> = tasks.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn completed_and_pending_listings() {
    let app = app_with(sample_tasks());

    let completed: Vec<Task> =
        body_json(send(&app, empty_request("GET", "/api/tasks/completed/")).await).await;
    let pending: Vec<Task> =
        body_json(send(&app, empty_request("GET", "/api/tasks/pending/")).await).await;

    assert!(completed.iter().all(|t| t.completed));
    assert!(pending.iter().all(|t| !t.completed));
    assert_eq!(completed.len() + pending.len(), 5);
}

// --- create ---

#[tokio::test]
async fn create_task_returns_201_and_prepends() {
    let app = app_with(sample_tasks());
    let resp = send(
        &app,
        json_request(
            "POST",
            "/api/tasks/",
            r#"{"title":"Write report","priority":"high"}"#,
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Task = body_json(resp).await;
    assert_eq!(task.id.0, 6);
    assert_eq!(task.title, "Write report");
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);

    let tasks: Vec<Task> = body_json(send(&app, empty_request("GET", "/api/tasks/")).await).await;
    assert_eq!(tasks[0].id, task.id);
}

#[tokio::test]
async fn create_task_defaults_priority_to_medium() {
    let app = app();
    let resp = send(&app, json_request("POST", "/api/tasks/", r#"{"title":"x"}"#)).await;
    let task: Task = body_json(resp).await;
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.description(), None);
}

#[tokio::test]
async fn create_task_blank_title_returns_400() {
    let app = app();
    let resp = send(&app, json_request("POST", "/api/tasks/", r#"{"title":"   "}"#)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["title"][0], "Title cannot be empty.");
}

// --- get / update / toggle / delete ---

#[tokio::test]
async fn get_missing_task_returns_404() {
    let app = app();
    let resp = send(&app, empty_request("GET", "/api/tasks/99/")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_updates_only_given_fields() {
    let app = app_with(sample_tasks());
    let resp = send(
        &app,
        json_request("PATCH", "/api/tasks/4/", r#"{"priority":"low"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = body_json(resp).await;
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.title, "Review pull requests");
}

#[tokio::test]
async fn toggle_flips_completed() {
    let app = app_with(sample_tasks());

    let first: Task =
        body_json(send(&app, empty_request("POST", "/api/tasks/5/toggle_complete/")).await).await;
    assert!(first.completed);

    let second: Task =
        body_json(send(&app, empty_request("POST", "/api/tasks/5/toggle_complete/")).await).await;
    assert!(!second.completed);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = app_with(sample_tasks());

    let resp = send(&app, empty_request("DELETE", "/api/tasks/2/")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, empty_request("GET", "/api/tasks/2/")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, empty_request("DELETE", "/api/tasks/2/")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
