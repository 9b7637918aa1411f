//! End-to-end tests for the API client against the mock backend.

use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use taskpro_api::{Error, TaskApi, TaskClient};
use taskpro_protocol::sample::sample_tasks;
use taskpro_protocol::{NewTask, Priority, Task, TaskId, TaskPatch};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn client_for(tasks: Vec<Task>) -> TaskClient {
    let addr = serve(taskpro_mock_backend::app_with(tasks)).await;
    TaskClient::new(format!("http://{addr}/api")).unwrap()
}

#[tokio::test]
async fn lists_tasks_in_server_order() {
    let client = client_for(sample_tasks()).await;

    let tasks = client.list_tasks().await.unwrap();
    let ids: Vec<u64> = tasks.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn crud_lifecycle() {
    let client = client_for(Vec::new()).await;

    let created = client
        .create_task(
            &NewTask::new("Buy milk")
                .with_description("Two liters")
                .with_priority(Priority::Low),
        )
        .await
        .unwrap();
    assert_eq!(created.id, TaskId(1));
    assert_eq!(created.description(), Some("Two liters"));
    assert!(!created.completed);

    let fetched = client.get_task(created.id).await.unwrap();
    assert_eq!(fetched.title, "Buy milk");

    let toggled = client.toggle_complete(created.id).await.unwrap();
    assert!(toggled.completed);
    assert_eq!(client.list_completed().await.unwrap().len(), 1);
    assert!(client.list_pending().await.unwrap().is_empty());

    let patched = client
        .update_task(created.id, &TaskPatch::priority(Priority::High))
        .await
        .unwrap();
    assert_eq!(patched.priority, Priority::High);
    assert!(patched.completed);

    client.delete_task(created.id).await.unwrap();
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_task_is_not_found() {
    let client = client_for(Vec::new()).await;

    assert!(matches!(client.get_task(TaskId(7)).await, Err(Error::NotFound)));
    assert!(matches!(client.delete_task(TaskId(7)).await, Err(Error::NotFound)));
    assert!(matches!(
        client.toggle_complete(TaskId(7)).await,
        Err(Error::NotFound)
    ));
}

#[tokio::test]
async fn blank_title_is_rejected_by_backend() {
    let client = client_for(Vec::new()).await;

    let err = client.create_task(&NewTask::new("  ")).await.unwrap_err();
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Title cannot be empty."));
        }
        other => panic!("expected HTTP 400, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Grab a free port, then close it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = TaskClient::new(format!("http://{addr}/api")).unwrap();

    let err = client.list_tasks().await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}

#[tokio::test]
async fn paginated_envelope_is_a_decode_error() {
    let router = Router::new().route(
        "/api/tasks/",
        get(|| async { Json(serde_json::json!({ "count": 0, "results": [] })) }),
    );
    let addr = serve(router).await;
    let client = TaskClient::new(format!("http://{addr}/api")).unwrap();

    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let router = Router::new().route(
        "/api/tasks/",
        get(|| async { (axum::http::StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let addr = serve(router).await;
    let client = TaskClient::new(format!("http://{addr}/api/")).unwrap();

    let err = client.list_tasks().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn client_works_through_the_trait() {
    async fn count<A: TaskApi>(api: &A) -> usize {
        api.list_tasks().await.map(|t| t.len()).unwrap_or(0)
    }

    let client = client_for(sample_tasks()).await;
    assert_eq!(count(&client).await, 5);
}
