use taskpro_protocol::sample::sample_tasks;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    // MOCK_EMPTY=1 starts without the sample tasks.
    let tasks = if std::env::var_os("MOCK_EMPTY").is_some() {
        Vec::new()
    } else {
        sample_tasks()
    };

    taskpro_mock_backend::run(listener, tasks).await
}
