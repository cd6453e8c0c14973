use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::{UserPage, UserRecord};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Behaviour of the in-process data source.
#[derive(Clone)]
pub enum MockBehaviour {
    /// Serve `users`, announcing `announced_total` (defaults to the real count).
    Users { users: Vec<UserRecord>, announced_total: Option<u64> },
    /// Answer every request with this status.
    Status(StatusCode),
    /// Answer 200 with a body that is not JSON.
    Garbage,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    limit: u64,
    #[serde(default)]
    skip: u64,
}

async fn list_users(State(behaviour): State<Arc<MockBehaviour>>, Query(query): Query<ListQuery>) -> Response {
    match behaviour.as_ref() {
        MockBehaviour::Users { users, announced_total } => {
            // Same as the real data source: limit=0 returns everything
            let limit = if query.limit == 0 { users.len() as u64 } else { query.limit };
            let page = UserPage {
                users: users.iter().skip(query.skip as usize).take(limit as usize).cloned().collect(),
                total: announced_total.unwrap_or(users.len() as u64),
                skip: query.skip,
                limit,
            };
            Json(page).into_response()
        }
        MockBehaviour::Status(status) => (*status, "unavailable").into_response(),
        MockBehaviour::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
    }
}

/// Starts a mock data source on an ephemeral port and returns its base URL.
pub async fn spawn_data_source(behaviour: MockBehaviour) -> String {
    let app = Router::new()
        .route("/users", get(list_users))
        .with_state(Arc::new(behaviour));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock data source");
    let addr = listener.local_addr().expect("Mock data source has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock data source failed");
    });

    format!("http://{}", addr)
}

/// Returns a base URL nothing is listening on.
pub async fn unreachable_data_source() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
