use crate::router::{create_router, HealthResponse};
use crate::source::ReqwestUserSource;
use crate::test_utils::{init_test_tracing, spawn_data_source, unreachable_data_source, MockBehaviour};
use axum::http::StatusCode;
use axum_test::TestServer;
use common::{load, run, Gender, LoadError, UserRecord, UserSource, ViewState};

fn scenario() -> Vec<UserRecord> {
    vec![
        UserRecord::new(155.0, Gender::Male),
        UserRecord::new(165.0, Gender::Female),
        UserRecord::new(195.0, Gender::Male),
    ]
}

fn users(records: Vec<UserRecord>) -> MockBehaviour {
    MockBehaviour::Users { users: records, announced_total: None }
}

#[tokio::test]
async fn test_count_reads_total() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(users(scenario())).await;
    let source = ReqwestUserSource::new(&base_url);

    assert_eq!(source.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_fetch_users_returns_requested_amount() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(users(scenario())).await;
    let source = ReqwestUserSource::new(&format!("{}/", base_url));

    let fetched = source.fetch_users(2).await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].height, Some(155.0));
}

#[tokio::test]
async fn test_fetch_zero_users_makes_no_request() {
    let _guard = init_test_tracing();
    let base_url = unreachable_data_source().await;
    let source = ReqwestUserSource::new(&base_url);

    assert!(source.fetch_users(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_run_builds_distribution() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(users(scenario())).await;

    let state = run(&ReqwestUserSource::new(&base_url)).await;

    let view = state.view().expect("view should be ready");
    assert_eq!(view.male.counts(), &[1, 0, 0, 0, 1]);
    assert_eq!(view.female.counts(), &[0, 1, 0, 0, 0]);
    assert_eq!(view.total, 3);
}

#[tokio::test]
async fn test_run_with_empty_source() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(users(Vec::new())).await;

    let state = run(&ReqwestUserSource::new(&base_url)).await;

    let view = state.view().expect("view should be ready");
    assert_eq!(view.total, 0);
    assert_eq!(view.male.counts(), &[0, 0, 0, 0, 0]);
    assert_eq!(view.female.counts(), &[0, 0, 0, 0, 0]);
}

#[tokio::test]
async fn test_short_read_is_accepted() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(MockBehaviour::Users {
        users: scenario(),
        announced_total: Some(10),
    })
    .await;

    let loaded = load(&ReqwestUserSource::new(&base_url)).await.unwrap();
    assert_eq!(loaded.len(), 3);
}

#[tokio::test]
async fn test_server_error_fails_view() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(MockBehaviour::Status(StatusCode::INTERNAL_SERVER_ERROR)).await;

    let state = run(&ReqwestUserSource::new(&base_url)).await;
    assert_eq!(state, ViewState::Failed("HTTP error: 500".to_string()));
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let _guard = init_test_tracing();
    let base_url = spawn_data_source(MockBehaviour::Garbage).await;

    let err = ReqwestUserSource::new(&base_url).count().await.unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_unreachable_source_is_request_error() {
    let _guard = init_test_tracing();
    let base_url = unreachable_data_source().await;

    let err = load(&ReqwestUserSource::new(&base_url)).await.unwrap_err();
    assert!(matches!(err, LoadError::Request(_)), "unexpected error: {:?}", err);
}

fn static_bundle() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>dashboard</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();
    dir
}

#[tokio::test]
async fn test_health_check() {
    let dir = static_bundle();
    let server = TestServer::new(create_router(dir.path())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
}

#[tokio::test]
async fn test_serves_static_assets() {
    let dir = static_bundle();
    let server = TestServer::new(create_router(dir.path())).unwrap();

    let response = server.get("/app.js").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "console.log('app');");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = static_bundle();
    let server = TestServer::new(create_router(dir.path())).unwrap();

    for path in ["/dashboard", "/landing"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "<html>dashboard</html>");
    }
}
