mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use dpa_guard::api::handlers::{health_handler, refresh_handler};

fn server(ctx: &common::TestContext) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/refresh", post(refresh_handler))
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_before_first_fetch_is_degraded() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["dataset"]["status"], "error");
    assert!(json.get("version").is_some());
    assert_eq!(ctx.fetcher.calls(), 0);
}

#[tokio::test]
async fn test_refresh_then_healthy() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.post("/api/refresh").await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["available"], true);
    assert_eq!(json["records"], 4);
    assert!(json["fetched_at"].is_string());

    let json = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["dataset"]["status"], "ok");
}

#[tokio::test]
async fn test_refresh_reuses_fresh_dataset_unless_forced() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    server.post("/api/refresh").await;
    server.post("/api/refresh").await;
    assert_eq!(ctx.fetcher.calls(), 1);

    server
        .post("/api/refresh")
        .add_query_param("force", true)
        .await
        .assert_status_ok();
    assert_eq!(ctx.fetcher.calls(), 2);
}

#[tokio::test]
async fn test_refresh_failure_reports_unavailable() {
    let ctx = common::create_test_state(common::StubFetcher::failing(), Some(common::SOURCE_URL));
    let server = server(&ctx);

    let json = server.post("/api/refresh").await.json::<serde_json::Value>();
    assert_eq!(json["available"], false);
    assert_eq!(json["records"], 0);
    assert!(json.get("fetched_at").is_none());
}
