mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use dpa_guard::api::handlers::{navigation_handler, tab_closed_handler, tab_indicator_handler};
use serde_json::json;

fn server(ctx: &common::TestContext) -> TestServer {
    let app = Router::new()
        .route("/api/navigation", post(navigation_handler))
        .route("/api/tabs/{tab_id}/indicator", get(tab_indicator_handler))
        .route("/api/tabs/{tab_id}", delete(tab_closed_handler))
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_navigation_returns_and_records_indicator() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .post("/api/navigation")
        .json(&json!({ "tab_id": 7, "url": "https://www.kamiapp.com/pdf" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "staff_only");
    assert_eq!(json["installed"], false);

    let response = server.get("/api/tabs/7/indicator").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["category"], "staff_only");
}

#[tokio::test]
async fn test_navigation_to_installed_app() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .post("/api/navigation")
        .json(&json!({
            "tab_id": 1,
            "url": "https://apps.apple.com/us/app/seesaw/id930565184"
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "pending");
    assert_eq!(json["installed"], true);
}

#[tokio::test]
async fn test_navigation_ignores_non_http_pages() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .post("/api/navigation")
        .json(&json!({ "tab_id": 3, "url": "chrome://newtab" }))
        .await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .get("/api/tabs/3/indicator")
        .await
        .assert_status_not_found();
    assert_eq!(ctx.fetcher.calls(), 0);
}

#[tokio::test]
async fn test_navigation_without_dataset_is_neutral() {
    let ctx = common::create_test_state(common::StubFetcher::failing(), Some(common::SOURCE_URL));
    let server = server(&ctx);

    let response = server
        .post("/api/navigation")
        .json(&json!({ "tab_id": 2, "url": "https://www.khanacademy.org" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "default");
    assert_eq!(json["installed"], false);
}

#[tokio::test]
async fn test_navigation_rejects_empty_url() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .post("/api/navigation")
        .json(&json!({ "tab_id": 2, "url": "" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_closed_tab_is_forgotten() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    server
        .post("/api/navigation")
        .json(&json!({ "tab_id": 5, "url": "https://www.khanacademy.org" }))
        .await
        .assert_status_ok();

    server
        .delete("/api/tabs/5")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .get("/api/tabs/5/indicator")
        .await
        .assert_status_not_found();
}
