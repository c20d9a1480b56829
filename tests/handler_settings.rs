mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dpa_guard::api::handlers::{
    get_settings_handler, get_source_handler, put_settings_handler, put_source_handler,
    status_handler,
};
use serde_json::json;

const MASKED_SOURCE_URL: &str = "https://sheet.example/export?***";

fn server(ctx: &common::TestContext) -> TestServer {
    let app = Router::new()
        .route(
            "/api/settings",
            get(get_settings_handler).put(put_settings_handler),
        )
        .route(
            "/api/settings/source",
            get(get_source_handler).put(put_source_handler),
        )
        .route("/api/status", get(status_handler))
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_default_source_is_reported() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/settings/source").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["source_url"],
        MASKED_SOURCE_URL
    );
}

#[tokio::test]
async fn test_unconfigured_source_is_null() {
    let ctx = common::create_test_state(common::StubFetcher::serving(common::SHEET), None);
    let server = server(&ctx);

    let response = server.get("/api/settings/source").await;
    assert!(response.json::<serde_json::Value>()["source_url"].is_null());
}

#[tokio::test]
async fn test_setting_source_enables_lookups() {
    let ctx = common::create_test_state(common::StubFetcher::serving(common::SHEET), None);
    let server = server(&ctx);

    let response = server
        .put("/api/settings/source")
        .json(&json!({ "source_url": "https://other.example/list.csv" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["source_url"],
        "https://other.example/list.csv"
    );

    let response = server
        .get("/api/status")
        .add_query_param("url", "https://www.khanacademy.org")
        .await;
    assert_eq!(response.json::<serde_json::Value>()["category"], "approved");
    assert_eq!(ctx.fetcher.calls(), 1);
}

#[tokio::test]
async fn test_setting_source_invalidates_cache() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let server = &server;
    let lookup = move || async move {
        server
            .get("/api/status")
            .add_query_param("url", "https://www.khanacademy.org")
            .await
    };

    lookup().await;
    lookup().await;
    assert_eq!(ctx.fetcher.calls(), 1);

    server
        .put("/api/settings/source")
        .json(&json!({ "source_url": "https://sheet.example/v2.csv" }))
        .await
        .assert_status_ok();

    lookup().await;
    assert_eq!(ctx.fetcher.calls(), 2);
}

#[tokio::test]
async fn test_clearing_source_falls_back_to_default() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    server
        .put("/api/settings/source")
        .json(&json!({ "source_url": "https://sheet.example/v2.csv" }))
        .await;
    let response = server
        .put("/api/settings/source")
        .json(&json!({ "source_url": null }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["source_url"],
        MASKED_SOURCE_URL
    );
}

#[tokio::test]
async fn test_invalid_source_is_rejected() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .put("/api/settings/source")
        .json(&json!({ "source_url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_source_query_is_masked() {
    let ctx = common::create_test_state(common::StubFetcher::serving(common::SHEET), None);
    let server = server(&ctx);

    let response = server
        .put("/api/settings/source")
        .json(&json!({ "source_url": "https://sheet.example/pub?key=secret-token" }))
        .await;
    response.assert_status_ok();
    assert!(!response.text().contains("secret-token"));

    let response = server.get("/api/settings").await;
    assert_eq!(
        response.json::<serde_json::Value>()["source_url"],
        "https://sheet.example/pub?***"
    );
}

#[tokio::test]
async fn test_settings_round_trip_with_form_url() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/settings").await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source_url"], MASKED_SOURCE_URL);
    assert!(json["form_url"].is_null());

    let response = server
        .put("/api/settings")
        .json(&json!({
            "source_url": "https://sheet.example/v2.csv",
            "form_url": "https://forms.example/review"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "source_url": "https://sheet.example/v2.csv",
            "form_url": "https://forms.example/review"
        })
    );

    let response = server.get("/api/settings").await;
    assert_eq!(
        response.json::<serde_json::Value>()["form_url"],
        "https://forms.example/review"
    );
}

#[tokio::test]
async fn test_unlisted_status_links_review_form() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    server
        .put("/api/settings")
        .json(&json!({
            "source_url": common::SOURCE_URL,
            "form_url": "https://forms.example/review"
        }))
        .await
        .assert_status_ok();

    let response = server
        .get("/api/status")
        .add_query_param("url", "https://unknown-site.example")
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "unlisted");
    assert_eq!(json["form_url"], "https://forms.example/review");

    let response = server
        .get("/api/status")
        .add_query_param("url", "https://www.khanacademy.org")
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["category"], "approved");
    assert!(json.get("form_url").is_none());
}

#[tokio::test]
async fn test_invalid_form_url_is_rejected() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .put("/api/settings")
        .json(&json!({ "form_url": "review form" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
