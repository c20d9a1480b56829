mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dpa_guard::api::handlers::{record_handler, records_list_handler};

fn server(ctx: &common::TestContext) -> TestServer {
    let app = Router::new()
        .route("/api/records", get(records_list_handler))
        .route("/api/records/{id}", get(record_handler))
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_all_records() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/records").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["total_items"], 4);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 4);
    assert_eq!(json["items"][0]["id"], "khan");
}

#[tokio::test]
async fn test_search_by_vendor() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .get("/api/records")
        .add_query_param("q", "instructure")
        .await;

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "canvas");
}

#[tokio::test]
async fn test_pagination() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server
        .get("/api/records")
        .add_query_param("page", 2)
        .add_query_param("page_size", 3)
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["total_pages"], 2);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "kami");
}

#[tokio::test]
async fn test_invalid_pagination() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/records").add_query_param("page", 0).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_record_by_id() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/records/seesaw").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["software_name"], "Seesaw");
    assert_eq!(json["current_dpa_status"], "Requested");
}

#[tokio::test]
async fn test_get_unknown_record() {
    let ctx = common::loaded_state();
    let server = server(&ctx);

    let response = server.get("/api/records/nope").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_records_unavailable_without_dataset() {
    let ctx = common::create_test_state(common::StubFetcher::failing(), Some(common::SOURCE_URL));
    let server = server(&ctx);

    let response = server.get("/api/records").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unavailable");
    assert_eq!(json["error"]["message"], "DPA data not yet loaded.");
}
