mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use bookstore::api::handlers::{checkout_handler, download_handler};

fn make_server(download_requires_receipt: bool) -> (TestServer, common::TestContext) {
    let ctx = common::create_test_state(download_requires_receipt);
    let app = Router::new()
        .route("/api/checkout", post(checkout_handler))
        .route("/api/books/{id}/download", get(download_handler))
        .with_state(ctx.state.clone());
    (TestServer::new(app).unwrap(), ctx)
}

async fn buy(server: &TestServer, book_ids: &[i64]) -> String {
    let response = server
        .post("/api/checkout")
        .json(&common::valid_checkout_body(book_ids))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["receipt"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_download_with_receipt() {
    let (server, _ctx) = make_server(true);
    let receipt = buy(&server, &[2]).await;

    let response = server
        .get("/api/books/2/download")
        .add_query_param("receipt", &receipt)
        .await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"spice must flow");
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/epub+zip"
    );
    assert_eq!(
        response.header("content-disposition").to_str().unwrap(),
        "attachment; filename=\"dune.epub\""
    );
}

#[tokio::test]
async fn test_download_pdf_content_type() {
    let (server, _ctx) = make_server(false);

    let response = server.get("/api/books/1/download").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/pdf"
    );
}

#[tokio::test]
async fn test_download_without_receipt_forbidden() {
    let (server, _ctx) = make_server(true);

    let response = server.get("/api/books/2/download").await;

    response.assert_status(StatusCode::FORBIDDEN);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "forbidden");
}

#[tokio::test]
async fn test_download_receipt_for_other_book_forbidden() {
    let (server, _ctx) = make_server(true);
    let receipt = buy(&server, &[2]).await;

    let response = server
        .get("/api/books/3/download")
        .add_query_param("receipt", &receipt)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_download_unknown_receipt_forbidden() {
    let (server, _ctx) = make_server(true);

    let response = server
        .get("/api/books/2/download")
        .add_query_param("receipt", "AAAAAAAAAAAAAAAA")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_download_unknown_book_not_found_before_receipt_check() {
    let (server, _ctx) = make_server(true);

    let response = server.get("/api/books/999/download").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["kind"], "book_not_found");
}

#[tokio::test]
async fn test_download_non_numeric_id_uses_error_envelope() {
    let (server, _ctx) = make_server(false);

    let response = server.get("/api/books/abc/download").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "id");
}

#[tokio::test]
async fn test_download_missing_file_not_found() {
    let (server, _ctx) = make_server(false);

    let response = server.get("/api/books/5/download").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_download_open_mode() {
    let (server, _ctx) = make_server(false);

    let response = server.get("/api/books/4/download").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"cyberspace");
}
