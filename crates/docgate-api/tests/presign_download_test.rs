//! Download credential endpoint integration tests.
//!
//! Run with: `cargo test -p docgate-api --test presign_download_test`

mod helpers;

use helpers::{auth_header, setup_test_app};
use serde_json::{json, Value};

const KEY: &str = "temp-files/blogs/education/1712345-abc.pdf";

#[tokio::test]
async fn issues_url_for_existing_object() {
    let app = setup_test_app();
    app.storage.insert_object(KEY);

    let response = app
        .client()
        .post("/api/v1/presign/download")
        .add_header("Authorization", auth_header())
        .json(&json!({ "key": KEY }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["url"].as_str().unwrap().contains(KEY));
    // No expiry requested, none echoed back.
    assert!(body.get("expiresIn").is_none());
}

#[tokio::test]
async fn echoes_requested_expiry() {
    let app = setup_test_app();
    app.storage.insert_object(KEY);

    let response = app
        .client()
        .post("/api/v1/presign/download")
        .add_header("Authorization", auth_header())
        .json(&json!({ "key": KEY, "expiresIn": 120 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["expiresIn"], 120);
    assert!(body["url"].as_str().unwrap().contains("expires=120"));
}

#[tokio::test]
async fn absent_object_is_a_404() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/api/v1/presign/download")
        .add_header("Authorization", auth_header())
        .json(&json!({ "key": KEY }))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn missing_or_blank_key_is_rejected() {
    let app = setup_test_app();

    for body in [json!({}), json!({ "key": "   " })] {
        let response = app
            .client()
            .post("/api/v1/presign/download")
            .add_header("Authorization", auth_header())
            .json(&body)
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(body["error"].as_str().unwrap().contains("'key'"));
    }
}

#[tokio::test]
async fn unknown_disposition_is_rejected() {
    let app = setup_test_app();
    app.storage.insert_object(KEY);

    let response = app
        .client()
        .post("/api/v1/presign/download")
        .add_header("Authorization", auth_header())
        .json(&json!({ "key": KEY, "disposition": "download" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("disposition"));
}

#[tokio::test]
async fn filename_is_forwarded_with_extension_from_key() {
    let app = setup_test_app();
    app.storage.insert_object(KEY);

    let response = app
        .client()
        .post("/api/v1/presign/download")
        .add_header("Authorization", auth_header())
        .json(&json!({ "key": KEY, "filename": "transcript", "disposition": "inline" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let url = body["url"].as_str().unwrap();
    assert!(url.contains("inline"));
    assert!(url.contains("transcript.pdf"));
}
