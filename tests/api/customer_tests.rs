//! Customer API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{assert_empty, read_json, TestApp};

const CUSTOMER_URL: &str = "/api/v1/customer";

#[tokio::test]
async fn create_then_get_round_trip() {
    let app = TestApp::new();

    let response = app
        .post_json(CUSTOMER_URL, &json!({"name": "John Thompson"}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    let id = created["id"].as_str().unwrap();

    let fetched = read_json(app.get(&format!("{CUSTOMER_URL}/{id}")).await).await;
    assert_eq!(fetched["name"], "John Thompson");
}

#[tokio::test]
async fn create_with_short_name_is_400() {
    let app = TestApp::new();

    let response = app.post_json(CUSTOMER_URL, &json!({"name": "Jo"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["errors"][0]["field"], "name");
}

#[tokio::test]
async fn update_and_delete_respond_no_content() {
    let app = TestApp::new();

    let created = read_json(
        app.post_json(CUSTOMER_URL, &json!({"name": "John Thompson"}))
            .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{CUSTOMER_URL}/{id}");

    let response = app.put_json(&uri, &json!({"name": "Jane Doe III"})).await;
    assert_empty(response, StatusCode::NO_CONTENT).await;

    assert_empty(app.delete(&uri).await, StatusCode::NO_CONTENT).await;
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_unknown_customer_is_404() {
    let app = TestApp::new();

    let response = app.get(&format!("{CUSTOMER_URL}/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
