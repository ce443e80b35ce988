//! Contract Test: GET /websites

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::support::app::build_app;

async fn create_site(app: &axum::Router, name: &str, url: &str) {
    let payload = json!({ "name": name, "url": url });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/websites")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn list(app: &axum::Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/websites")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// GET /websites - 正常系: 初期状態は空配列
#[tokio::test]
async fn test_list_websites_empty() {
    let app = build_app().await;

    let body = list(&app).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

/// GET /websites - 正常系: 登録順で全件返す
#[tokio::test]
async fn test_list_websites_returns_all_in_insertion_order() {
    let app = build_app().await;

    create_site(&app, "First", "https://first.example").await;
    create_site(&app, "Second", "https://second.example").await;

    let body = list(&app).await;
    let sites = body.as_array().unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0]["name"], "First");
    assert_eq!(sites[0]["url"], "https://first.example");
    assert_eq!(sites[1]["name"], "Second");
}
