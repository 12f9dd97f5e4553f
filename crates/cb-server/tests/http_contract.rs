//! HTTP-level tests for the comment service contract.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cb_core::comment::{CommentStore, MemoryStore};
use cb_server::build_router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_router(store.clone() as Arc<dyn CommentStore>);
    (app, store)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = build_test_app();
    let resp = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (app, _) = build_test_app();
    let resp = app.oneshot(empty_request("GET", "/comments")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn test_create_returns_201() {
    let (app, store) = build_test_app();
    let resp = app
        .oneshot(json_request("POST", "/comments", json!({ "text": "hello" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["text"], "hello");
    assert!(body["createdAt"].is_string());
    assert!(body.get("updatedAt").is_none());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (app, store) = build_test_app();
    store.create("first").await.unwrap();
    store.create("second").await.unwrap();

    let resp = app.oneshot(empty_request("GET", "/comments")).await.unwrap();
    let body = body_json(resp).await;
    let texts: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn test_update_existing() {
    let (app, store) = build_test_app();
    let created = store.create("hello").await.unwrap();

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/comments/{}", created.id),
            json!({ "text": "edited" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["text"], "edited");
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_update_unknown_is_404() {
    let (app, store) = build_test_app();
    let resp = app
        .oneshot(json_request("PUT", "/comments/99", json!({ "text": "x" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Comment not found");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_non_numeric_id_is_404() {
    let (app, _) = build_test_app();
    let resp = app
        .oneshot(empty_request("DELETE", "/comments/not-a-number"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (app, store) = build_test_app();
    let created = store.create("hello").await.unwrap();
    let uri = format!("/comments/{}", created.id);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let resp = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Comment not found");
}

#[tokio::test]
async fn test_non_numeric_id_beats_malformed_body() {
    let (app, _) = build_test_app();
    let req = Request::builder()
        .method("PUT")
        .uri("/comments/abc")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Comment not found");
}

#[tokio::test]
async fn test_malformed_update_body_has_message() {
    let (app, store) = build_test_app();
    let created = store.create("hello").await.unwrap();

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/comments/{}", created.id),
            json!({ "body": "wrong field" }),
        ))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
    assert!(body_json(resp).await["message"].is_string());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_missing_body_is_rejected() {
    let (app, store) = build_test_app();
    let resp = app
        .oneshot(json_request("POST", "/comments", json!({ "body": "wrong field" })))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
    assert!(store.is_empty().await);
}
