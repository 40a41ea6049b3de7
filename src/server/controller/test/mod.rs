//! HTTP-level tests driving the full router against an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(db.clone()))
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends a request and returns the status with the raw body.
async fn send_raw(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

/// Sends a request and parses the body as JSON, `Value::Null` when empty.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(db, request).await;

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Sorted keys of a JSON object, for asserting a projection's exact shape.
fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}
