#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use todo_board::{app_router, connect_pool, ensure_todos_table, AppConfig, AppState};
use tower::ServiceExt;

/// Router over a fresh in-memory database. The pool holds a single connection so every
/// request sees the same data.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = connect_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    ensure_todos_table(&pool).await.expect("todos table");
    let config = AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "STATIC_DIR" => Some(concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string()),
        _ => None,
    })
    .expect("test config");
    let state = AppState::new(pool.clone()).expect("templates");
    (app_router(state, &config), pool)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec(), headers)
}

pub async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body, _) = send(app, req).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send_json(app, req).await
}

pub async fn put_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send_json(app, req).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    send_json(app, req).await
}

pub async fn delete_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap();
    send_json(app, req).await
}

/// POST an urlencoded form; returns status and `Location` header.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, headers) = send(app, req).await;
    let location = headers
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (status, location)
}

pub async fn get_page(app: &Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let (status, body, headers) = send(app, req).await;
    let location = headers
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (status, String::from_utf8(body).expect("utf-8 page"), location)
}
