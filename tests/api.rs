mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use todo_board::{TodoDraft, TodoService};

#[tokio::test]
async fn create_title_only_returns_exact_record() {
    let (app, _pool) = test_app().await;
    let (status, body) = post_json(&app, "/api/todos/", r#"{"title":"Buy milk"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "title": "Buy milk",
            "category": null,
            "description": null,
            "due_date": null,
            "completed": false
        })
    );
}

#[tokio::test]
async fn read_after_create_matches() {
    let (app, _pool) = test_app().await;
    let payloads = [
        r#"{"title":"Buy milk"}"#,
        r#"{"title":"Dentist","category":"health","description":"bring card","due_date":"2024-05-01T09:30:00","completed":true}"#,
        r#"{"title":"Flight","due_date":"2024-07-10T18:00:00+02:00"}"#,
    ];
    for payload in payloads {
        let (status, created) = post_json(&app, "/api/todos/", payload).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();
        let (status, read) = get_json(&app, &format!("/api/todos/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(read, created);
    }
    let (_, flight) = get_json(&app, "/api/todos/3").await;
    assert_eq!(flight["due_date"], "2024-07-10T16:00:00");
}

#[tokio::test]
async fn missing_title_is_unprocessable() {
    let (app, pool) = test_app().await;
    let (status, body) = post_json(&app, "/api/todos/", r#"{"category":"x"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) = post_json(&app, "/api/todos/", r#"{"title":"x","due_date":"soon"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) = post_json(&app, "/api/todos/", r#"{"title": 5}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) = post_json(&app, "/api/todos/", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(TodoService::count(&mut conn).await.unwrap(), 0);
}

#[tokio::test]
async fn list_respects_skip_and_limit() {
    let (app, pool) = test_app().await;
    {
        let mut conn = pool.acquire().await.unwrap();
        for i in 0..150 {
            TodoService::create(&mut conn, &TodoDraft::titled(format!("todo {i}")))
                .await
                .unwrap();
        }
    }
    let (status, body) = get_json(&app, "/api/todos/?skip=100&limit=100").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(items[0]["id"], 101);

    let (_, body) = get_json(&app, "/api/todos/").await;
    assert_eq!(body.as_array().unwrap().len(), 100);

    let (_, body) = get_json(&app, "/api/todos?limit=5").await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let (status, _) = get_json(&app, "/api/todos/?skip=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get_json(&app, "/api/todos/?limit=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn read_missing_is_not_found() {
    let (app, _pool) = test_app().await;
    let (status, body) = get_json(&app, "/api/todos/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = get_json(&app, "/api/todos/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (app, _pool) = test_app().await;
    let (_, created) = post_json(
        &app,
        "/api/todos/",
        r#"{"title":"Paint fence","category":"house","description":"white","due_date":"2024-08-01T12:00:00"}"#,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let (status, updated) = put_json(
        &app,
        &format!("/api/todos/{id}"),
        r#"{"title":"Paint fence green","completed":true}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({
            "id": id,
            "title": "Paint fence green",
            "category": null,
            "description": null,
            "due_date": null,
            "completed": true
        })
    );
    let (_, read) = get_json(&app, &format!("/api/todos/{id}")).await;
    assert_eq!(read, updated);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let (app, _pool) = test_app().await;
    let (status, body) = put_json(&app, "/api/todos/999", r#"{"title":"ghost"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    let (_, list) = get_json(&app, "/api/todos/").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_succeeds_whether_or_not_row_exists() {
    let (app, _pool) = test_app().await;
    post_json(&app, "/api/todos/", r#"{"title":"keep"}"#).await;
    post_json(&app, "/api/todos/", r#"{"title":"drop"}"#).await;

    let (status, body) = delete_json(&app, "/api/todos/999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Todo deleted" }));
    let (_, list) = get_json(&app, "/api/todos/").await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, body) = delete_json(&app, "/api/todos/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted");
    let (_, list) = get_json(&app, "/api/todos/").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["title"], "keep");
}

#[tokio::test]
async fn common_routes_respond() {
    let (app, _pool) = test_app().await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (_, body) = get_json(&app, "/version").await;
    assert_eq!(body["name"], "todo-board");

    let (status, body) = get_json(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/todos/"].is_object());
}
