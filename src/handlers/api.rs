//! JSON API handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::DbConn;
use crate::models::{ListParams, MessageBody, Todo, TodoPayload};
use crate::response::{deleted, ok_json};
use crate::service::{RequestValidator, TodoService};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/api/todos/",
    tag = "todos",
    request_body = TodoPayload,
    responses(
        (status = 200, description = "Created todo with its id", body = Todo),
        (status = 422, description = "Missing title or a field that does not coerce"),
    )
)]
pub async fn create_todo(
    mut conn: DbConn,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let draft = RequestValidator::validate(payload)?;
    let todo = TodoService::create(&mut conn, &draft).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok(ok_json(todo))
}

#[utoipa::path(
    get,
    path = "/api/todos/",
    tag = "todos",
    params(ListParams),
    responses((status = 200, description = "Todos in id order", body = Vec<Todo>))
)]
pub async fn list_todos(
    mut conn: DbConn,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let todos = TodoService::list(&mut conn, params.skip, params.limit).await?;
    Ok(ok_json(todos))
}

#[utoipa::path(
    get,
    path = "/api/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = Todo),
        (status = 404, description = "No todo with this id"),
    )
)]
pub async fn read_todo(
    mut conn: DbConn,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let todo = TodoService::read(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))?;
    Ok(ok_json(todo))
}

#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    request_body = TodoPayload,
    responses(
        (status = 200, description = "The replaced todo", body = Todo),
        (status = 404, description = "No todo with this id"),
        (status = 422, description = "Missing title or a field that does not coerce"),
    )
)]
pub async fn update_todo(
    mut conn: DbConn,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let draft = RequestValidator::validate(payload)?;
    let todo = TodoService::update(&mut conn, id, &draft).await?;
    tracing::info!(id, "todo replaced");
    Ok(ok_json(todo))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses((status = 200, description = "Deleted, or never existed", body = MessageBody))
)]
pub async fn delete_todo(
    mut conn: DbConn,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let removed = TodoService::delete(&mut conn, id).await?;
    tracing::info!(id, removed, "todo deleted");
    Ok(deleted())
}
