//! HTML handlers: render the list, and add/edit/delete followed by a redirect to it.

use crate::error::AppError;
use crate::extractors::DbConn;
use crate::models::TodoForm;
use crate::render::render_index;
use crate::response::to_index;
use crate::service::{RequestValidator, TodoService};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Form,
};

pub async fn index(State(state): State<AppState>, mut conn: DbConn) -> Result<impl IntoResponse, AppError> {
    let todos = TodoService::list_all(&mut conn).await?;
    render_index(&state.templates, &todos)
}

/// `completed` is not read here: new todos always start open.
pub async fn add_todo(
    mut conn: DbConn,
    form: Result<Form<TodoForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(mut form) = form?;
    form.completed = None;
    let draft = RequestValidator::validate_form(form)?;
    let todo = TodoService::create(&mut conn, &draft).await?;
    tracing::info!(id = todo.id, "todo added from form");
    Ok(to_index())
}

pub async fn edit_todo(
    mut conn: DbConn,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Form(form) = form?;
    let draft = RequestValidator::validate_form(form)?;
    TodoService::update(&mut conn, id, &draft).await?;
    tracing::info!(id, "todo edited from form");
    Ok(to_index())
}

pub async fn delete_todo_web(
    mut conn: DbConn,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let removed = TodoService::delete(&mut conn, id).await?;
    tracing::info!(id, removed, "todo deleted from link");
    Ok(to_index())
}
