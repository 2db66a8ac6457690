//! JSON API routes under `/api/todos`.

use crate::handlers::api::{create_todo, delete_todo, list_todos, read_todo, update_todo};
use crate::state::AppState;
use axum::{routing::get, Router};

/// The collection answers with and without the trailing slash.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/todos/", get(list_todos).post(create_todo))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/:todo_id",
            get(read_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}
