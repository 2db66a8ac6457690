//! Server-rendered page routes and static assets.

use crate::handlers::web::{add_todo, delete_todo_web, edit_todo, index};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

pub fn web_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_todo))
        .route("/edit/:todo_id", post(edit_todo))
        .route("/delete/:todo_id", get(delete_todo_web))
        .with_state(state)
}

/// Files under `dir` served at `/static/*`.
pub fn static_routes(dir: impl AsRef<Path>) -> Router {
    Router::new().nest_service("/static", ServeDir::new(dir.as_ref()))
}
