//! Server-rendered pages. Templates are compiled into the binary and loaded into one Tera instance.

use crate::error::AppError;
use crate::models::Todo;
use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Build the template engine with every page template registered.
pub fn templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// A todo with its due date preformatted for display and for a `datetime-local` input.
#[derive(Serialize)]
struct TodoView<'a> {
    #[serde(flatten)]
    todo: &'a Todo,
    due_display: Option<String>,
    due_input: Option<String>,
}

impl<'a> From<&'a Todo> for TodoView<'a> {
    fn from(todo: &'a Todo) -> Self {
        Self {
            todo,
            due_display: todo.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()),
            due_input: todo.due_date.map(|d| d.format("%Y-%m-%dT%H:%M").to_string()),
        }
    }
}

pub fn render_index(tera: &Tera, todos: &[Todo]) -> Result<Html<String>, AppError> {
    let views: Vec<TodoView<'_>> = todos.iter().map(TodoView::from).collect();
    let mut ctx = Context::new();
    ctx.insert("todos", &views);
    ctx.insert("open_count", &todos.iter().filter(|t| !t.completed).count());
    let html = tera.render(INDEX_TEMPLATE, &ctx)?;
    Ok(Html(html))
}
