//! Todo record shapes: storage row, transport record, and inbound payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted todo as returned by both surfaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2024-05-01T09:00:00")]
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
}

/// One row of the `todos` table.
#[derive(Debug, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            category: row.category,
            description: row.description,
            due_date: row.due_date,
            completed: row.completed,
        }
    }
}

/// JSON body for create and update. Every field is optional at the wire level so a
/// missing `title` is reported as a validation error rather than a parse failure.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct TodoPayload {
    #[serde(default)]
    #[schema(required = true, example = "Buy milk")]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 or naive `YYYY-MM-DDTHH:MM[:SS]`.
    #[serde(default)]
    #[schema(format = DateTime, example = "2024-05-01T09:00:00")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Fields submitted by the add and edit forms. Browsers send empty strings for blank inputs
/// and omit unchecked checkboxes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: Option<String>,
}

/// Validated field set written to storage on insert or full replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
}

impl TodoDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: None,
            description: None,
            due_date: None,
            completed: false,
        }
    }

    /// The record this draft becomes once stored under `id`.
    pub fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            due_date: self.due_date,
            completed: self.completed,
        }
    }
}

/// `?skip=&limit=` window for the list endpoint.
#[derive(Clone, Copy, Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub const DEFAULT_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}
