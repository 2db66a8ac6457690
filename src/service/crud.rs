//! Todo CRUD against SQLite. Every call runs one statement on the caller's connection.

use crate::error::AppError;
use crate::models::{Todo, TodoDraft, TodoRow};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, title, category, description, due_date, completed";

pub struct TodoService;

impl TodoService {
    /// Rows in primary-key order, skipping `skip` and returning at most `limit`.
    pub async fn list(conn: &mut SqliteConnection, skip: i64, limit: i64) -> Result<Vec<Todo>, AppError> {
        if skip < 0 || limit < 0 {
            return Err(AppError::BadRequest("skip and limit must be non-negative".into()));
        }
        let sql = format!("SELECT {} FROM todos ORDER BY id LIMIT ? OFFSET ?", COLUMNS);
        tracing::debug!(sql = %sql, skip, limit, "query");
        let rows: Vec<TodoRow> = sqlx::query_as(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Every row, unwindowed. Used by the rendered index page.
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {} FROM todos ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<TodoRow> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM todos WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<TodoRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row.map(Todo::from))
    }

    /// Insert one row. Returns it with the assigned id.
    pub async fn create(conn: &mut SqliteConnection, draft: &TodoDraft) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO todos (title, category, description, due_date, completed) VALUES (?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, title = %draft.title, "query");
        let row: TodoRow = sqlx::query_as(&sql)
            .bind(&draft.title)
            .bind(&draft.category)
            .bind(&draft.description)
            .bind(draft.due_date)
            .bind(draft.completed)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.into())
    }

    /// Full replace: every column is overwritten from `draft`, so absent optionals become null.
    pub async fn update(conn: &mut SqliteConnection, id: i64, draft: &TodoDraft) -> Result<Todo, AppError> {
        if Self::read(conn, id).await?.is_none() {
            return Err(AppError::NotFound(format!("todo {}", id)));
        }
        let sql = format!(
            "UPDATE todos SET title = ?, category = ?, description = ?, due_date = ?, completed = ? WHERE id = ? RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<TodoRow> = sqlx::query_as(&sql)
            .bind(&draft.title)
            .bind(&draft.category)
            .bind(&draft.description)
            .bind(draft.due_date)
            .bind(draft.completed)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        // Deleted between the check and the write.
        row.map(Todo::from)
            .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))
    }

    /// Delete by id. Returns the number of rows removed; zero is not an error.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, AppError> {
        tracing::debug!(id, "delete todo");
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(&mut *conn)
            .await?;
        Ok(n)
    }
}
