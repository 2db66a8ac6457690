//! SQLite pool setup and `todos` table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

const TODOS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(100) NOT NULL,
        category VARCHAR(50),
        description TEXT,
        due_date DATETIME,
        completed BOOLEAN NOT NULL DEFAULT 0
    )
"#;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if it does not exist.
/// In-memory databases live only as long as their connection, so those connections never expire.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);
    let mut pool_opts = SqlitePoolOptions::new().max_connections(max_connections.max(1));
    if is_in_memory(database_url) {
        pool_opts = pool_opts.idle_timeout(None::<Duration>).max_lifetime(None::<Duration>);
    }
    let pool = pool_opts.connect_with(opts).await?;
    Ok(pool)
}

/// Create the `todos` table if absent. There is no migration step: an existing table is left as is.
pub async fn ensure_todos_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(TODOS_DDL).execute(pool).await?;
    Ok(())
}
