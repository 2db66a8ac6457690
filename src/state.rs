//! Shared application state for all routes. Cloned into every handler; holds no per-request data.

use crate::error::AppError;
use crate::render;
use sqlx::SqlitePool;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// State over `pool` with the built-in page templates.
    pub fn new(pool: SqlitePool) -> Result<Self, AppError> {
        Ok(Self {
            pool,
            templates: Arc::new(render::templates()?),
        })
    }
}
