//! Todo Board: todo list manager with a JSON API and server-rendered pages over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod render;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use models::{Todo, TodoDraft, TodoPayload};
pub use routes::app_router;
pub use service::TodoService;
pub use state::AppState;
pub use store::{connect_pool, ensure_todos_table};
