//! Response helpers shared by the API and web handlers.

use crate::models::MessageBody;
use axum::{http::StatusCode, response::Redirect, Json};
use serde::Serialize;

pub const INDEX_PATH: &str = "/";
pub const DELETED_MESSAGE: &str = "Todo deleted";

pub fn ok_json<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn deleted() -> (StatusCode, Json<MessageBody>) {
    ok_json(MessageBody {
        message: DELETED_MESSAGE.to_string(),
    })
}

/// Post/redirect/get back to the list page. `Redirect::to` answers `303 See Other`, so the
/// browser follows with a GET.
pub fn to_index() -> Redirect {
    Redirect::to(INDEX_PATH)
}
