//! OpenAPI description of the JSON API, served at `/openapi.json`.

use crate::handlers::api;
use crate::models::{MessageBody, Todo, TodoPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo Board API"),
    paths(
        api::create_todo,
        api::list_todos,
        api::read_todo,
        api::update_todo,
        api::delete_todo,
    ),
    components(schemas(Todo, TodoPayload, MessageBody)),
    tags((name = "todos", description = "Todo CRUD"))
)]
pub struct ApiDoc;
