//! Router assembly.

mod api;
mod common;
mod web;

pub use api::api_routes;
pub use common::common_routes;
pub use web::{static_routes, web_routes};

use crate::config::AppConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Every route the server exposes, with the request body limit applied.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state.clone()))
        .merge(web_routes(state))
        .merge(static_routes(&config.static_dir))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(config.body_limit_bytes)))
}
