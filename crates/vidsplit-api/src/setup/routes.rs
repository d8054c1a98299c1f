//! Router and middleware stack

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vidsplit_core::Config;

use crate::api_doc::ApiDoc;
use crate::constants::{HEALTH_PATH, HTTP_CONCURRENCY_LIMIT, OPENAPI_PATH, TASK_PATH};
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    tracing::info!(
        max_request_body_bytes = config.max_request_body_bytes(),
        http_concurrency_limit = HTTP_CONCURRENCY_LIMIT,
        "Configuring routes"
    );

    Router::new()
        .route(TASK_PATH, post(handlers::tasks::handle_task))
        .route(HEALTH_PATH, get(handlers::health::health_check))
        .route(OPENAPI_PATH, get(openapi_spec))
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes()))
        .layer(TraceLayer::new_for_http())
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
