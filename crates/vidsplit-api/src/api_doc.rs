//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidsplit API",
        version = "0.1.0",
        description = "Splits a stored video into size-tiered, time-contiguous segments and removes them again on request."
    ),
    paths(
        handlers::tasks::handle_task,
        handlers::health::health_check,
    ),
    components(
        schemas(
            handlers::tasks::TaskRequest,
            handlers::tasks::TaskAction,
            handlers::tasks::SplitResponse,
            handlers::tasks::CleanupResponse,
            handlers::health::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Split and cleanup"),
        (name = "health", description = "Health check")
    )
)]
pub struct ApiDoc;
