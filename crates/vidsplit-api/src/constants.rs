//! API constants

/// Task endpoint
pub const TASK_PATH: &str = "/";

pub const HEALTH_PATH: &str = "/health";

pub const OPENAPI_PATH: &str = "/openapi.json";

/// Upper bound on in-flight requests. Each split holds a source file plus one
/// segment on local disk, so this also bounds scratch usage.
pub const HTTP_CONCURRENCY_LIMIT: usize = 64;

/// Message returned when a split request has no `fileUri`.
pub const MISSING_FILE_URI: &str = "Missing fileUri";
