//! Task endpoint: `POST /` with `{action, fileUri, parts}`.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::constants::MISSING_FILE_URI;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use vidsplit_core::{AppError, CleanupRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    #[default]
    Split,
    Cleanup,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// Defaults to `split`
    #[serde(default)]
    pub action: TaskAction,
    /// Source video URI (`gs://bucket/key`)
    #[serde(default)]
    pub file_uri: Option<String>,
    /// Segment URIs to delete (cleanup only)
    #[serde(default)]
    pub parts: Option<Vec<String>>,
}

impl TaskRequest {
    fn file_uri(&self) -> Option<&str> {
        self.file_uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SplitResponse {
    pub parts: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CleanupResponse {
    pub message: String,
}

/// Run a split or a cleanup
#[utoipa::path(
    post,
    path = "/",
    tag = "tasks",
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Split parts, or cleanup summary", body = SplitResponse),
        (status = 400, description = "Missing fileUri or malformed body", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Storage, probe, planning or extraction failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn handle_task(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> Result<Response, HttpAppError> {
    tracing::debug!(action = ?request.action, "Task received");

    match request.action {
        TaskAction::Split => split(&state, &request).await,
        TaskAction::Cleanup => cleanup(&state, request).await,
    }
}

async fn split(state: &AppState, request: &TaskRequest) -> Result<Response, HttpAppError> {
    let file_uri = request
        .file_uri()
        .ok_or_else(|| AppError::InvalidInput(MISSING_FILE_URI.to_string()))?;

    tracing::info!(file_uri = %file_uri, "Split requested");

    let parts = state.orchestrator.split(file_uri).await?;

    Ok(Json(SplitResponse { parts }).into_response())
}

async fn cleanup(state: &AppState, request: TaskRequest) -> Result<Response, HttpAppError> {
    let original_uri = request.file_uri().map(str::to_string);
    let cleanup_request = CleanupRequest::new(original_uri, request.parts.unwrap_or_default());

    tracing::info!(
        target_count = cleanup_request.target_count(),
        "Cleanup requested"
    );

    let result = state.cleanup.cleanup(&cleanup_request).await;

    Ok(Json(CleanupResponse {
        message: result.message(),
    })
    .into_response())
}
