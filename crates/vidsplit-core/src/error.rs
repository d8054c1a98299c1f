//! Error types module
//!
//! All failures that reach an outer surface (HTTP handler, CLI) are unified under
//! `AppError`. Each variant describes how it should be presented through
//! `ErrorMetadata`: input errors map to 400, collaborator failures (storage,
//! probing, extraction, planning) map to 500 with the underlying message kept
//! verbatim.

use crate::models::LocatorError;
use crate::planner::PlanningError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    MediaProcessing(String),

    #[error("{0}")]
    Planning(#[from] PlanningError),

    #[error("{0}")]
    Internal(String),

    #[error("{message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Variant name, used as a structured log field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::BadRequest(_) => "BadRequest",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::Storage(_) => "Storage",
            AppError::MediaProcessing(_) => "MediaProcessing",
            AppError::Planning(_) => "Planning",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "InternalWithSource",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<LocatorError> for AppError {
    fn from(err: LocatorError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::BadRequest(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::UnsupportedMediaType(_) => 415,
            AppError::Storage(_)
            | AppError::MediaProcessing(_)
            | AppError::Planning(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::MediaProcessing(_) => "MEDIA_PROCESSING_ERROR",
            AppError::Planning(_) => "PLANNING_ERROR",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_)
            | AppError::BadRequest(_)
            | AppError::PayloadTooLarge(_)
            | AppError::UnsupportedMediaType(_) => LogLevel::Debug,
            AppError::Planning(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
