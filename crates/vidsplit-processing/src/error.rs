use thiserror::Error;
use vidsplit_core::{AppError, LocatorError, PlanningError};
use vidsplit_storage::StorageError;

/// Any failure while cutting a time range out of the source.
///
/// Unreadable sources, unsupported codecs, missing binaries and full disks are
/// not distinguished.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Extraction failed for range [{start:.3}s, {end:.3}s): {reason}")]
    ExtractionFailed { start: f64, end: f64, reason: String },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Probe failed: {0}")]
    ProbeFailed(String),
}

/// Reasons a split call aborts.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Planning(#[from] PlanningError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Scratch space error: {0}")]
    Scratch(#[from] std::io::Error),
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::Locator(e) => e.into(),
            SplitError::Storage(e) => e.into(),
            SplitError::Planning(e) => AppError::Planning(e),
            SplitError::Probe(e) => AppError::MediaProcessing(e.to_string()),
            SplitError::Extraction(e) => AppError::MediaProcessing(e.to_string()),
            SplitError::Scratch(e) => AppError::Internal(format!("Scratch space error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidsplit_core::ErrorMetadata;

    #[test]
    fn extraction_failures_are_upstream_errors() {
        let err = SplitError::from(ExtractionError::ExtractionFailed {
            start: 0.0,
            end: 10.0,
            reason: "unsupported codec".to_string(),
        });
        let app: AppError = err.into();
        assert_eq!(app.http_status_code(), 500);
        assert_eq!(
            app.client_message(),
            "Extraction failed for range [0.000s, 10.000s): unsupported codec"
        );
    }

    #[test]
    fn locator_failures_are_input_errors() {
        let err = SplitError::from(LocatorError::MissingScheme("video.mp4".to_string()));
        let app: AppError = err.into();
        assert_eq!(app.http_status_code(), 400);
    }

    #[test]
    fn storage_messages_pass_through() {
        let err = SplitError::from(StorageError::NotFound("gs://b/v.mp4".to_string()));
        let app: AppError = err.into();
        assert_eq!(app.client_message(), "File not found: gs://b/v.mp4");
    }
}
