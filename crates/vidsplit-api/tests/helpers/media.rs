//! Fake media collaborators.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use vidsplit_processing::{ExtractionError, MediaProbe, ProbeError, SegmentExtractor};

pub struct FixedProbe(pub f64);

#[async_trait]
impl MediaProbe for FixedProbe {
    async fn probe_duration(&self, _path: &Path) -> Result<f64, ProbeError> {
        Ok(self.0)
    }
}

/// Reads the source, then writes the requested range into the output file.
#[derive(Default)]
pub struct WritingExtractor;

#[async_trait]
impl SegmentExtractor for WritingExtractor {
    async fn extract(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        output: &Path,
    ) -> Result<PathBuf, ExtractionError> {
        tokio::fs::read(source)
            .await
            .map_err(|e| ExtractionError::ExtractionFailed {
                start,
                end,
                reason: format!("source unreadable: {}", e),
            })?;
        tokio::fs::write(output, format!("{}-{}", start, end))
            .await
            .map_err(|e| ExtractionError::ExtractionFailed {
                start,
                end,
                reason: e.to_string(),
            })?;
        Ok(output.to_path_buf())
    }
}

pub struct BrokenExtractor;

#[async_trait]
impl SegmentExtractor for BrokenExtractor {
    async fn extract(
        &self,
        _source: &Path,
        start: f64,
        end: f64,
        _output: &Path,
    ) -> Result<PathBuf, ExtractionError> {
        Err(ExtractionError::ExtractionFailed {
            start,
            end,
            reason: "Invalid data found when processing input".to_string(),
        })
    }
}
