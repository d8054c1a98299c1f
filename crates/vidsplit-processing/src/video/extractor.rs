//! Segment extraction: cut `[start, end)` out of a local source file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::command::validate_executable;
use crate::error::ExtractionError;

/// Writes the `[start, end)` range of `source` to `output`.
///
/// Implementations preserve the source codec and container where they can and
/// report every failure as [`ExtractionError::ExtractionFailed`].
#[async_trait]
pub trait SegmentExtractor: Send + Sync {
    async fn extract(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        output: &Path,
    ) -> Result<PathBuf, ExtractionError>;
}

/// `SegmentExtractor` that stream-copies with `ffmpeg` (no re-encode).
#[derive(Debug, Clone)]
pub struct FFmpegExtractor {
    ffmpeg_path: String,
}

impl FFmpegExtractor {
    pub fn new(ffmpeg_path: impl Into<String>) -> anyhow::Result<Self> {
        let ffmpeg_path = ffmpeg_path.into();
        validate_executable(&ffmpeg_path)
            .map_err(|e| anyhow::anyhow!("Invalid ffmpeg path: {}", e))?;
        Ok(Self { ffmpeg_path })
    }

    /// Arguments for one stream-copy cut. Seeking before `-i` keeps large sources fast;
    /// boundaries land on the nearest keyframe.
    pub fn build_args(source: &Path, start: f64, end: f64, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            format!("{:.6}", start),
            "-i".to_string(),
            source.to_string_lossy().to_string(),
            "-t".to_string(),
            format!("{:.6}", end - start),
            "-map".to_string(),
            "0".to_string(),
            "-c".to_string(),
            "copy".to_string(),
            "-avoid_negative_ts".to_string(),
            "make_zero".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl SegmentExtractor for FFmpegExtractor {
    #[tracing::instrument(skip(self, source, output), fields(
        process.executable.name = "ffmpeg",
        ffmpeg.operation = "extract"
    ))]
    async fn extract(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        output: &Path,
    ) -> Result<PathBuf, ExtractionError> {
        let failed = |reason: String| ExtractionError::ExtractionFailed { start, end, reason };

        if end <= start {
            return Err(failed("empty time range".to_string()));
        }

        let started = std::time::Instant::now();
        let args = Self::build_args(source, start, end, output);

        let result = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| failed(format!("Failed to execute ffmpeg: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(failed(format!("ffmpeg failed: {}", stderr.trim())));
        }

        let size = tokio::fs::metadata(output)
            .await
            .map_err(|e| failed(format!("ffmpeg produced no output file: {}", e)))?
            .len();

        tracing::debug!(
            output = %output.display(),
            size_bytes = size,
            duration_ms = started.elapsed().as_millis(),
            "Segment extracted"
        );

        Ok(output.to_path_buf())
    }
}
