//! Media probing: duration of a local video file.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::command::validate_executable;
use crate::error::ProbeError;

/// Reads the playback duration of a local media file.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    async fn probe_duration(&self, path: &Path) -> Result<f64, ProbeError>;
}

/// `MediaProbe` backed by `ffprobe`.
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    ffprobe_path: String,
}

impl FfprobeProbe {
    pub fn new(ffprobe_path: impl Into<String>) -> anyhow::Result<Self> {
        let ffprobe_path = ffprobe_path.into();
        validate_executable(&ffprobe_path)
            .map_err(|e| anyhow::anyhow!("Invalid ffprobe path: {}", e))?;
        Ok(Self { ffprobe_path })
    }
}

#[async_trait]
impl MediaProbe for FfprobeProbe {
    #[tracing::instrument(skip(self), fields(
        process.executable.name = "ffprobe",
        process.executable.path = %self.ffprobe_path,
        ffmpeg.operation = "probe"
    ))]
    async fn probe_duration(&self, path: &Path) -> Result<f64, ProbeError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ProbeError::ProbeFailed(format!("Failed to execute ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(ProbeError::ProbeFailed(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let duration = parse_duration(&output.stdout)?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            video_duration = duration,
            "Video probe completed"
        );

        Ok(duration)
    }
}

/// Extract `format.duration` from ffprobe's JSON output.
fn parse_duration(stdout: &[u8]) -> Result<f64, ProbeError> {
    let probe_data: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| ProbeError::ProbeFailed(format!("Failed to parse ffprobe output: {}", e)))?;

    let duration = &probe_data["format"]["duration"];
    duration
        .as_str()
        .and_then(|d| d.trim().parse::<f64>().ok())
        .or_else(|| duration.as_f64())
        .ok_or_else(|| ProbeError::ProbeFailed("Could not parse duration".to_string()))
}
