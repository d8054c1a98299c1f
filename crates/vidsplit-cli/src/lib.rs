use serde::Serialize;
use vidsplit_core::{ChunkPlan, ChunkPlanner, PlanningError, SizeTierPolicy};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Dry-run result of tier selection plus planning.
#[derive(Debug, Serialize)]
pub struct PlanPreview {
    pub size_mb: f64,
    pub duration_seconds: f64,
    pub requested_segments: u32,
    pub plan: ChunkPlan,
}

/// Compute the plan a split would use for a file of this size and duration.
pub fn plan_preview(
    policy: &SizeTierPolicy,
    size_bytes: u64,
    duration_seconds: f64,
) -> Result<PlanPreview, PlanningError> {
    let size_mb = size_bytes as f64 / BYTES_PER_MB;
    let requested_segments = policy.segments_for(size_mb);
    let plan = ChunkPlanner::plan(duration_seconds, requested_segments)?;

    Ok(PlanPreview {
        size_mb,
        duration_seconds,
        requested_segments,
        plan,
    })
}

/// Initialize tracing for CLI binaries. Logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
