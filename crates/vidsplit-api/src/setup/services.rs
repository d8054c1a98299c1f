//! Wire storage, ffprobe, ffmpeg and the tier policy into the shared state.

use anyhow::{Context, Result};
use std::sync::Arc;
use vidsplit_core::Config;
use vidsplit_processing::{
    CleanupCoordinator, FFmpegExtractor, FfprobeProbe, SplitOrchestrator,
    SplitOrchestratorConfig,
};
use vidsplit_storage::create_storage;

use crate::state::AppState;

pub async fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(backend = %storage.backend_type(), "Storage initialized");

    let probe = FfprobeProbe::new(config.ffprobe_path())?;
    let extractor = FFmpegExtractor::new(config.ffmpeg_path())?;

    let orchestrator = SplitOrchestrator::new(
        storage.clone(),
        Arc::new(probe),
        Arc::new(extractor),
        SplitOrchestratorConfig {
            scratch_dir: config.scratch_dir().to_path_buf(),
        },
    );
    let cleanup = CleanupCoordinator::new(storage);

    tracing::info!(
        ffmpeg_path = %config.ffmpeg_path(),
        ffprobe_path = %config.ffprobe_path(),
        scratch_dir = %config.scratch_dir().display(),
        "Media services initialized"
    );

    Ok(Arc::new(AppState::new(orchestrator, cleanup)))
}
