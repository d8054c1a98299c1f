//! Split orchestration: download → probe → plan → extract/upload each segment.
//!
//! One call owns one scratch directory, with the downloaded source under `source/`
//! and segment outputs under `segments/` so the two never share a path. Segments
//! are handled strictly in order and
//! each local segment is removed as soon as it is uploaded, so local disk usage
//! stays at the source plus one segment. A failure mid-loop leaves the segments
//! already uploaded in storage; callers remove them through cleanup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use vidsplit_core::{ChunkPlan, ChunkPlanner, ChunkSpec, SizeTierPolicy, StorageLocator, VideoAsset};
use vidsplit_storage::Storage;

use super::extractor::SegmentExtractor;
use super::naming::{segment_key, split_extension};
use super::probe::MediaProbe;
use crate::error::SplitError;

const SOURCE_DIR: &str = "source";
const SEGMENTS_DIR: &str = "segments";

/// Extension used for local segment files when the source key has none.
const DEFAULT_EXTENSION: &str = "mp4";

/// Progress of one split call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStage {
    Start,
    Downloaded,
    Probed,
    Planned,
    Extracting(u32),
    Uploaded(u32),
    Finished,
}

impl fmt::Display for SplitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStage::Start => write!(f, "start"),
            SplitStage::Downloaded => write!(f, "downloaded"),
            SplitStage::Probed => write!(f, "probed"),
            SplitStage::Planned => write!(f, "planned"),
            SplitStage::Extracting(i) => write!(f, "extracting({})", i),
            SplitStage::Uploaded(i) => write!(f, "uploaded({})", i),
            SplitStage::Finished => write!(f, "finished"),
        }
    }
}

/// Config for split orchestration.
#[derive(Clone, Debug)]
pub struct SplitOrchestratorConfig {
    /// Parent of the per-call scratch directories.
    pub scratch_dir: PathBuf,
}

/// Composes storage, probing, tier policy, planning and extraction into one split.
pub struct SplitOrchestrator {
    storage: Arc<dyn Storage>,
    probe: Arc<dyn MediaProbe>,
    extractor: Arc<dyn SegmentExtractor>,
    policy: SizeTierPolicy,
    config: SplitOrchestratorConfig,
}

impl SplitOrchestrator {
    pub fn new(
        storage: Arc<dyn Storage>,
        probe: Arc<dyn MediaProbe>,
        extractor: Arc<dyn SegmentExtractor>,
        config: SplitOrchestratorConfig,
    ) -> Self {
        Self {
            storage,
            probe,
            extractor,
            policy: SizeTierPolicy::default(),
            config,
        }
    }

    pub fn with_policy(mut self, policy: SizeTierPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &SizeTierPolicy {
        &self.policy
    }

    /// Split the video at `file_uri` and return the segment URIs in order.
    ///
    /// The list may be shorter than the tier count when planning stops early.
    #[tracing::instrument(skip(self), fields(operation = "split"))]
    pub async fn split(&self, file_uri: &str) -> Result<Vec<String>, SplitError> {
        let locator = StorageLocator::parse(file_uri)?;
        log_stage(SplitStage::Start, &locator);

        tokio::fs::create_dir_all(&self.config.scratch_dir).await?;
        let scratch = tempfile::Builder::new()
            .prefix("vidsplit-")
            .tempdir_in(&self.config.scratch_dir)?;

        let source_dir = scratch.path().join(SOURCE_DIR);
        let segments_dir = scratch.path().join(SEGMENTS_DIR);
        tokio::fs::create_dir(&source_dir).await?;
        tokio::fs::create_dir(&segments_dir).await?;

        let local_path = self.storage.download(&locator, &source_dir).await?;
        log_stage(SplitStage::Downloaded, &locator);

        let asset = self.probe_asset(locator, local_path).await?;
        log_stage(SplitStage::Probed, &asset.locator);

        let plan = self.plan(&asset)?;
        log_stage(SplitStage::Planned, &asset.locator);

        let result = self.extract_and_upload(&asset, &plan, &segments_dir).await;

        remove_local(&asset.local_path).await;
        if let Err(e) = scratch.close() {
            tracing::warn!(error = %e, "Failed to remove scratch directory");
        }

        let uris = result?;
        log_stage(SplitStage::Finished, &asset.locator);
        tracing::info!(
            source = %asset.locator,
            part_count = uris.len(),
            "Video split completed"
        );

        Ok(uris)
    }

    async fn probe_asset(
        &self,
        locator: StorageLocator,
        local_path: PathBuf,
    ) -> Result<VideoAsset, SplitError> {
        let duration_seconds = self.probe.probe_duration(&local_path).await?;
        let size_bytes = tokio::fs::metadata(&local_path).await?.len();

        Ok(VideoAsset {
            locator,
            local_path,
            duration_seconds,
            size_bytes,
        })
    }

    fn plan(&self, asset: &VideoAsset) -> Result<ChunkPlan, SplitError> {
        let size_mb = asset.size_mb();
        let segment_count = self.policy.segments_for(size_mb);
        let plan = ChunkPlanner::plan(asset.duration_seconds, segment_count)?;

        tracing::info!(
            source = %asset.locator,
            size_mb = %format!("{:.2}", size_mb),
            duration_secs = asset.duration_seconds,
            segment_count,
            segment_duration_secs = %format!("{:.2}", plan.segment_duration),
            "Splitting video"
        );

        if plan.is_short() {
            tracing::warn!(
                source = %asset.locator,
                requested = segment_count,
                planned = plan.len(),
                "Planning stopped early; returning fewer parts than the size tier requested"
            );
        }

        Ok(plan)
    }

    async fn extract_and_upload(
        &self,
        asset: &VideoAsset,
        plan: &ChunkPlan,
        segments_dir: &Path,
    ) -> Result<Vec<String>, SplitError> {
        let extension = split_extension(asset.locator.file_name())
            .map(|(_, ext)| ext)
            .unwrap_or(DEFAULT_EXTENSION);
        let mut uris = Vec::with_capacity(plan.len());

        for spec in plan {
            log_stage(SplitStage::Extracting(spec.index), &asset.locator);

            let output = segments_dir.join(format!("part_{}.{}", spec.index, extension));
            let result = self.process_segment(asset, spec, &output).await;
            remove_local(&output).await;

            match result {
                Ok(uri) => {
                    log_stage(SplitStage::Uploaded(spec.index), &asset.locator);
                    uris.push(uri);
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        source = %asset.locator,
                        segment = spec.index,
                        orphaned_parts = ?uris,
                        "Segment failed; already uploaded parts are left in storage"
                    );
                    return Err(e);
                }
            }
        }

        Ok(uris)
    }

    async fn process_segment(
        &self,
        asset: &VideoAsset,
        spec: &ChunkSpec,
        output: &Path,
    ) -> Result<String, SplitError> {
        let segment_path = self
            .extractor
            .extract(&asset.local_path, spec.start, spec.end, output)
            .await?;

        let destination = asset
            .locator
            .with_key(segment_key(asset.locator.key(), spec.index))?;

        let uri = self.storage.upload(&segment_path, &destination).await?;
        tracing::debug!(segment = spec.index, start = spec.start, end = spec.end, uri = %uri, "Segment uploaded");
        Ok(uri)
    }
}

fn log_stage(stage: SplitStage, locator: &StorageLocator) {
    tracing::debug!(stage = %stage, source = %locator, "Split stage");
}

async fn remove_local(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove local file");
        }
    }
}
