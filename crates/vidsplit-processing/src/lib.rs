//! Vidsplit Processing Library
//!
//! Split orchestration (download → probe → plan → extract/upload per segment) and
//! best-effort cleanup of generated segments. Media probing and extraction are
//! collaborators behind [`MediaProbe`] and [`SegmentExtractor`]; ffprobe/ffmpeg
//! backed implementations are provided.

pub mod cleanup;
pub mod error;
pub mod video;

#[cfg(test)]
mod test_support;

pub use cleanup::{CleanupCoordinator, CleanupOutcome, CleanupReport, CleanupTarget};
pub use error::{ExtractionError, ProbeError, SplitError};
pub use video::{
    segment_key, FFmpegExtractor, FfprobeProbe, MediaProbe, SegmentExtractor, SplitOrchestrator,
    SplitOrchestratorConfig, SplitStage,
};
