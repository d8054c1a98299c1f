//! Video splitting module

mod command;
pub mod extractor;
pub mod naming;
pub mod orchestration;
pub mod probe;

pub use extractor::{FFmpegExtractor, SegmentExtractor};
pub use naming::segment_key;
pub use orchestration::{SplitOrchestrator, SplitOrchestratorConfig, SplitStage};
pub use probe::{FfprobeProbe, MediaProbe};
