//! Domain models for split and cleanup operations.

mod chunk;
mod cleanup;
mod locator;
mod video;

pub use chunk::{ChunkPlan, ChunkSpec};
pub use cleanup::{CleanupRequest, CleanupResult};
pub use locator::{LocatorError, StorageLocator};
pub use video::VideoAsset;
