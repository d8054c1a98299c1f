use std::path::PathBuf;

use super::StorageLocator;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A source video materialized in local scratch space for one split call.
#[derive(Debug, Clone)]
pub struct VideoAsset {
    pub locator: StorageLocator,
    pub local_path: PathBuf,
    pub duration_seconds: f64,
    pub size_bytes: u64,
}

impl VideoAsset {
    /// Size in binary megabytes (`bytes / 1024^2`).
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}
