//! Test doubles shared by the orchestration and cleanup tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use vidsplit_core::{StorageBackend, StorageLocator};
use vidsplit_storage::{Storage, StorageError, StorageResult};

use crate::error::{ExtractionError, ProbeError};
use crate::video::{MediaProbe, SegmentExtractor};

pub struct FixedProbe(pub f64);

#[async_trait]
impl MediaProbe for FixedProbe {
    async fn probe_duration(&self, _path: &Path) -> Result<f64, ProbeError> {
        Ok(self.0)
    }
}

pub struct FailingProbe;

#[async_trait]
impl MediaProbe for FailingProbe {
    async fn probe_duration(&self, _path: &Path) -> Result<f64, ProbeError> {
        Err(ProbeError::ProbeFailed("moov atom not found".to_string()))
    }
}

/// Reads the source like ffmpeg would, then writes `"{start}-{end}"` to the output
/// path. Optionally fails on the n-th call (1-based).
pub struct WritingExtractor {
    fail_on_call: Option<usize>,
    calls: Mutex<Vec<(f64, f64)>>,
}

impl WritingExtractor {
    pub fn new() -> Self {
        Self {
            fail_on_call: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(f64, f64)> {
        self.calls.lock().unwrap().clone()
    }
}

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

        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((start, end));
            calls.len()
        };

        if self.fail_on_call == Some(call) {
            return Err(ExtractionError::ExtractionFailed {
                start,
                end,
                reason: "simulated encoder failure".to_string(),
            });
        }

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

/// Records deletes and fails for the configured URIs.
#[derive(Default)]
pub struct RecordingStorage {
    failing: HashSet<String>,
    deleted: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn failing_on(uris: &[&str]) -> Self {
        Self {
            failing: uris.iter().map(|u| u.to_string()).collect(),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn download(
        &self,
        locator: &StorageLocator,
        _scratch_dir: &Path,
    ) -> StorageResult<PathBuf> {
        Err(StorageError::NotFound(locator.to_uri()))
    }

    async fn upload(&self, _local_path: &Path, locator: &StorageLocator) -> StorageResult<String> {
        Ok(locator.to_uri())
    }

    async fn delete(&self, locator: &StorageLocator) -> StorageResult<()> {
        let uri = locator.to_uri();
        if self.failing.contains(&uri) {
            return Err(StorageError::DeleteFailed(format!("permission denied: {}", uri)));
        }
        self.deleted.lock().unwrap().push(uri);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
