//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use vidsplit_core::{AppError, StorageBackend, StorageLocator};

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(_) => AppError::InvalidInput(err.to_string()),
            other => AppError::Storage(other.to_string()),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage gateway trait
///
/// All backends move whole blobs between the store and local files. Callers own
/// the local files; the gateway never removes what it downloads.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Materialize the blob as a file inside `scratch_dir` and return its path.
    async fn download(
        &self,
        locator: &StorageLocator,
        scratch_dir: &Path,
    ) -> StorageResult<PathBuf>;

    /// Store a local file under `locator` and return the blob URI.
    async fn upload(&self, local_path: &Path, locator: &StorageLocator) -> StorageResult<String>;

    /// Delete a blob. Deleting a missing blob may return `NotFound`.
    async fn delete(&self, locator: &StorageLocator) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Local destination for a downloaded blob: the key's file name inside `scratch_dir`.
pub fn scratch_path_for(scratch_dir: &Path, locator: &StorageLocator) -> PathBuf {
    let name = locator.file_name();
    let name = if name.is_empty() || name == "." || name == ".." {
        "source"
    } else {
        name
    };
    scratch_dir.join(name)
}
