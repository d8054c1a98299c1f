use crate::traits::{scratch_path_for, Storage, StorageError, StorageResult};
use crate::{StorageBackend, StorageLocator};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem storage implementation
///
/// Each bucket is a directory below `base_path`; keys keep their `/` layout.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `base_path` (created if missing).
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a locator to a filesystem path with traversal validation
    fn locator_to_path(&self, locator: &StorageLocator) -> StorageResult<PathBuf> {
        let bucket = locator.bucket();
        let key = locator.key();

        if bucket.contains('/') || bucket.contains('\\') || bucket == "." || bucket == ".." {
            return Err(StorageError::InvalidKey(format!(
                "Bucket name is not a single path component: {}",
                bucket
            )));
        }
        if key.starts_with('/')
            || key.contains('\\')
            || key.split('/').any(|segment| segment == "..")
        {
            return Err(StorageError::InvalidKey(format!(
                "Storage key escapes its bucket: {}",
                key
            )));
        }

        Ok(self.base_path.join(bucket).join(key))
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn download(
        &self,
        locator: &StorageLocator,
        scratch_dir: &Path,
    ) -> StorageResult<PathBuf> {
        let path = self.locator_to_path(locator)?;
        let start = std::time::Instant::now();

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(locator.to_uri()));
        }

        let target = scratch_path_for(scratch_dir, locator);
        let size = fs::copy(&path, &target).await.map_err(|e| {
            StorageError::DownloadFailed(format!(
                "Failed to copy {} to {}: {}",
                path.display(),
                target.display(),
                e
            ))
        })?;

        tracing::info!(
            uri = %locator,
            target = %target.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage download successful"
        );

        Ok(target)
    }

    async fn upload(&self, local_path: &Path, locator: &StorageLocator) -> StorageResult<String> {
        let path = self.locator_to_path(locator)?;
        let start = std::time::Instant::now();

        self.ensure_parent_dir(&path).await?;

        let size = fs::copy(local_path, &path).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to copy {} to {}: {}",
                local_path.display(),
                path.display(),
                e
            ))
        })?;

        tracing::info!(
            uri = %locator,
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(locator.to_uri())
    }

    async fn delete(&self, locator: &StorageLocator) -> StorageResult<()> {
        let path = self.locator_to_path(locator)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(locator.to_uri()));
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(uri = %locator, path = %path.display(), "Local storage delete successful");

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
