#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-object")]
use crate::ObjectStorage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use std::sync::Arc;
use vidsplit_core::Config;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        #[cfg(feature = "storage-object")]
        StorageBackend::Gcs => Ok(Arc::new(ObjectStorage::gcs())),

        #[cfg(feature = "storage-object")]
        StorageBackend::S3 => {
            let region = config.s3_region().map(String::from).ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let endpoint = config.s3_endpoint().map(String::from);
            Ok(Arc::new(ObjectStorage::s3(region, endpoint)))
        }

        #[cfg(not(feature = "storage-object"))]
        StorageBackend::Gcs | StorageBackend::S3 => Err(StorageError::ConfigError(
            "Object storage backends not available (storage-object feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
