use crate::traits::{scratch_path_for, Storage, StorageError, StorageResult};
use crate::{StorageBackend, StorageLocator};
use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::buffered::BufWriter;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as ObjectPath;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStore, ObjectStoreExt, Result as ObjectResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Cloud object storage implementation (Google Cloud Storage or S3).
///
/// The bucket comes from each locator, so one instance serves any bucket the
/// ambient credentials can reach. Credentials are read from the environment by
/// the object_store builders.
#[derive(Clone, Debug)]
pub struct ObjectStorage {
    backend: StorageBackend,
    region: Option<String>,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl ObjectStorage {
    /// Google Cloud Storage, credentials from `GOOGLE_*` environment variables.
    pub fn gcs() -> Self {
        Self {
            backend: StorageBackend::Gcs,
            region: None,
            endpoint_url: None,
        }
    }

    /// Amazon S3 or an S3-compatible provider
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint (e.g. "http://localhost:9000" for MinIO)
    pub fn s3(region: String, endpoint_url: Option<String>) -> Self {
        Self {
            backend: StorageBackend::S3,
            region: Some(region),
            endpoint_url,
        }
    }

    fn store_for(&self, bucket: &str) -> StorageResult<Arc<dyn ObjectStore>> {
        match self.backend {
            StorageBackend::Gcs => {
                let store = GoogleCloudStorageBuilder::from_env()
                    .with_bucket_name(bucket)
                    .build()
                    .map_err(|e| StorageError::ConfigError(e.to_string()))?;
                Ok(Arc::new(store))
            }
            StorageBackend::S3 => {
                let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
                if let Some(ref region) = self.region {
                    builder = builder.with_region(region.clone());
                }
                if let Some(ref endpoint) = self.endpoint_url {
                    let allow_http = endpoint.starts_with("http://");
                    builder = builder
                        .with_endpoint(endpoint.clone())
                        .with_allow_http(allow_http);
                }
                let store = builder
                    .build()
                    .map_err(|e| StorageError::ConfigError(e.to_string()))?;
                Ok(Arc::new(store))
            }
            StorageBackend::Local => Err(StorageError::ConfigError(
                "Object storage cannot serve the local backend".to_string(),
            )),
        }
    }
}

fn object_path(locator: &StorageLocator) -> ObjectPath {
    ObjectPath::from(locator.key())
}

#[async_trait]
impl Storage for ObjectStorage {
    async fn download(
        &self,
        locator: &StorageLocator,
        scratch_dir: &Path,
    ) -> StorageResult<PathBuf> {
        let store = self.store_for(locator.bucket())?;
        let location = object_path(locator);
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store.get(&location).await;
        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(locator.to_uri()),
            other => {
                tracing::error!(
                    error = %other,
                    uri = %locator,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object storage download failed"
                );
                StorageError::Unavailable(other.to_string())
            }
        })?;

        let target = scratch_path_for(scratch_dir, locator);
        let mut file = fs::File::create(&target).await.map_err(|e| {
            StorageError::DownloadFailed(format!(
                "Failed to create file {}: {}",
                target.display(),
                e
            ))
        })?;

        let mut size: u64 = 0;
        let mut stream = result.into_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| StorageError::Unavailable(e.to_string()))?;
            size += chunk.len() as u64;
            file.write_all(&chunk).await.map_err(|e| {
                StorageError::DownloadFailed(format!(
                    "Failed to write file {}: {}",
                    target.display(),
                    e
                ))
            })?;
        }
        file.flush().await?;

        tracing::info!(
            backend = %self.backend,
            uri = %locator,
            target = %target.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object storage download successful"
        );

        Ok(target)
    }

    async fn upload(&self, local_path: &Path, locator: &StorageLocator) -> StorageResult<String> {
        let store = self.store_for(locator.bucket())?;
        let location = object_path(locator);
        let start = std::time::Instant::now();

        let mut file = fs::File::open(local_path).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to open file {}: {}",
                local_path.display(),
                e
            ))
        })?;

        // Multipart upload once the buffer fills, so segments are never held in memory whole.
        let mut writer = BufWriter::new(store, location);
        let size = tokio::io::copy(&mut file, &mut writer)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        writer.shutdown().await.map_err(|e| {
            tracing::error!(
                error = %e,
                uri = %locator,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object storage upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            backend = %self.backend,
            uri = %locator,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object storage upload successful"
        );

        Ok(locator.to_uri())
    }

    async fn delete(&self, locator: &StorageLocator) -> StorageResult<()> {
        let store = self.store_for(locator.bucket())?;
        let location = object_path(locator);

        let result: ObjectResult<_> = store.delete(&location).await;
        result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(locator.to_uri()),
            other => StorageError::DeleteFailed(other.to_string()),
        })?;

        tracing::info!(backend = %self.backend, uri = %locator, "Object storage delete successful");

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_backend() {
        assert_eq!(ObjectStorage::gcs().backend_type(), StorageBackend::Gcs);
        let s3 = ObjectStorage::s3("us-east-1".to_string(), Some("http://localhost:9000".into()));
        assert_eq!(s3.backend_type(), StorageBackend::S3);
    }

    #[test]
    fn object_path_keeps_key_segments() {
        let locator = StorageLocator::parse("gs://bucket/uploads/2024/video.mp4").unwrap();
        assert_eq!(object_path(&locator).as_ref(), "uploads/2024/video.mp4");
    }

    #[test]
    fn s3_store_builds_for_any_bucket() {
        let s3 = ObjectStorage::s3("us-east-1".to_string(), Some("http://localhost:9000".into()));
        assert!(s3.store_for("bucket-a").is_ok());
        assert!(s3.store_for("bucket-b").is_ok());
    }
}
