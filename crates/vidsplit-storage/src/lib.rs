//! Vidsplit Storage Library
//!
//! Blob storage gateway used by the splitter. Blobs are addressed by
//! [`StorageLocator`] (`scheme://bucket/key`); the gateway moves them between the
//! blob store and local scratch files.
//!
//! Backends:
//! - `ObjectStorage`: Google Cloud Storage or S3 through `object_store`
//! - `LocalStorage`: a directory tree, `{base}/{bucket}/{key}`

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-object")]
pub mod object;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-object")]
pub use object::ObjectStorage;
pub use traits::{scratch_path_for, Storage, StorageError, StorageResult};
pub use vidsplit_core::{StorageBackend, StorageLocator};
