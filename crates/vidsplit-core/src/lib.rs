//! Vidsplit Core Library
//!
//! This crate provides the domain models, the size tier policy, the chunk planner,
//! error types and configuration shared by every vidsplit component.

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod storage_types;
pub mod tier;

// Re-export commonly used types
pub use config::{BaseConfig, Config, SplitterConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    ChunkPlan, ChunkSpec, CleanupRequest, CleanupResult, LocatorError, StorageLocator,
    VideoAsset,
};
pub use planner::{ChunkPlanner, PlanningError};
pub use storage_types::StorageBackend;
pub use tier::{SizeTier, SizeTierPolicy, TierError};
