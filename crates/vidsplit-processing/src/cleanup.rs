//! Best-effort removal of a split's artifacts.
//!
//! Every target is attempted exactly once. Failures are logged and never raised;
//! the caller only learns how many deletes succeeded.

use std::fmt;
use std::sync::Arc;

use vidsplit_core::{CleanupRequest, CleanupResult, StorageLocator};
use vidsplit_storage::Storage;

/// What a cleanup target was in the original split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupTarget {
    Part,
    Original,
}

impl fmt::Display for CleanupTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupTarget::Part => write!(f, "part"),
            CleanupTarget::Original => write!(f, "original"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOutcome {
    pub uri: String,
    pub target: CleanupTarget,
    pub result: Result<(), String>,
}

impl CleanupOutcome {
    pub fn is_deleted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-target outcomes of one cleanup call, in attempt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub outcomes: Vec<CleanupOutcome>,
}

impl CleanupReport {
    pub fn deleted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_deleted()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &CleanupOutcome> {
        self.outcomes.iter().filter(|o| !o.is_deleted())
    }
}

impl From<CleanupReport> for CleanupResult {
    fn from(report: CleanupReport) -> Self {
        CleanupResult {
            deleted_count: report.deleted_count(),
        }
    }
}

pub struct CleanupCoordinator {
    storage: Arc<dyn Storage>,
}

impl CleanupCoordinator {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Delete every part, then the original. Never fails.
    pub async fn cleanup(&self, request: &CleanupRequest) -> CleanupResult {
        self.cleanup_with_report(request).await.into()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(operation = "cleanup", target_count = request.target_count())
    )]
    pub async fn cleanup_with_report(&self, request: &CleanupRequest) -> CleanupReport {
        let mut report = CleanupReport::default();

        for uri in &request.part_uris {
            report
                .outcomes
                .push(self.delete_one(uri, CleanupTarget::Part).await);
        }
        if let Some(uri) = &request.original_uri {
            report
                .outcomes
                .push(self.delete_one(uri, CleanupTarget::Original).await);
        }

        tracing::info!(
            deleted_count = report.deleted_count(),
            failed_count = report.failed().count(),
            "Cleanup completed"
        );

        report
    }

    async fn delete_one(&self, uri: &str, target: CleanupTarget) -> CleanupOutcome {
        let result = match StorageLocator::parse(uri) {
            Ok(locator) => self
                .storage
                .delete(&locator)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match &result {
            Ok(()) => tracing::info!(uri = %uri, kind = %target, "Deleted blob"),
            Err(e) => tracing::warn!(uri = %uri, kind = %target, error = %e, "Failed to delete blob"),
        }

        CleanupOutcome {
            uri: uri.to_string(),
            target,
            result,
        }
    }
}
