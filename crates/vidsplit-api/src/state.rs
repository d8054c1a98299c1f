//! Shared application state

use std::sync::Arc;

use vidsplit_processing::{CleanupCoordinator, SplitOrchestrator};

/// Long-lived collaborators shared by all requests. Holds no per-request state.
pub struct AppState {
    pub orchestrator: Arc<SplitOrchestrator>,
    pub cleanup: Arc<CleanupCoordinator>,
}

impl AppState {
    pub fn new(orchestrator: SplitOrchestrator, cleanup: CleanupCoordinator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            cleanup: Arc::new(cleanup),
        }
    }
}
