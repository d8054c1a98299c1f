//! Test helpers: build AppState and router for integration tests.
//!
//! The router runs against `LocalStorage` in a temp directory with fake
//! probe/extractor collaborators, so no ffmpeg or cloud credentials are needed.

pub mod media;

use axum_test::TestServer;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use vidsplit_api::setup::routes;
use vidsplit_api::state::AppState;
use vidsplit_core::Config;
use vidsplit_processing::{
    CleanupCoordinator, MediaProbe, SegmentExtractor, SplitOrchestrator, SplitOrchestratorConfig,
};
use vidsplit_storage::{LocalStorage, Storage};

pub const BUCKET: &str = "test-bucket";

/// Test application: server plus the directories backing storage and scratch.
pub struct TestApp {
    pub server: TestServer,
    pub storage_dir: TempDir,
    pub scratch_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Place a blob directly in local storage and return its URI.
    pub async fn put_blob(&self, key: &str, bytes: &[u8]) -> String {
        let path = self.blob_path(key);
        tokio::fs::create_dir_all(path.parent().expect("blob has parent"))
            .await
            .expect("create blob dir");
        tokio::fs::write(&path, bytes).await.expect("write blob");
        format!("gs://{}/{}", BUCKET, key)
    }

    pub fn blob_exists(&self, key: &str) -> bool {
        self.blob_path(key).exists()
    }

    pub fn scratch_is_empty(&self) -> bool {
        std::fs::read_dir(self.scratch_dir.path())
            .expect("read scratch dir")
            .next()
            .is_none()
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.storage_dir.path().join(BUCKET).join(key)
    }
}

pub fn test_config(storage_dir: &TempDir, scratch_dir: &TempDir) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("STORAGE_BACKEND", "local".to_string()),
        (
            "LOCAL_STORAGE_PATH",
            storage_dir.path().display().to_string(),
        ),
        ("SCRATCH_DIR", scratch_dir.path().display().to_string()),
        ("MAX_REQUEST_BODY_BYTES", "4096".to_string()),
    ]);
    Config::from_lookup(|name| vars.get(name).cloned()).expect("valid test config")
}

/// Setup a test app with the default 100s probe and a writing extractor.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(
        Arc::new(media::FixedProbe(100.0)),
        Arc::new(media::WritingExtractor::default()),
    )
    .await
}

pub async fn setup_test_app_with(
    probe: Arc<dyn MediaProbe>,
    extractor: Arc<dyn SegmentExtractor>,
) -> TestApp {
    let storage_dir = tempfile::tempdir().expect("Failed to create storage directory");
    let scratch_dir = tempfile::tempdir().expect("Failed to create scratch directory");
    let config = test_config(&storage_dir, &scratch_dir);

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(storage_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    let orchestrator = SplitOrchestrator::new(
        storage.clone(),
        probe,
        extractor,
        SplitOrchestratorConfig {
            scratch_dir: scratch_dir.path().to_path_buf(),
        },
    );
    let cleanup = CleanupCoordinator::new(storage);
    let state = Arc::new(AppState::new(orchestrator, cleanup));

    let router = routes::setup_routes(&config, state);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        storage_dir,
        scratch_dir,
    }
}
