//! Configuration module
//!
//! Settings are read from the environment (and a `.env` file when present). The
//! only external services are the blob store and the ffmpeg/ffprobe binaries.

use std::env;
use std::path::PathBuf;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 8080;
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
const FFMPEG_PATH: &str = "ffmpeg";
const FFPROBE_PATH: &str = "ffprobe";

/// Base configuration shared by the server and the CLI
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    /// `compact` (default) or `json`
    pub log_format: String,
    pub max_request_body_bytes: usize,
}

/// Splitter service configuration
#[derive(Clone, Debug)]
pub struct SplitterConfig {
    pub base: BaseConfig,
    pub storage_backend: StorageBackend,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // S3-compatible providers (MinIO etc.)
    pub local_storage_path: Option<PathBuf>,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    /// Parent directory for per-call scratch directories
    pub scratch_dir: PathBuf,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<SplitterConfig>);

impl Config {
    pub fn new(config: SplitterConfig) -> Self {
        Config(Box::new(config))
    }

    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", port, e))?,
            None => SERVER_PORT,
        };

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let log_format = var("LOG_FORMAT")
            .map(|f| f.trim().to_lowercase())
            .unwrap_or_else(|| "compact".to_string());

        let max_request_body_bytes = match var("MAX_REQUEST_BODY_BYTES") {
            Some(limit) => limit.trim().parse::<usize>().map_err(|e| {
                anyhow::anyhow!("Invalid MAX_REQUEST_BODY_BYTES '{}': {}", limit, e)
            })?,
            None => MAX_REQUEST_BODY_BYTES,
        };

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(backend) => backend.parse::<StorageBackend>()?,
            None => StorageBackend::Gcs,
        };

        let config = SplitterConfig {
            base: BaseConfig {
                server_port,
                environment,
                log_format,
                max_request_body_bytes,
            },
            storage_backend,
            s3_region: var("S3_REGION").or_else(|| var("AWS_REGION")),
            s3_endpoint: var("S3_ENDPOINT"),
            local_storage_path: var("LOCAL_STORAGE_PATH").map(PathBuf::from),
            ffmpeg_path: var("FFMPEG_PATH").unwrap_or_else(|| FFMPEG_PATH.to_string()),
            ffprobe_path: var("FFPROBE_PATH").unwrap_or_else(|| FFPROBE_PATH.to_string()),
            scratch_dir: var("SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        };

        let config = Config::new(config);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let c = &self.0;
        match c.storage_backend {
            StorageBackend::S3 if c.s3_region.is_none() => {
                return Err(anyhow::anyhow!(
                    "S3_REGION or AWS_REGION must be set when STORAGE_BACKEND=s3"
                ));
            }
            StorageBackend::Local if c.local_storage_path.is_none() => {
                return Err(anyhow::anyhow!(
                    "LOCAL_STORAGE_PATH must be set when STORAGE_BACKEND=local"
                ));
            }
            _ => {}
        }

        if !matches!(c.base.log_format.as_str(), "compact" | "json") {
            return Err(anyhow::anyhow!(
                "LOG_FORMAT must be 'compact' or 'json', got '{}'",
                c.base.log_format
            ));
        }

        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.0.base.log_format
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.0.base.max_request_body_bytes
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.0.storage_backend
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.0.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.0.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&std::path::Path> {
        self.0.local_storage_path.as_deref()
    }

    pub fn ffmpeg_path(&self) -> &str {
        &self.0.ffmpeg_path
    }

    pub fn ffprobe_path(&self) -> &str {
        &self.0.ffprobe_path
    }

    pub fn scratch_dir(&self) -> &std::path::Path {
        &self.0.scratch_dir
    }
}
