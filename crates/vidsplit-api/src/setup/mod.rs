//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod services;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidsplit_core::Config;

/// Initialize telemetry, services and routes
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        storage_backend = %config.storage_backend(),
        "Configuration loaded and validated successfully"
    );

    let state = services::initialize_services(&config).await?;

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
