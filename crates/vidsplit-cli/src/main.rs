//! Vidsplit CLI: run a split, a cleanup or a dry-run plan in-process.
//!
//! Reads the same environment as the HTTP service (`STORAGE_BACKEND`,
//! `FFMPEG_PATH`, ...). Results are printed as JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use vidsplit_cli::{init_tracing, plan_preview};
use vidsplit_core::{CleanupRequest, Config, SizeTierPolicy};
use vidsplit_processing::{
    CleanupCoordinator, FFmpegExtractor, FfprobeProbe, SplitOrchestrator,
    SplitOrchestratorConfig,
};
use vidsplit_storage::create_storage;

#[derive(Parser)]
#[command(name = "vidsplit", about = "Split stored videos into size-tiered segments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a stored video and print the segment URIs
    Split {
        /// Source video URI (e.g. gs://bucket/video.mp4)
        file_uri: String,
    },
    /// Delete segments and, optionally, the original video
    Cleanup {
        /// Original video URI
        #[arg(long)]
        file_uri: Option<String>,
        /// Segment URI to delete (repeatable)
        #[arg(long = "part")]
        parts: Vec<String>,
    },
    /// Show the segment plan for a file size and duration without touching storage
    Plan {
        /// File size in bytes
        #[arg(long)]
        size_bytes: u64,
        /// Duration in seconds
        #[arg(long)]
        duration: f64,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            size_bytes,
            duration,
        } => {
            let preview = plan_preview(&SizeTierPolicy::default(), size_bytes, duration)?;
            print_json(&preview)?;
        }
        Commands::Split { file_uri } => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let storage = create_storage(&config)
                .await
                .context("Failed to initialize storage")?;

            let orchestrator = SplitOrchestrator::new(
                storage,
                Arc::new(FfprobeProbe::new(config.ffprobe_path())?),
                Arc::new(FFmpegExtractor::new(config.ffmpeg_path())?),
                SplitOrchestratorConfig {
                    scratch_dir: config.scratch_dir().to_path_buf(),
                },
            );

            let parts = orchestrator.split(&file_uri).await?;
            print_json(&serde_json::json!({ "parts": parts }))?;
        }
        Commands::Cleanup { file_uri, parts } => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let storage = create_storage(&config)
                .await
                .context("Failed to initialize storage")?;

            let coordinator = CleanupCoordinator::new(storage);
            let result = coordinator
                .cleanup(&CleanupRequest::new(file_uri, parts))
                .await;
            print_json(&serde_json::json!({
                "message": result.message(),
                "deleted_count": result.deleted_count,
            }))?;
        }
    }

    Ok(())
}
