//! Tracing subscriber setup

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "vidsplit=debug,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. `log_format` is `compact` or `json`.
pub fn init_telemetry(log_format: &str) -> Result<(), Box<dyn std::error::Error>> {
    match log_format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
                .try_init()?;
        }
        "compact" => {
            let console_fmt = tracing_subscriber::fmt::layer().event_format(
                Format::default()
                    .compact()
                    .with_target(false)
                    .without_time(),
            );
            tracing_subscriber::registry()
                .with(env_filter())
                .with(console_fmt)
                .try_init()?;
        }
        other => return Err(format!("Unsupported log format '{}'", other).into()),
    }

    tracing::debug!(log_format, "Telemetry initialized");
    Ok(())
}
