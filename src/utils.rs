//! Process-level helpers: logging setup and shutdown signals.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::error::ConfigError;

/// Filter used in debug mode: this crate and request spans only.
pub const DEBUG_FILTER: &str = "devops_info_service=debug,tower_http=debug,info";

/// Build the log filter for `config`.
///
/// Debug mode forces [`DEBUG_FILTER`]. Otherwise `RUST_LOG` wins over `LOG_LEVEL`.
pub fn log_filter(config: &Config) -> Result<EnvFilter, ConfigError> {
    let level = config.effective_log_level()?;
    if config.debug {
        return Ok(EnvFilter::new(DEBUG_FILTER));
    }
    Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())))
}

/// Install the global tracing subscriber. Call once, before serving.
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let filter = log_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.output_format()? {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
