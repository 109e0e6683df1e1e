//! Structured logging setup using tracing
//!
//! Console fmt output is always enabled; JSON file logging with rotation
//! can be switched on through [`LoggingConfig`].
//!
//! # Example
//!
//! ```no_run
//! use pii_scrub::logging::init_logging;
//! use pii_scrub::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Engine starting");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{Result, ScrubError};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure file logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system based on configuration
///
/// Sets up a console fmt layer filtered by `RUST_LOG` (falling back to
/// `pii_scrub=<level>`), plus an optional JSON file layer with rolling
/// rotation.
///
/// # Errors
///
/// Returns a `Configuration` error when the level doesn't parse or the
/// log directory cannot be created.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pii_scrub={level}")));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    let file_guard = if config.file_enabled {
        let rotation = match config.file_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.file_path).map_err(|e| {
            ScrubError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.file_path, e
            ))
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.file_path, "pii-scrub.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(EnvFilter::new(format!("pii_scrub={level}")));

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| ScrubError::Configuration(format!("Failed to init logging: {e}")))?;

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .map_err(|e| ScrubError::Configuration(format!("Failed to init logging: {e}")))?;

        None
    };

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(ScrubError::Configuration(format!(
            "Invalid log level: {other}"
        ))),
    }
}
