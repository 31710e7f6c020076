//! Structured logging bootstrap.
//!
//! Initializes the `tracing-subscriber` stack from a
//! [`LoggingConfig`](rolodex_config::LoggingConfig): JSON output for
//! production, pretty output for development, with the level taken from
//! the configured filter.
//!
//! # Example
//!
//! ```rust,ignore
//! use rolodex_config::LoggingConfig;
//!
//! rolodex::logging::init(&LoggingConfig::default())?;
//!
//! tracing::info!(view = "contact-list", "navigation resolved");
//! ```

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use rolodex_config::{LogFormat, LoggingConfig};

/// Errors from logging initialization.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Init(String),
}

/// Initializes the global logging subscriber.
///
/// A no-op when logging is disabled in the configuration. Fails if a
/// global subscriber is already installed or the level filter does not
/// parse.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::Init(format!("invalid log level: {e}")))?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_ansi(config.ansi_enabled)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_ansi(config.ansi_enabled)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
    }

    Ok(())
}
