//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to `log_path`.

use crate::config::TuiConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid log filter: {0}")]
    Filter(String),
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// `RUST_LOG` wins over the configured filter.
pub fn env_filter(config: &TuiConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|err| LoggingError::Filter(err.to_string())),
    }
}

pub fn init_logging(config: &TuiConfig) -> Result<(), LoggingError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))?;

    tracing::info!(path = %config.log_path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_is_reported() {
        let config = TuiConfig {
            log_filter: "cryptodash=notalevel".to_string(),
            ..TuiConfig::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(env_filter(&config), Err(LoggingError::Filter(_))));
        }
    }
}
