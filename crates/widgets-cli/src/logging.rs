//! Tracing subscriber setup.
//!
//! Logs go to a daily rolling file so they never interleave with the REPL
//! output, unless `--log-stderr` is given. `RUST_LOG` overrides the configured
//! level.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use widgets_core::config::LoggingConfig;
use widgets_infrastructure::WidgetsPaths;

const LOG_FILE_PREFIX: &str = "widgets.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the life of the program.
pub fn init(config: &LoggingConfig, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
        return Ok(None);
    }

    let directory = log_directory(config)?;
    std::fs::create_dir_all(&directory)?;
    let appender = tracing_appender::rolling::daily(&directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!(directory = %directory.display(), "Logging to file");
    Ok(Some(guard))
}

fn log_directory(config: &LoggingConfig) -> Result<PathBuf> {
    match &config.directory {
        Some(directory) => Ok(PathBuf::from(directory)),
        None => Ok(WidgetsPaths::logs_dir()?),
    }
}
