use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Keeps the background writer flushing until dropped
#[allow(dead_code)]
pub struct LoggerGuard(WorkerGuard);

fn default_level(level: &str) -> &str {
    if LEVELS.contains(&level) {
        level
    } else {
        "info"
    }
}

/// Filter from `RUST_LOG` when set, otherwise `level`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(level)))
}

/// Log to `log_file` (appending). The terminal is owned by the UI, so nothing goes to stdout.
pub fn init(log_file: &Path, level: &str) -> io::Result<LoggerGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let (non_blocking, guard) = NonBlocking::new(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(level));

    tracing_subscriber::registry().with(file_layer).init();

    if default_level(level) != level {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
    }

    Ok(LoggerGuard(guard))
}
