//! File logging setup
//!
//! The terminal belongs to the browser while it runs, so logs only ever go
//! to a file. Nothing is installed unless a log path is configured.

use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive; logs are flushed when dropped
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Install a tracing subscriber that appends to `path`
///
/// The level comes from `RUST_LOG` and defaults to `info`. Returns `None`
/// when no path is given.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init(path: Option<&Path>) -> std::io::Result<Option<LogGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(Some(LogGuard { _guard: guard }))
}
