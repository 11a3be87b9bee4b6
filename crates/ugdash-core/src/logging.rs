//! Logging bootstrap.
//!
//! Installs a `tracing` subscriber once per process. `RUST_LOG` wins over the
//! configured level. With `[log] file = true` events go to a daily-rolling file
//! under `<home>/logs`, otherwise to stderr so stdout stays clean for output.

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

const LOG_FILE_PREFIX: &str = "ugdash.log";

/// Keeps the non-blocking file writer alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initializes logging. Repeated calls are no-ops. Never panics.
pub fn init(config: &LogConfig, logs_dir: &Path) {
    if INITIALIZED.set(()).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    if config.file {
        if let Err(err) = std::fs::create_dir_all(logs_dir) {
            eprintln!(
                "Warning: cannot create log directory {}: {err}; logging to stderr",
                logs_dir.display()
            );
            init_stderr(filter);
            return;
        }
        let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init();
    } else {
        init_stderr(filter);
    }
}

fn init_stderr(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
