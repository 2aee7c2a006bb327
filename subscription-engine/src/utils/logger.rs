//! Logging Infrastructure
//!
//! Structured logging for the engine binary and embedding services.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info` level, stdout only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily rolling file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. Calling this twice
/// is harmless; the second call is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "subscription-engine");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        eprintln!("Log directory {} does not exist, logging to stdout", dir);
    }

    let _ = subscriber.try_init();
}
