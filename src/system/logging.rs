//! Logging system initialization

use crate::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from configuration.
///
/// Logs go to stderr (so command output on stdout stays clean) unless a
/// log file is configured, in which case they append to that file without
/// ANSI colors.
///
/// # Returns
/// * `WorkerGuard` - must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If a global subscriber is already installed
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.log_file.as_deref() {
        Some(path) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("Failed to open log file");
            Box::new(file)
        }
        _ => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.log_file.as_ref().is_none_or(|f| f.is_empty()))
        .init();

    guard
}
