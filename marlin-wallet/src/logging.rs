//! Logging configuration and file rotation for the wallet library.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{LoggingError, LoggingResult};

/// Prefix for archived log files.
const LOG_FILE_PREFIX: &str = "marlin.";
/// Name of the active log file.
const ACTIVE_LOG_NAME: &str = "wallet.log";

/// Guard that must be kept alive so buffered log entries are flushed when
/// the process shuts down.
#[derive(Debug)]
pub struct LoggingGuard {
    _worker_guard: Option<WorkerGuard>,
}

/// Configuration for logging output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter. If None, falls back to `RUST_LOG` then INFO.
    pub level: Option<LevelFilter>,
    /// Whether to output logs to console (stderr).
    pub console: bool,
    /// Optional file logging configuration.
    pub file: Option<LogFileConfig>,
}

/// Configuration for log file output.
#[derive(Debug, Clone)]
pub struct LogFileConfig {
    /// Directory where log files will be stored.
    pub log_dir: PathBuf,
    /// Maximum number of archived log files to keep.
    pub max_files: usize,
}

/// Initialize logging with the given configuration.
///
/// Returns a [`LoggingGuard`] that must be kept alive for the lifetime of
/// the application. If neither console nor file output is enabled, logging
/// is disabled and tracing macros become no-ops.
pub fn init_logging(config: LoggingConfig) -> LoggingResult<LoggingGuard> {
    if !config.console && config.file.is_none() {
        return Ok(LoggingGuard {
            _worker_guard: None,
        });
    }

    let env_filter = match config.level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LevelFilter::INFO.to_string())),
    };

    let (file_layer, guard) = if let Some(ref file_config) = config.file {
        let (non_blocking, guard) = setup_file_logging(file_config)?;
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(false)
            .with_writer(non_blocking);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_layer =
        config.console.then(|| fmt::layer().with_target(true).with_thread_ids(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::SubscriberInit(e.to_string()))?;

    Ok(LoggingGuard {
        _worker_guard: guard,
    })
}

/// Create the log directory, rotate the previous active log, delete stale
/// archives and open a non-blocking writer for the new active log.
fn setup_file_logging(config: &LogFileConfig) -> LoggingResult<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.log_dir)?;
    rotate_previous_log(&config.log_dir)?;
    cleanup_old_logs(&config.log_dir, config.max_files)?;

    let log_path = config.log_dir.join(ACTIVE_LOG_NAME);
    let file = File::create(&log_path)?;

    Ok(tracing_appender::non_blocking(file))
}

/// Rename the previous active log to `marlin.YYYY-MM-DD.HHMMSS.log`, using
/// the file modification time as the timestamp.
fn rotate_previous_log(log_dir: &Path) -> LoggingResult<()> {
    let active_path = log_dir.join(ACTIVE_LOG_NAME);
    if !active_path.exists() {
        return Ok(());
    }

    let timestamp = get_file_modification_time(&active_path).unwrap_or_else(Local::now);
    let archive_name = format!("{}{}.log", LOG_FILE_PREFIX, timestamp.format("%Y-%m-%d.%H%M%S"));
    let archive_path = log_dir.join(&archive_name);

    // Same-second restarts collide on the archive name; add a suffix.
    let final_path = if archive_path.exists() {
        (1..=999)
            .map(|i| {
                log_dir.join(format!(
                    "{}{}-{}.log",
                    LOG_FILE_PREFIX,
                    timestamp.format("%Y-%m-%d.%H%M%S"),
                    i
                ))
            })
            .find(|p| !p.exists())
            .ok_or_else(|| {
                LoggingError::RotationFailed("too many log files with same timestamp".to_string())
            })?
    } else {
        archive_path
    };

    fs::rename(&active_path, &final_path).map_err(|e| LoggingError::RotationFailed(e.to_string()))
}

fn get_file_modification_time(path: &Path) -> Option<DateTime<Local>> {
    let metadata = fs::metadata(path).ok()?;
    let modified = metadata.modified().ok()?;
    Some(DateTime::from(modified))
}

/// Delete the oldest archived logs when the count exceeds `max_files`. The
/// active log is never deleted.
fn cleanup_old_logs(log_dir: &Path, max_files: usize) -> LoggingResult<()> {
    let mut archived: Vec<_> = fs::read_dir(log_dir)
        .map_err(|e| LoggingError::RotationFailed(format!("failed to read log dir: {}", e)))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    if archived.len() <= max_files {
        return Ok(());
    }

    archived.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        a_time.cmp(&b_time)
    });

    let to_remove = archived.len() - max_files;
    for entry in archived.into_iter().take(to_remove) {
        if let Err(e) = fs::remove_file(entry.path()) {
            tracing::warn!("Failed to remove old log file {:?}: {}", entry.path(), e);
        }
    }

    Ok(())
}
