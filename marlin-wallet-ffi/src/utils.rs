//! Library utilities: logging bridge, version, string release.

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::path::PathBuf;
use std::sync::OnceLock;

use marlin_wallet::{init_logging, LogFileConfig, LoggingConfig, LoggingGuard};

use crate::error::{set_last_error, FFIErrorCode};
use crate::types::FFIString;

/// Keeps the logging guard alive for the lifetime of the process so
/// buffered entries are flushed.
static LOGGING_GUARD: OnceLock<LoggingGuard> = OnceLock::new();

/// Initialize logging for the wallet library.
///
/// `level` may be null (falls back to `RUST_LOG`, then INFO); valid values
/// are "error", "warn", "info", "debug" and "trace". `log_dir` may be null
/// to disable file logging; `max_files` caps the archived log count.
///
/// # Safety
/// `level` and `log_dir` must each be null or a valid NUL-terminated
/// C string.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_init_logging(
    level: *const c_char,
    enable_console: bool,
    log_dir: *const c_char,
    max_files: usize,
) -> c_int {
    let level_filter = if level.is_null() {
        None
    } else {
        match std::ffi::CStr::from_ptr(level).to_str() {
            Ok(s) => match s.parse() {
                Ok(lf) => Some(lf),
                Err(_) => {
                    set_last_error(&format!(
                        "Invalid log level '{}'. Valid: error, warn, info, debug, trace",
                        s
                    ));
                    return FFIErrorCode::InvalidArgument as c_int;
                }
            },
            Err(e) => {
                set_last_error(&format!("Invalid UTF-8 in log level: {}", e));
                return FFIErrorCode::InvalidArgument as c_int;
            }
        }
    };

    let file_config = if log_dir.is_null() {
        None
    } else {
        match std::ffi::CStr::from_ptr(log_dir).to_str() {
            Ok(s) => Some(LogFileConfig {
                log_dir: PathBuf::from(s),
                max_files,
            }),
            Err(e) => {
                set_last_error(&format!("Invalid UTF-8 in log directory: {}", e));
                return FFIErrorCode::InvalidArgument as c_int;
            }
        }
    };

    let config = LoggingConfig {
        level: level_filter,
        console: enable_console,
        file: file_config,
    };

    match init_logging(config) {
        Ok(guard) => {
            // First init wins; OnceLock::set fails on repeat initialization.
            if LOGGING_GUARD.set(guard).is_err() {
                tracing::warn!("Logging already initialized, ignoring subsequent init");
            }
            FFIErrorCode::Success as c_int
        }
        Err(e) => {
            set_last_error(&format!("Failed to initialize logging: {}", e));
            FFIErrorCode::LoggingError as c_int
        }
    }
}

/// Returns the library version as a static string. Not to be freed.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Releases a string previously returned by this library.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_string_destroy(s: FFIString) {
    if !s.ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(s.ptr);
        }
    }
}
