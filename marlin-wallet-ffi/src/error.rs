//! Error-slot handling for the FFI boundary.
//!
//! Every fallible entry point takes a trailing `error_out: *mut c_int` and
//! writes it on every call: zero on success, a nonzero [`FFIErrorCode`] on
//! failure. A human-readable message for the most recent failure on the
//! calling thread is retrievable via `marlin_wallet_ffi_get_last_error`.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};

use marlin_wallet::WalletError;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = RefCell::new(None);
}

/// Status codes written to the caller's error slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FFIErrorCode {
    Success = 0,
    NullPointer = 1,
    InvalidArgument = 2,
    InvalidHandle = 3,
    UseAfterFree = 4,
    IndexOutOfRange = 5,
    InvalidPublicKey = 6,
    ContactError = 7,
    ContactNotFound = 8,
    ConfigError = 9,
    WalletError = 10,
    LoggingError = 11,
    TransactionNotFound = 12,
    Unknown = 99,
}

/// Internal error carried between the registry, the conversion helpers and
/// the entry points before being flattened into the error slot.
#[derive(Debug, Clone)]
pub(crate) struct FFIError {
    pub code: FFIErrorCode,
    pub message: String,
}

impl FFIError {
    pub fn new(code: FFIErrorCode, message: impl Into<String>) -> Self {
        FFIError {
            code,
            message: message.into(),
        }
    }
}

impl From<WalletError> for FFIError {
    fn from(err: WalletError) -> Self {
        let code = match &err {
            WalletError::InvalidPublicKey(_) => FFIErrorCode::InvalidPublicKey,
            WalletError::InvalidContact(_) => FFIErrorCode::ContactError,
            WalletError::ContactNotFound => FFIErrorCode::ContactNotFound,
            WalletError::TransactionNotFound(_) => FFIErrorCode::TransactionNotFound,
            WalletError::Config(_) => FFIErrorCode::ConfigError,
            WalletError::Logging(_) => FFIErrorCode::LoggingError,
            WalletError::Io(_) => FFIErrorCode::WalletError,
        };
        FFIError::new(code, err.to_string())
    }
}

pub fn set_last_error(err: &str) {
    let c_err = CString::new(err).unwrap_or_else(|_| CString::new("Unknown error").unwrap());
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(c_err);
    });
}

pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Returns the message for the most recent failure on this thread, or null.
///
/// The pointer is owned by the library and valid until the next failing call
/// on the same thread.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| e.borrow().as_ref().map(|err| err.as_ptr()).unwrap_or(std::ptr::null()))
}

#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_clear_error() {
    clear_last_error();
}

/// Writes a code into the caller's error slot, tolerating a null slot.
pub(crate) fn write_code(error_out: *mut c_int, code: FFIErrorCode) {
    if !error_out.is_null() {
        unsafe {
            *error_out = code as c_int;
        }
    }
}

/// Flattens a result into the error slot and a return value.
///
/// On failure the caller receives `default`; the error slot is the only
/// reliable failure signal and must be checked before the value is used.
pub(crate) fn report<T>(error_out: *mut c_int, result: Result<T, FFIError>, default: T) -> T {
    match result {
        Ok(value) => {
            clear_last_error();
            write_code(error_out, FFIErrorCode::Success);
            value
        }
        Err(e) => {
            set_last_error(&e.message);
            write_code(error_out, e.code);
            default
        }
    }
}

/// Reads a borrowed, NUL-terminated C string for the duration of one call.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string that stays
/// alive for the call.
pub(crate) unsafe fn borrowed_str(ptr: *const c_char) -> Result<String, FFIError> {
    if ptr.is_null() {
        return Err(FFIError::new(FFIErrorCode::NullPointer, "null string pointer"));
    }
    std::ffi::CStr::from_ptr(ptr)
        .to_str()
        .map(|s| s.to_string())
        .map_err(|e| FFIError::new(FFIErrorCode::InvalidArgument, format!("invalid UTF-8: {}", e)))
}
