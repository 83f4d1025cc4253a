//! Common FFI value types.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use marlin_wallet::TransportType;

/// Owned string returned to the caller. Must be freed with
/// `marlin_wallet_ffi_string_destroy`.
#[repr(C)]
pub struct FFIString {
    pub ptr: *mut c_char,
    pub length: usize,
}

impl FFIString {
    pub fn new(s: &str) -> Self {
        let c_string = CString::new(s).unwrap_or_else(|_| CString::new("").unwrap());
        // Length of the finalized CString, in case the input contained NULs.
        let length = c_string.as_bytes().len();
        FFIString {
            ptr: c_string.into_raw(),
            length,
        }
    }

    pub fn null() -> Self {
        FFIString {
            ptr: std::ptr::null_mut(),
            length: 0,
        }
    }

    /// # Safety
    /// `ptr` must be null or point to a valid NUL-terminated C string that
    /// remains valid for the duration of this call.
    pub unsafe fn from_ptr(ptr: *const c_char) -> Result<String, String> {
        if ptr.is_null() {
            return Err("Null pointer".to_string());
        }
        CStr::from_ptr(ptr).to_str().map(|s| s.to_string()).map_err(|e| e.to_string())
    }
}

/// Transport selection for the comms configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FFITransportType {
    Memory = 0,
    Tcp = 1,
    Tor = 2,
}

impl From<FFITransportType> for TransportType {
    fn from(t: FFITransportType) -> Self {
        match t {
            FFITransportType::Memory => TransportType::Memory,
            FFITransportType::Tcp => TransportType::Tcp,
            FFITransportType::Tor => TransportType::Tor,
        }
    }
}

impl From<TransportType> for FFITransportType {
    fn from(t: TransportType) -> Self {
        match t {
            TransportType::Memory => FFITransportType::Memory,
            TransportType::Tcp => FFITransportType::Tcp,
            TransportType::Tor => FFITransportType::Tor,
        }
    }
}
