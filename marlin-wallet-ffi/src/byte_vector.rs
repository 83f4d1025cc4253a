//! Byte vector entity.
//!
//! Byte vectors carry raw key material into the library and 64-bit unsigned
//! field values out of it. Fields wider than the caller's signed integer
//! range are returned as fixed 8-byte big-endian vectors.

use std::os::raw::{c_int, c_uint};

use crate::error::{report, FFIError, FFIErrorCode};
use crate::registry::{self, Object};

/// Registers a `u64` field value as an 8-byte big-endian byte vector.
pub(crate) fn register_u64(value: u64) -> u64 {
    registry::insert(Object::ByteVector(value.to_be_bytes().to_vec()))
}

/// Creates a byte vector from a caller-owned buffer.
///
/// The buffer is copied; it is borrowed only for the duration of the call
/// and may be freed or mutated as soon as this function returns.
///
/// # Safety
/// - `bytes` must be null only when `len` is zero, otherwise it must point
///   to at least `len` readable bytes.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_byte_vector_create(
    bytes: *const u8,
    len: c_uint,
    error_out: *mut c_int,
) -> u64 {
    let result = if bytes.is_null() && len > 0 {
        Err(FFIError::new(FFIErrorCode::NullPointer, "null byte buffer with nonzero length"))
    } else {
        let data = if len == 0 {
            Vec::new()
        } else {
            std::slice::from_raw_parts(bytes, len as usize).to_vec()
        };
        Ok(registry::insert(Object::ByteVector(data)))
    };
    report(error_out, result, 0)
}

/// Returns the number of bytes in the vector.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_byte_vector_get_length(
    handle: u64,
    error_out: *mut c_int,
) -> c_uint {
    let result = registry::expect(handle, |object| match object {
        Object::ByteVector(data) => Some(data.len() as c_uint),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns the byte at `index`, or zero with `IndexOutOfRange` in the error
/// slot when the index is past the end.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_byte_vector_get_at(
    handle: u64,
    index: c_uint,
    error_out: *mut c_int,
) -> u8 {
    let result = registry::expect(handle, |object| match object {
        Object::ByteVector(data) => Some(data.get(index as usize).copied().ok_or_else(|| {
            FFIError::new(
                FFIErrorCode::IndexOutOfRange,
                format!("index {} out of range for byte vector of length {}", index, data.len()),
            )
        })),
        _ => None,
    })
    .and_then(|byte| byte);
    report(error_out, result, 0)
}

/// Releases the byte vector. The handle is invalid afterwards; a repeated
/// destroy is detected and recorded in the last-error message.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_byte_vector_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::ByteVector(_)));
}
