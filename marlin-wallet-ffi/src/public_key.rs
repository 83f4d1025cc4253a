//! Public key entity.

use std::os::raw::{c_char, c_int};

use marlin_wallet::PublicKey;

use crate::error::{borrowed_str, report, FFIError};
use crate::registry::{self, Object};

/// Creates a public key from a 32-byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_public_key_create(
    bytes: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(bytes, |object| match object {
        Object::ByteVector(data) => Some(PublicKey::from_bytes(data).map_err(FFIError::from)),
        _ => None,
    })
    .and_then(|key| key)
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Creates a public key from a hex-encoded C string. The string is borrowed
/// only for the duration of the call.
///
/// # Safety
/// - `hex` must be a valid NUL-terminated C string.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_public_key_from_hex(
    hex: *const c_char,
    error_out: *mut c_int,
) -> u64 {
    let result = borrowed_str(hex)
        .and_then(|s| PublicKey::from_hex(&s).map_err(FFIError::from))
        .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Returns the key material as a new byte vector handle. The caller owns
/// the returned vector and destroys it independently of the key.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_public_key_get_bytes(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PublicKey(key) => Some(key.as_bytes().to_vec()),
        _ => None,
    })
    .map(|bytes| registry::insert(Object::ByteVector(bytes)));
    report(error_out, result, 0)
}

/// Releases the public key.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_public_key_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::PublicKey(_)));
}
