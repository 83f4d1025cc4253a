//! Comms configuration construction and accessors.

use std::os::raw::{c_char, c_int};
use std::time::Duration;

use marlin_wallet::CommsConfig;

use crate::error::{borrowed_str, report, FFIError};
use crate::registry::{self, Object};
use crate::types::{FFIString, FFITransportType};

/// Builds a comms configuration.
///
/// All string arguments are borrowed only for the duration of the call and
/// are released on every exit path; the caller keeps ownership of the
/// buffers. The datastore path must be an existing directory.
///
/// # Safety
/// - `public_address`, `database_name` and `datastore_path` must be valid
///   NUL-terminated C strings.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_comms_config_create(
    public_address: *const c_char,
    transport: FFITransportType,
    database_name: *const c_char,
    datastore_path: *const c_char,
    discovery_timeout_secs: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = (|| -> Result<u64, FFIError> {
        let public_address = borrowed_str(public_address)?;
        let database_name = borrowed_str(database_name)?;
        let datastore_path = borrowed_str(datastore_path)?;
        let config = CommsConfig::new(
            public_address,
            transport.into(),
            database_name,
            datastore_path,
            Duration::from_secs(discovery_timeout_secs),
        )
        .map_err(FFIError::from)?;
        Ok(registry::insert(Object::CommsConfig(config)))
    })();
    report(error_out, result, 0)
}

/// Returns the configured public address as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_comms_config_get_public_address(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::CommsConfig(config) => Some(FFIString::new(config.public_address())),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns the configured database name as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_comms_config_get_database_name(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::CommsConfig(config) => Some(FFIString::new(config.database_name())),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns the discovery timeout in seconds.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_comms_config_get_discovery_timeout(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CommsConfig(config) => Some(config.discovery_timeout().as_secs()),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns the configured transport.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_comms_config_get_transport(
    handle: u64,
    error_out: *mut c_int,
) -> FFITransportType {
    let result = registry::expect(handle, |object| match object {
        Object::CommsConfig(config) => Some(config.transport().into()),
        _ => None,
    });
    report(error_out, result, FFITransportType::Memory)
}

/// Releases the comms configuration.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_comms_config_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::CommsConfig(_)));
}
