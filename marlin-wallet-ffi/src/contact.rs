//! Contact entity and contact list accessors.

use std::os::raw::{c_char, c_int, c_uint};

use marlin_wallet::Contact;

use crate::error::{borrowed_str, report, FFIError, FFIErrorCode};
use crate::registry::{self, Object};
use crate::types::FFIString;

/// Creates a contact from an alias and a public key handle.
///
/// The alias string is borrowed only for the duration of the call; the key
/// behind `public_key` is copied and the handle stays owned by the caller.
///
/// # Safety
/// - `alias` must be a valid NUL-terminated C string.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_contact_create(
    alias: *const c_char,
    public_key: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = borrowed_str(alias).and_then(|alias| {
        let key = registry::expect(public_key, |object| match object {
            Object::PublicKey(key) => Some(*key),
            _ => None,
        })?;
        let contact = Contact::new(alias, key).map_err(FFIError::from)?;
        Ok(registry::insert(Object::Contact(contact)))
    });
    report(error_out, result, 0)
}

/// Returns the contact's alias as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_contact_get_alias(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::Contact(contact) => Some(FFIString::new(contact.alias())),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns a new public key handle for the contact's key.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_contact_get_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Contact(contact) => Some(*contact.public_key()),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Releases the contact.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_contact_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::Contact(_)));
}

/// Returns the number of contacts in the list.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_contacts_get_length(
    handle: u64,
    error_out: *mut c_int,
) -> c_uint {
    let result = registry::expect(handle, |object| match object {
        Object::Contacts(contacts) => Some(contacts.len() as c_uint),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns a new contact handle for the element at `index`. Out-of-range
/// indexes are reported solely through the error slot.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_contacts_get_at(
    handle: u64,
    index: c_uint,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Contacts(contacts) => {
            Some(contacts.get(index as usize).cloned().ok_or_else(|| {
                FFIError::new(
                    FFIErrorCode::IndexOutOfRange,
                    format!(
                        "index {} out of range for contact list of length {}",
                        index,
                        contacts.len()
                    ),
                )
            }))
        }
        _ => None,
    })
    .and_then(|contact| contact)
    .map(|contact| registry::insert(Object::Contact(contact)));
    report(error_out, result, 0)
}

/// Releases the contact list. Element handles handed out by `get_at` stay
/// valid; they own copies.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_contacts_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::Contacts(_)));
}
