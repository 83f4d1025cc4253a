//! Wallet lifecycle and collection getters.

use std::os::raw::{c_char, c_int};

use marlin_wallet::Wallet;
use tracing::debug;

use crate::byte_vector::register_u64;
use crate::error::{borrowed_str, report, FFIError, FFIErrorCode};
use crate::registry::{self, Object};

/// Transaction ids cross the boundary as decimal strings because callers'
/// signed 64-bit integers cannot hold the full unsigned range.
fn parse_tx_id(s: String) -> Result<u64, FFIError> {
    s.trim().parse().map_err(|_| {
        FFIError::new(FFIErrorCode::InvalidArgument, format!("invalid transaction id: {:?}", s))
    })
}

/// Opens a wallet for the comms configuration behind `comms_config`. The
/// configuration is read, not consumed; its handle stays owned by the
/// caller.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_create(
    comms_config: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(comms_config, |object| match object {
        Object::CommsConfig(config) => Some(Wallet::new(config).map_err(FFIError::from)),
        _ => None,
    })
    .and_then(|wallet| wallet)
    .map(|wallet| {
        debug!(identity = %wallet.public_key(), "wallet opened");
        registry::insert(Object::Wallet(wallet))
    });
    report(error_out, result, 0)
}

/// Returns a new public key handle for the wallet identity.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(*wallet.public_key()),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Returns the spendable balance as an 8-byte big-endian byte vector
/// handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_available_balance(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.available_balance()),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the pending incoming balance as an 8-byte big-endian byte
/// vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_incoming_balance(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.pending_incoming_balance()),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the pending outgoing balance (amounts plus fees) as an 8-byte
/// big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_outgoing_balance(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.pending_outgoing_balance()),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns a snapshot of the contact book as a new contact list handle.
/// The caller owns the list and destroys it independently of the wallet.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_contacts(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.contacts()),
        _ => None,
    })
    .map(|contacts| registry::insert(Object::Contacts(contacts)));
    report(error_out, result, 0)
}

/// Returns a snapshot of the completed transactions as a new list handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_completed_transactions(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.completed_transactions()),
        _ => None,
    })
    .map(|txs| registry::insert(Object::CompletedTransactions(txs)));
    report(error_out, result, 0)
}

/// Returns a snapshot of the pending inbound transactions as a new list
/// handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_inbound_transactions(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.pending_inbound_transactions()),
        _ => None,
    })
    .map(|txs| registry::insert(Object::PendingInboundTransactions(txs)));
    report(error_out, result, 0)
}

/// Returns a snapshot of the pending outbound transactions as a new list
/// handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_outbound_transactions(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::Wallet(wallet) => Some(wallet.pending_outbound_transactions()),
        _ => None,
    })
    .map(|txs| registry::insert(Object::PendingOutboundTransactions(txs)));
    report(error_out, result, 0)
}

/// Returns a new handle for the completed transaction with the given id.
/// The id is a decimal string, borrowed only for the call. A missing id
/// sets `TransactionNotFound` in the error slot.
///
/// # Safety
/// - `tx_id` must be a valid NUL-terminated C string.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_completed_transaction_by_id(
    handle: u64,
    tx_id: *const c_char,
    error_out: *mut c_int,
) -> u64 {
    let result = borrowed_str(tx_id)
        .and_then(parse_tx_id)
        .and_then(|id| {
            registry::expect(handle, |object| match object {
                Object::Wallet(wallet) => {
                    Some(wallet.completed_transaction_by_id(id).map_err(FFIError::from))
                }
                _ => None,
            })
            .and_then(|tx| tx)
        })
        .map(|tx| registry::insert(Object::CompletedTransaction(tx)));
    report(error_out, result, 0)
}

/// Returns a new handle for the pending inbound transaction with the given
/// id. The id is a decimal string, borrowed only for the call.
///
/// # Safety
/// - `tx_id` must be a valid NUL-terminated C string.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_inbound_transaction_by_id(
    handle: u64,
    tx_id: *const c_char,
    error_out: *mut c_int,
) -> u64 {
    let result = borrowed_str(tx_id)
        .and_then(parse_tx_id)
        .and_then(|id| {
            registry::expect(handle, |object| match object {
                Object::Wallet(wallet) => {
                    Some(wallet.pending_inbound_transaction_by_id(id).map_err(FFIError::from))
                }
                _ => None,
            })
            .and_then(|tx| tx)
        })
        .map(|tx| registry::insert(Object::PendingInboundTransaction(tx)));
    report(error_out, result, 0)
}

/// Returns a new handle for the pending outbound transaction with the
/// given id. The id is a decimal string, borrowed only for the call.
///
/// # Safety
/// - `tx_id` must be a valid NUL-terminated C string.
/// - `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_get_pending_outbound_transaction_by_id(
    handle: u64,
    tx_id: *const c_char,
    error_out: *mut c_int,
) -> u64 {
    let result = borrowed_str(tx_id)
        .and_then(parse_tx_id)
        .and_then(|id| {
            registry::expect(handle, |object| match object {
                Object::Wallet(wallet) => {
                    Some(wallet.pending_outbound_transaction_by_id(id).map_err(FFIError::from))
                }
                _ => None,
            })
            .and_then(|tx| tx)
        })
        .map(|tx| registry::insert(Object::PendingOutboundTransaction(tx)));
    report(error_out, result, 0)
}

/// Adds the contact behind `contact` to the wallet, replacing any entry
/// with the same public key. The contact is copied; its handle stays owned
/// by the caller. Returns true on success.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_add_update_contact(
    handle: u64,
    contact: u64,
    error_out: *mut c_int,
) -> bool {
    let result = registry::expect(contact, |object| match object {
        Object::Contact(contact) => Some(contact.clone()),
        _ => None,
    })
    .and_then(|contact| {
        registry::with_mut(handle, |object| match object {
            Object::Wallet(wallet) => {
                let replaced = wallet.add_update_contact(contact.clone());
                debug!(alias = contact.alias(), replaced, "contact upserted");
                Ok(true)
            }
            other => Err(FFIError::new(
                FFIErrorCode::InvalidHandle,
                format!("handle refers to a {}, not a wallet", other.kind()),
            )),
        })
    });
    report(error_out, result, false)
}

/// Removes the contact with the same public key as the contact behind
/// `contact`. Returns true on success; a missing contact sets
/// `ContactNotFound` in the error slot.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_wallet_remove_contact(
    handle: u64,
    contact: u64,
    error_out: *mut c_int,
) -> bool {
    let result = registry::expect(contact, |object| match object {
        Object::Contact(contact) => Some(*contact.public_key()),
        _ => None,
    })
    .and_then(|key| {
        registry::with_mut(handle, |object| match object {
            Object::Wallet(wallet) => {
                wallet.remove_contact(&key).map_err(FFIError::from)?;
                Ok(true)
            }
            other => Err(FFIError::new(
                FFIErrorCode::InvalidHandle,
                format!("handle refers to a {}, not a wallet", other.kind()),
            )),
        })
    });
    report(error_out, result, false)
}

/// Releases the wallet. Snapshot collections and entity handles previously
/// handed out stay valid; they own copies.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_wallet_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::Wallet(_)));
}
