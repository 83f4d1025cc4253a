//! Transaction entities and their collection accessors.
//!
//! Each collection exposes the same length / indexed-get / destroy triple;
//! each entity exposes one accessor per field. Amounts, fees, ids and
//! timestamps cross the boundary as 8-byte big-endian byte vectors because
//! the callers' signed 64-bit integers cannot hold the full unsigned range.

use std::os::raw::{c_int, c_uint};

use crate::byte_vector::register_u64;
use crate::error::{report, FFIError, FFIErrorCode};
use crate::registry::{self, Object};
use crate::types::FFIString;

fn out_of_range(index: c_uint, length: usize, what: &str) -> FFIError {
    FFIError::new(
        FFIErrorCode::IndexOutOfRange,
        format!("index {} out of range for {} of length {}", index, what, length),
    )
}

// Completed transactions

/// Returns the number of completed transactions in the list.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transactions_get_length(
    handle: u64,
    error_out: *mut c_int,
) -> c_uint {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransactions(txs) => Some(txs.len() as c_uint),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns a new completed-transaction handle for the element at `index`.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transactions_get_at(
    handle: u64,
    index: c_uint,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransactions(txs) => Some(
            txs.get(index as usize)
                .cloned()
                .ok_or_else(|| out_of_range(index, txs.len(), "completed transaction list")),
        ),
        _ => None,
    })
    .and_then(|tx| tx)
    .map(|tx| registry::insert(Object::CompletedTransaction(tx)));
    report(error_out, result, 0)
}

/// Releases the completed transaction list.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_completed_transactions_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::CompletedTransactions(_)));
}

// Pending inbound transactions

/// Returns the number of pending inbound transactions in the list.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transactions_get_length(
    handle: u64,
    error_out: *mut c_int,
) -> c_uint {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransactions(txs) => Some(txs.len() as c_uint),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns a new pending-inbound-transaction handle for the element at
/// `index`.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transactions_get_at(
    handle: u64,
    index: c_uint,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransactions(txs) => Some(
            txs.get(index as usize)
                .cloned()
                .ok_or_else(|| out_of_range(index, txs.len(), "pending inbound transaction list")),
        ),
        _ => None,
    })
    .and_then(|tx| tx)
    .map(|tx| registry::insert(Object::PendingInboundTransaction(tx)));
    report(error_out, result, 0)
}

/// Releases the pending inbound transaction list.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_pending_inbound_transactions_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::PendingInboundTransactions(_)));
}

// Pending outbound transactions

/// Returns the number of pending outbound transactions in the list.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transactions_get_length(
    handle: u64,
    error_out: *mut c_int,
) -> c_uint {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransactions(txs) => Some(txs.len() as c_uint),
        _ => None,
    });
    report(error_out, result, 0)
}

/// Returns a new pending-outbound-transaction handle for the element at
/// `index`.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transactions_get_at(
    handle: u64,
    index: c_uint,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransactions(txs) => Some(
            txs.get(index as usize)
                .cloned()
                .ok_or_else(|| out_of_range(index, txs.len(), "pending outbound transaction list")),
        ),
        _ => None,
    })
    .and_then(|tx| tx)
    .map(|tx| registry::insert(Object::PendingOutboundTransaction(tx)));
    report(error_out, result, 0)
}

/// Releases the pending outbound transaction list.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_pending_outbound_transactions_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::PendingOutboundTransactions(_)));
}

// Completed transaction fields

/// Returns the transaction id as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_id(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.id),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the amount as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_amount(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.amount),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the fee as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_fee(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.fee),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the timestamp as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_timestamp(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.timestamp),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the transaction message as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_message(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(FFIString::new(&tx.message)),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns the status code of the transaction.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_status(
    handle: u64,
    error_out: *mut c_int,
) -> c_int {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.status.as_code()),
        _ => None,
    });
    report(error_out, result, -1)
}

/// Returns a new public key handle for the transaction source.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_source_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.source),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Returns a new public key handle for the transaction destination.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_completed_transaction_get_destination_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::CompletedTransaction(tx) => Some(tx.destination),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Releases the completed transaction.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_completed_transaction_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::CompletedTransaction(_)));
}

// Pending inbound transaction fields

/// Returns the transaction id as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_id(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(tx.id),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the amount as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_amount(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(tx.amount),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the timestamp as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_timestamp(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(tx.timestamp),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the transaction message as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_message(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(FFIString::new(&tx.message)),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns the status code of the transaction.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_status(
    handle: u64,
    error_out: *mut c_int,
) -> c_int {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(tx.status.as_code()),
        _ => None,
    });
    report(error_out, result, -1)
}

/// Returns a new public key handle for the transaction source.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_get_source_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingInboundTransaction(tx) => Some(tx.source),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Releases the pending inbound transaction.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_pending_inbound_transaction_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::PendingInboundTransaction(_)));
}

// Pending outbound transaction fields

/// Returns the transaction id as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_id(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.id),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the amount as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_amount(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.amount),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the fee as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_fee(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.fee),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the timestamp as an 8-byte big-endian byte vector handle.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_timestamp(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.timestamp),
        _ => None,
    })
    .map(register_u64);
    report(error_out, result, 0)
}

/// Returns the transaction message as an owned string.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_message(
    handle: u64,
    error_out: *mut c_int,
) -> FFIString {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(FFIString::new(&tx.message)),
        _ => None,
    });
    report(error_out, result, FFIString::null())
}

/// Returns the status code of the transaction.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_status(
    handle: u64,
    error_out: *mut c_int,
) -> c_int {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.status.as_code()),
        _ => None,
    });
    report(error_out, result, -1)
}

/// Returns a new public key handle for the transaction destination.
///
/// # Safety
/// `error_out` must be null or point to a writable int.
#[no_mangle]
pub unsafe extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_get_destination_public_key(
    handle: u64,
    error_out: *mut c_int,
) -> u64 {
    let result = registry::expect(handle, |object| match object {
        Object::PendingOutboundTransaction(tx) => Some(tx.destination),
        _ => None,
    })
    .map(|key| registry::insert(Object::PublicKey(key)));
    report(error_out, result, 0)
}

/// Releases the pending outbound transaction.
#[no_mangle]
pub extern "C" fn marlin_wallet_ffi_pending_outbound_transaction_destroy(handle: u64) {
    registry::destroy(handle, |object| matches!(object, Object::PendingOutboundTransaction(_)));
}
