//! Generation-checked handle registry.
//!
//! Callers hold `u64` handles instead of raw pointers: the high 32 bits are
//! a slot index, the low 32 bits the slot generation at insertion time.
//! Destroying a slot bumps its generation, so a stale handle fails the
//! generation check and is reported as `UseAfterFree` rather than touching
//! freed memory. Zero is never a valid handle.

use std::sync::Mutex;

use marlin_wallet::{
    CommsConfig, CompletedTransaction, Contact, PendingInboundTransaction,
    PendingOutboundTransaction, PublicKey, Wallet,
};

use crate::error::{FFIError, FFIErrorCode};

/// Everything a handle can refer to.
pub(crate) enum Object {
    ByteVector(Vec<u8>),
    PublicKey(PublicKey),
    Contact(Contact),
    Contacts(Vec<Contact>),
    CompletedTransaction(CompletedTransaction),
    CompletedTransactions(Vec<CompletedTransaction>),
    PendingInboundTransaction(PendingInboundTransaction),
    PendingInboundTransactions(Vec<PendingInboundTransaction>),
    PendingOutboundTransaction(PendingOutboundTransaction),
    PendingOutboundTransactions(Vec<PendingOutboundTransaction>),
    CommsConfig(CommsConfig),
    Wallet(Wallet),
}

impl Object {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Object::ByteVector(_) => "byte vector",
            Object::PublicKey(_) => "public key",
            Object::Contact(_) => "contact",
            Object::Contacts(_) => "contact list",
            Object::CompletedTransaction(_) => "completed transaction",
            Object::CompletedTransactions(_) => "completed transaction list",
            Object::PendingInboundTransaction(_) => "pending inbound transaction",
            Object::PendingInboundTransactions(_) => "pending inbound transaction list",
            Object::PendingOutboundTransaction(_) => "pending outbound transaction",
            Object::PendingOutboundTransactions(_) => "pending outbound transaction list",
            Object::CommsConfig(_) => "comms config",
            Object::Wallet(_) => "wallet",
        }
    }
}

struct Slot {
    generation: u32,
    object: Option<Object>,
}

struct HandleTable {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl HandleTable {
    const fn new() -> Self {
        HandleTable {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    fn insert(&mut self, object: Object) -> u64 {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].object = Some(object);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 1,
                    object: Some(object),
                });
                (self.slots.len() - 1) as u32
            }
        };
        let generation = self.slots[index as usize].generation;
        pack(index, generation)
    }

    fn slot_for(&self, handle: u64) -> Result<usize, FFIError> {
        let (index, generation) = unpack(handle)?;
        let slot = self.slots.get(index).ok_or_else(|| {
            FFIError::new(FFIErrorCode::InvalidHandle, format!("unknown handle {:#x}", handle))
        })?;
        if slot.generation != generation || slot.object.is_none() {
            return Err(FFIError::new(
                FFIErrorCode::UseAfterFree,
                format!("handle {:#x} refers to a destroyed object", handle),
            ));
        }
        Ok(index)
    }

    fn remove(&mut self, handle: u64, check: fn(&Object) -> bool) -> Result<Object, FFIError> {
        let index = self.slot_for(handle)?;
        {
            let object = self.slots[index].object.as_ref().unwrap();
            if !check(object) {
                return Err(wrong_type_error(object));
            }
        }
        let slot = &mut self.slots[index];
        slot.generation = match slot.generation.wrapping_add(1) {
            0 => 1,
            g => g,
        };
        self.free.push(index as u32);
        Ok(slot.object.take().unwrap())
    }
}

fn pack(index: u32, generation: u32) -> u64 {
    ((index as u64) << 32) | generation as u64
}

fn unpack(handle: u64) -> Result<(usize, u32), FFIError> {
    if handle == 0 {
        return Err(FFIError::new(FFIErrorCode::NullPointer, "null handle"));
    }
    Ok(((handle >> 32) as usize, handle as u32))
}

fn wrong_type_error(found: &Object) -> FFIError {
    FFIError::new(
        FFIErrorCode::InvalidHandle,
        format!("handle refers to a {}, not the expected object type", found.kind()),
    )
}

static TABLE: Mutex<HandleTable> = Mutex::new(HandleTable::new());

fn lock_table() -> std::sync::MutexGuard<'static, HandleTable> {
    // A poisoned table only means another thread panicked mid-call; the
    // slots themselves are always in a consistent state.
    TABLE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registers an object and returns its handle.
pub(crate) fn insert(object: Object) -> u64 {
    lock_table().insert(object)
}

/// Runs `f` against the live object behind `handle`. The table lock is held
/// while `f` runs; `f` must not call back into the registry.
pub(crate) fn with<R>(
    handle: u64,
    f: impl FnOnce(&Object) -> Result<R, FFIError>,
) -> Result<R, FFIError> {
    let table = lock_table();
    let index = table.slot_for(handle)?;
    f(table.slots[index].object.as_ref().unwrap())
}

/// Runs `f` against the live object behind `handle`, mutably.
pub(crate) fn with_mut<R>(
    handle: u64,
    f: impl FnOnce(&mut Object) -> Result<R, FFIError>,
) -> Result<R, FFIError> {
    let mut table = lock_table();
    let index = table.slot_for(handle)?;
    f(table.slots[index].object.as_mut().unwrap())
}

/// Removes and returns the object behind `handle` if it passes `check`.
pub(crate) fn remove(handle: u64, check: fn(&Object) -> bool) -> Result<Object, FFIError> {
    lock_table().remove(handle, check)
}

/// Destroy entry points return nothing, so a failed destroy (stale handle,
/// wrong type) is recorded in the thread-local last error only.
pub(crate) fn destroy(handle: u64, check: fn(&Object) -> bool) {
    match remove(handle, check) {
        Ok(_) => crate::error::clear_last_error(),
        Err(e) => crate::error::set_last_error(&e.message),
    }
}

/// Convenience for entry points that expect a specific variant.
pub(crate) fn expect<R>(
    handle: u64,
    f: impl FnOnce(&Object) -> Option<R>,
) -> Result<R, FFIError> {
    with(handle, |object| f(object).ok_or_else(|| wrong_type_error(object)))
}
