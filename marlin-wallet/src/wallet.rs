//! The wallet aggregate: contact book and transaction stores.

use std::collections::BTreeMap;

use tracing::debug;

use crate::comms::CommsConfig;
use crate::contact::Contact;
use crate::error::WalletError;
use crate::transaction::{
    CompletedTransaction, PendingInboundTransaction, PendingOutboundTransaction,
};
use crate::types::{PublicKey, PUBLIC_KEY_LENGTH};

/// An in-process wallet.
///
/// Holds the contact book keyed by public key and the three transaction
/// stores. Accessors hand out snapshots; mutation goes through the explicit
/// add/remove methods.
#[derive(Debug)]
pub struct Wallet {
    identity: PublicKey,
    contacts: BTreeMap<PublicKey, Contact>,
    completed: Vec<CompletedTransaction>,
    pending_inbound: Vec<PendingInboundTransaction>,
    pending_outbound: Vec<PendingOutboundTransaction>,
}

impl Wallet {
    /// Opens a wallet for the given comms configuration.
    ///
    /// The wallet identity is folded from the comms database name so that
    /// reopening the same database yields the same identity. Key derivation
    /// proper lives below this library.
    pub fn new(config: &CommsConfig) -> Result<Self, WalletError> {
        let identity = fold_identity(config.database_name().as_bytes())?;
        debug!(
            database = config.database_name(),
            address = config.public_address(),
            "opening wallet"
        );
        Ok(Wallet {
            identity,
            contacts: BTreeMap::new(),
            completed: Vec::new(),
            pending_inbound: Vec::new(),
            pending_outbound: Vec::new(),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.identity
    }

    /// Snapshot of the contact book, ordered by public key.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    /// Inserts the contact, replacing any existing entry with the same
    /// public key. Returns true when an existing entry was replaced.
    pub fn add_update_contact(&mut self, contact: Contact) -> bool {
        self.contacts.insert(*contact.public_key(), contact).is_some()
    }

    /// Removes the contact with the given public key.
    pub fn remove_contact(&mut self, public_key: &PublicKey) -> Result<(), WalletError> {
        self.contacts.remove(public_key).map(|_| ()).ok_or(WalletError::ContactNotFound)
    }

    /// Spendable balance: completed amounts credited to the wallet identity
    /// minus completed amounts and fees debited from it, saturating at zero.
    pub fn available_balance(&self) -> u64 {
        self.completed.iter().fold(0u64, |acc, tx| {
            if tx.destination == self.identity {
                acc.saturating_add(tx.amount)
            } else if tx.source == self.identity {
                acc.saturating_sub(tx.amount.saturating_add(tx.fee))
            } else {
                acc
            }
        })
    }

    /// Sum of pending inbound amounts.
    pub fn pending_incoming_balance(&self) -> u64 {
        self.pending_inbound.iter().fold(0u64, |acc, tx| acc.saturating_add(tx.amount))
    }

    /// Sum of pending outbound amounts plus their fees.
    pub fn pending_outgoing_balance(&self) -> u64 {
        self.pending_outbound
            .iter()
            .fold(0u64, |acc, tx| acc.saturating_add(tx.amount).saturating_add(tx.fee))
    }

    pub fn completed_transactions(&self) -> Vec<CompletedTransaction> {
        self.completed.clone()
    }

    pub fn pending_inbound_transactions(&self) -> Vec<PendingInboundTransaction> {
        self.pending_inbound.clone()
    }

    pub fn pending_outbound_transactions(&self) -> Vec<PendingOutboundTransaction> {
        self.pending_outbound.clone()
    }

    pub fn completed_transaction_by_id(&self, id: u64) -> Result<CompletedTransaction, WalletError> {
        self.completed
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or(WalletError::TransactionNotFound(id))
    }

    pub fn pending_inbound_transaction_by_id(
        &self,
        id: u64,
    ) -> Result<PendingInboundTransaction, WalletError> {
        self.pending_inbound
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or(WalletError::TransactionNotFound(id))
    }

    pub fn pending_outbound_transaction_by_id(
        &self,
        id: u64,
    ) -> Result<PendingOutboundTransaction, WalletError> {
        self.pending_outbound
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or(WalletError::TransactionNotFound(id))
    }

    pub fn add_completed_transaction(&mut self, tx: CompletedTransaction) {
        self.completed.push(tx);
    }

    pub fn add_pending_inbound_transaction(&mut self, tx: PendingInboundTransaction) {
        self.pending_inbound.push(tx);
    }

    pub fn add_pending_outbound_transaction(&mut self, tx: PendingOutboundTransaction) {
        self.pending_outbound.push(tx);
    }
}

/// XOR-folds arbitrary bytes into a 32-byte identity key.
fn fold_identity(seed: &[u8]) -> Result<PublicKey, WalletError> {
    let mut out = [0u8; PUBLIC_KEY_LENGTH];
    for (i, byte) in seed.iter().enumerate() {
        out[i % PUBLIC_KEY_LENGTH] ^= byte.rotate_left((i / PUBLIC_KEY_LENGTH) as u32);
    }
    // A seed folding to all zeros would collide with the unset key.
    if out.iter().all(|b| *b == 0) {
        out[0] = 1;
    }
    PublicKey::from_bytes(&out)
}
