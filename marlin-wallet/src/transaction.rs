//! Transaction records held by the wallet.
//!
//! Amounts, fees and timestamps are plain `u64` here; the FFI layer is
//! responsible for encoding them for callers whose integer types cannot
//! represent the full unsigned range.

use crate::types::{PublicKey, TransactionStatus};

/// A transaction that has completed negotiation between both parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTransaction {
    pub id: u64,
    pub source: PublicKey,
    pub destination: PublicKey,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub message: String,
    pub status: TransactionStatus,
}

/// An inbound transaction awaiting finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInboundTransaction {
    pub id: u64,
    pub source: PublicKey,
    pub amount: u64,
    pub timestamp: u64,
    pub message: String,
    pub status: TransactionStatus,
}

/// An outbound transaction awaiting the recipient's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOutboundTransaction {
    pub id: u64,
    pub destination: PublicKey,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u64,
    pub message: String,
    pub status: TransactionStatus,
}
