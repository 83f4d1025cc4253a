//! In-process wallet library.
//!
//! Provides the entities an embedding application works with through the
//! companion FFI crate: contacts, completed and pending transactions, comms
//! configuration and the wallet aggregate itself. Network protocol and key
//! derivation logic are out of scope for this layer.

pub mod comms;
pub mod contact;
pub mod error;
pub mod logging;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use comms::CommsConfig;
pub use contact::Contact;
pub use error::{LoggingError, WalletError};
pub use logging::{init_logging, LogFileConfig, LoggingConfig, LoggingGuard};
pub use transaction::{
    CompletedTransaction, PendingInboundTransaction, PendingOutboundTransaction,
};
pub use types::{PublicKey, TransactionStatus, TransportType, PUBLIC_KEY_LENGTH};
pub use wallet::Wallet;

/// Re-export so embedders can name the level filter without depending on
/// tracing directly.
pub use tracing::level_filters::LevelFilter;
