//! Error types for the wallet library.

use thiserror::Error;

/// Main error type for wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    #[error("Contact not found")]
    ContactNotFound,

    #[error("Transaction {0} not found")]
    TransactionNotFound(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logging-related errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    DirectoryCreation(#[from] std::io::Error),

    #[error("Subscriber initialization failed: {0}")]
    SubscriberInit(String),

    #[error("Log rotation failed: {0}")]
    RotationFailed(String),
}

/// Result alias for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result alias for logging operations.
pub type LoggingResult<T> = Result<T, LoggingError>;
