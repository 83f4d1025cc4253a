//! Common value types shared by the wallet and its FFI surface.

use std::fmt;

use crate::error::WalletError;

/// Length of a serialized public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// A node or contact public key.
///
/// This layer treats keys as opaque 32-byte identifiers; derivation and
/// signature logic live below the wallet library boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(WalletError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                bytes.len()
            )));
        }
        let mut key = [0u8; PUBLIC_KEY_LENGTH];
        key.copy_from_slice(bytes);
        Ok(PublicKey(key))
    }

    pub fn from_hex(s: &str) -> Result<Self, WalletError> {
        let bytes =
            hex::decode(s.trim()).map_err(|e| WalletError::InvalidPublicKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Lifecycle status of a transaction as reported across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Broadcast,
    Mined,
    Imported,
    Pending,
    Coinbase,
    Unknown,
}

impl TransactionStatus {
    /// Integer code used on the wire. Unknown maps to -1.
    pub fn as_code(&self) -> i32 {
        match self {
            TransactionStatus::Completed => 0,
            TransactionStatus::Broadcast => 1,
            TransactionStatus::Mined => 2,
            TransactionStatus::Imported => 3,
            TransactionStatus::Pending => 4,
            TransactionStatus::Coinbase => 5,
            TransactionStatus::Unknown => -1,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => TransactionStatus::Completed,
            1 => TransactionStatus::Broadcast,
            2 => TransactionStatus::Mined,
            3 => TransactionStatus::Imported,
            4 => TransactionStatus::Pending,
            5 => TransactionStatus::Coinbase,
            _ => TransactionStatus::Unknown,
        }
    }
}

/// Transport used by the comms layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportType {
    Memory,
    #[default]
    Tcp,
    Tor,
}
