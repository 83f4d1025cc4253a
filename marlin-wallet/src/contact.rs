//! Wallet contacts.

use crate::error::WalletError;
use crate::types::PublicKey;

/// A wallet contact: a display alias bound to a public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    alias: String,
    public_key: PublicKey,
}

impl Contact {
    /// Creates a contact. The alias must contain at least one
    /// non-whitespace character.
    pub fn new(alias: impl Into<String>, public_key: PublicKey) -> Result<Self, WalletError> {
        let alias = alias.into();
        if alias.trim().is_empty() {
            return Err(WalletError::InvalidContact("alias may not be empty".to_string()));
        }
        Ok(Contact {
            alias,
            public_key,
        })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}
