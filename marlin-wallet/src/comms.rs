//! Comms layer configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::WalletError;
use crate::types::TransportType;

/// Configuration for the wallet's peer-to-peer comms layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommsConfig {
    public_address: String,
    transport: TransportType,
    database_name: String,
    datastore_path: PathBuf,
    discovery_timeout: Duration,
}

impl CommsConfig {
    /// Builds and validates a comms configuration.
    ///
    /// The datastore path must refer to an existing directory; the database
    /// name must be non-empty; the public address must be a multiaddr-style
    /// string such as `/ip4/127.0.0.1/tcp/9838`.
    pub fn new(
        public_address: impl Into<String>,
        transport: TransportType,
        database_name: impl Into<String>,
        datastore_path: impl Into<PathBuf>,
        discovery_timeout: Duration,
    ) -> Result<Self, WalletError> {
        let public_address = public_address.into();
        let database_name = database_name.into();
        let datastore_path = datastore_path.into();

        validate_public_address(&public_address)?;
        if database_name.trim().is_empty() {
            return Err(WalletError::Config("database name may not be empty".to_string()));
        }
        validate_datastore_path(&datastore_path)?;

        Ok(CommsConfig {
            public_address,
            transport,
            database_name,
            datastore_path,
            discovery_timeout,
        })
    }

    pub fn public_address(&self) -> &str {
        &self.public_address
    }

    pub fn transport(&self) -> TransportType {
        self.transport
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn datastore_path(&self) -> &Path {
        &self.datastore_path
    }

    pub fn discovery_timeout(&self) -> Duration {
        self.discovery_timeout
    }
}

fn validate_public_address(address: &str) -> Result<(), WalletError> {
    if !address.starts_with('/') {
        return Err(WalletError::Config(format!(
            "public address must be a multiaddr starting with '/': {}",
            address
        )));
    }
    let segments: Vec<&str> = address[1..].split('/').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(WalletError::Config(format!("malformed public address: {}", address)));
    }
    Ok(())
}

fn validate_datastore_path(path: &Path) -> Result<(), WalletError> {
    if !path.exists() {
        return Err(WalletError::Config(format!(
            "datastore directory does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(WalletError::Config(format!(
            "datastore path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}
