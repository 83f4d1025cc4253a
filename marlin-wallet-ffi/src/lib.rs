//! C ABI bindings for the marlin wallet library.
//!
//! Callers hold opaque `u64` handles backed by a generation-checked
//! registry; every fallible entry point reports its outcome through a
//! trailing `error_out` slot (zero on success). See `include/` for the
//! generated C header.

pub mod byte_vector;
pub mod comms_config;
pub mod contact;
pub mod error;
pub mod public_key;
pub(crate) mod registry;
pub mod transaction;
pub mod types;
pub mod utils;
pub mod wallet;

pub use byte_vector::*;
pub use comms_config::*;
pub use contact::*;
pub use error::*;
pub use public_key::*;
pub use transaction::*;
pub use types::*;
pub use utils::*;
pub use wallet::*;

#[cfg(test)]
#[path = "../tests/unit/test_error_handling.rs"]
mod test_error_handling;

#[cfg(test)]
#[path = "../tests/unit/test_handle_registry.rs"]
mod test_handle_registry;

#[cfg(test)]
#[path = "../tests/unit/test_memory_management.rs"]
mod test_memory_management;

#[cfg(test)]
#[path = "../tests/unit/test_public_key.rs"]
mod test_public_key;

#[cfg(test)]
#[path = "../tests/unit/test_contact_operations.rs"]
mod test_contact_operations;

#[cfg(test)]
#[path = "../tests/unit/test_transaction_accessors.rs"]
mod test_transaction_accessors;

#[cfg(test)]
#[path = "../tests/unit/test_comms_config.rs"]
mod test_comms_config;

#[cfg(test)]
#[path = "../tests/unit/test_wallet_operations.rs"]
mod test_wallet_operations;
