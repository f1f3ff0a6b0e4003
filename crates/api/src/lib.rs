//! Public API traits and types for the tlskex library
//!
//! This crate provides the contract every key-exchange mechanism implements,
//! the error type, the key and secret value types and the typed options the
//! operations accept.

pub mod error;
pub mod options;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use options::{HashAlgorithm, KeyPairOptions, SecretOptions};
pub use types::*;

pub use traits::{KeyExchange, PreMasterSecret};

// Group tables are part of the key types' public surface
pub use tlskex_params::{GroupKind, GroupParameter};
