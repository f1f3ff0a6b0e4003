//! # tlskex
//!
//! One key-exchange contract for a TLS stack: finite-field DHE, ECDHE,
//! X25519, an X448 placeholder, static RSA key transport and TLS 1.3 key
//! shares.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tlskex = "0.3"
//! ```
//!
//! ```
//! use tlskex::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let ecdhe = Exchange::from_name("ecdhe")?;
//! let alice = ecdhe.generate_key_pair(&mut OsRng, &KeyPairOptions::new())?;
//! let bob = ecdhe.generate_key_pair(&mut OsRng, &KeyPairOptions::new())?;
//!
//! let opts = SecretOptions::default();
//! let ab = ecdhe.compute_shared_secret(alice.private_key(), bob.public_key(), &opts)?;
//! let ba = ecdhe.compute_shared_secret(bob.private_key(), alice.public_key(), &opts)?;
//! assert_eq!(ab, ba);
//! # Ok::<(), tlskex::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for the option types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`tlskex-api`]: the contract, error type, key types and options
//! - [`tlskex-params`]: group tables and protocol constants
//! - [`tlskex-exchange`]: the mechanisms, registry and wire codec

// Core re-exports
pub use tlskex_api as api;
pub use tlskex_exchange as exchange;
pub use tlskex_params as params;

/// Common imports for tlskex users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{KeyExchange, PreMasterSecret};

    // Re-export value and option types
    pub use crate::api::{
        HashAlgorithm, KeyPair, KeyPairOptions, PrivateKey, PublicKey, SecretOptions,
        SharedSecret,
    };

    // Re-export mechanisms
    pub use crate::exchange::{
        Dhe, DheClientSession, Ecdhe, EcdheClientSession, Exchange, KeyShareEntry,
        RsaKeyTransport, Tls13KeyExchange, X25519, X448,
    };
}
