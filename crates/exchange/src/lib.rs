//! Key-exchange mechanisms for TLS
//!
//! Every agreement-style mechanism implements [`KeyExchange`]. The set of
//! mechanisms is fixed, so [`Exchange`] closes over it for callers that pick
//! one by name at runtime. Stateful handshake helpers (RSA key transport, the
//! TLS 1.2 client sessions and TLS 1.3 key shares) sit next to them.

pub mod derive;
pub mod dh;
pub mod ecdh;
pub mod registry;
pub mod rsa;
pub mod tls13;
pub mod x25519;
pub mod x448;

mod share;

// Re-exports
pub use dh::{Dhe, DheClientSession};
pub use ecdh::{EcProvider, Ecdhe, EcdheClientSession, NativeEcProvider};
pub use crate::rsa::{generate_server_key, RsaKeyTransport, RsaServerKey};
pub use tls13::{KeyShareEntry, Tls13KeyExchange};
pub use x25519::X25519;
pub use x448::{X448, X448_UNSUPPORTED_MESSAGE};

use rand::{CryptoRng, RngCore};
use tlskex_api::{
    Error, KeyExchange, KeyPair, KeyPairOptions, PrivateKey, PublicKey, Result, SecretOptions,
    SharedSecret,
};

/// The closed set of key-exchange mechanisms
#[derive(Debug, Clone)]
pub enum Exchange {
    Dhe(Dhe),
    Ecdhe(Ecdhe),
    X25519(X25519),
    X448(X448),
    /// Key transport; the agreement methods report `Unsupported`
    Rsa,
}

impl Exchange {
    /// Look a mechanism up by its `name()`
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            Dhe::NAME => Ok(Self::Dhe(Dhe)),
            Ecdhe::<NativeEcProvider>::NAME => Ok(Self::Ecdhe(Ecdhe::new())),
            X25519::NAME => Ok(Self::X25519(X25519)),
            X448::NAME => Ok(Self::X448(X448)),
            RsaKeyTransport::NAME => Ok(Self::Rsa),
            other => Err(Error::invalid_parameter(
                "exchange",
                format!("unknown key exchange: {other}"),
            )),
        }
    }

    /// Every mechanism, in a fixed order
    pub fn all() -> [Self; 5] {
        [
            Self::Dhe(Dhe),
            Self::Ecdhe(Ecdhe::new()),
            Self::X25519(X25519),
            Self::X448(X448),
            Self::Rsa,
        ]
    }

    fn rsa_unsupported() -> Error {
        Error::unsupported(
            RsaKeyTransport::NAME,
            "RSA key transport has no agreement step; use RsaKeyTransport",
        )
    }
}

impl KeyExchange for Exchange {
    fn name(&self) -> &'static str {
        match self {
            Self::Dhe(x) => x.name(),
            Self::Ecdhe(x) => x.name(),
            Self::X25519(x) => x.name(),
            Self::X448(x) => x.name(),
            Self::Rsa => RsaKeyTransport::NAME,
        }
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        options: &KeyPairOptions,
    ) -> Result<KeyPair> {
        match self {
            Self::Dhe(x) => x.generate_key_pair(rng, options),
            Self::Ecdhe(x) => x.generate_key_pair(rng, options),
            Self::X25519(x) => x.generate_key_pair(rng, options),
            Self::X448(x) => x.generate_key_pair(rng, options),
            Self::Rsa => Err(Self::rsa_unsupported()),
        }
    }

    fn compute_shared_secret(
        &self,
        local: &PrivateKey,
        peer: &PublicKey,
        options: &SecretOptions,
    ) -> Result<SharedSecret> {
        match self {
            Self::Dhe(x) => x.compute_shared_secret(local, peer, options),
            Self::Ecdhe(x) => x.compute_shared_secret(local, peer, options),
            Self::X25519(x) => x.compute_shared_secret(local, peer, options),
            Self::X448(x) => x.compute_shared_secret(local, peer, options),
            Self::Rsa => Err(Self::rsa_unsupported()),
        }
    }
}
