//! X448 placeholder
//!
//! The group is listed in the registry and has a TLS 1.3 wire id, but no
//! arithmetic provider for it is linked. Every operation fails with the same
//! `Unsupported` error so callers can tell "not built" from "failed".

use rand::{CryptoRng, RngCore};
use tlskex_api::{
    Error, KeyExchange, KeyPair, KeyPairOptions, PrivateKey, PublicKey, Result, SecretOptions,
    SharedSecret,
};

/// Message carried by every X448 error
pub const X448_UNSUPPORTED_MESSAGE: &str =
    "X448 key exchange is not available: no X448 provider is linked into this build";

#[derive(Debug, Clone, Copy, Default)]
pub struct X448;

impl X448 {
    pub const NAME: &'static str = "x448";

    pub(crate) fn unsupported() -> Error {
        Error::unsupported(Self::NAME, X448_UNSUPPORTED_MESSAGE)
    }
}

impl KeyExchange for X448 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        _rng: &mut R,
        _options: &KeyPairOptions,
    ) -> Result<KeyPair> {
        Err(Self::unsupported())
    }

    fn compute_shared_secret(
        &self,
        _local: &PrivateKey,
        _peer: &PublicKey,
        _options: &SecretOptions,
    ) -> Result<SharedSecret> {
        Err(Self::unsupported())
    }
}
