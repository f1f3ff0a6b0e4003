//! The common key-exchange contract
//!
//! Finite-field, elliptic-curve and modern-curve agreement all expose the same
//! two operations: generate a local key pair, then combine a local private key
//! with a peer public key. Parameters are resolved and validated before any
//! provider call, so mismatched inputs never reach the arithmetic.

use crate::options::{KeyPairOptions, SecretOptions};
use crate::types::{KeyPair, PrivateKey, PublicKey, SharedSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};

/// Trait implemented by every key-agreement variant.
///
/// # Security Requirements
/// - All randomness comes from the caller's CSPRNG.
/// - `compute_shared_secret` must reject keys from different groups before
///   doing any arithmetic.
pub trait KeyExchange {
    /// Stable lowercase identifier of the mechanism, e.g. `"ecdhe"`
    fn name(&self) -> &'static str;

    /// Generate a local key pair.
    ///
    /// The returned pair reports the group actually used, which may differ
    /// from the requested one where a variant documents a fallback.
    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        options: &KeyPairOptions,
    ) -> Result<KeyPair>;

    /// Combine `local` with the peer's `peer` public key.
    fn compute_shared_secret(
        &self,
        local: &PrivateKey,
        peer: &PublicKey,
        options: &SecretOptions,
    ) -> Result<SharedSecret>;
}

/// Session-style exchanges that hold an un-derived secret once computed
pub trait PreMasterSecret {
    /// The pre-master secret, if it has been generated or recovered yet
    fn pre_master_secret(&self) -> Option<&[u8]>;
}
